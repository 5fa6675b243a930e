//! # checkin
//!
//! Leptos + WASM frontend scaffold for the daily check-in page.
//!
//! The crate renders a static shell (`app::App`) and mounts it into the
//! host page's `#root` element (`boot`). The default build is native and
//! exists for tests and static prerendering; the `csr` feature produces the
//! browser build.

pub mod app;
pub mod boot;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod strict;

pub use app::App;
pub use config::BootConfig;
pub use error::BootError;

/// WASM entry point. Mounts the shell with the default configuration.
///
/// A missing mount point is returned to JS and surfaces as a thrown error.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    boot::launch(&BootConfig::default()).map_err(Into::into)
}
