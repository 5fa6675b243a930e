//! Startup: locate the mount point and render the shell into it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the WASM module starts. A page without the mount point is
//! a deployment mistake, so the bootstrapper reports it immediately and never
//! falls back to another target such as `<body>`.

use crate::config::BootConfig;
use crate::dom::HostDocument;
use crate::error::BootError;

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// Resolve `config.mount_id` in `document` and hand the element to `render`.
///
/// `render` is invoked exactly once on success and never on failure.
///
/// # Errors
///
/// Returns [`BootError::MissingMountPoint`] when the document has no element
/// with the configured id.
pub fn mount<D, F, R>(document: &D, config: &BootConfig, render: F) -> Result<R, BootError>
where
    D: HostDocument + ?Sized,
    F: FnOnce(D::Element) -> R,
{
    let Some(root) = document.element_by_id(&config.mount_id) else {
        log::error!("mount point #{} not found", config.mount_id);
        return Err(BootError::MissingMountPoint { id: config.mount_id.clone() });
    };

    let mounted = render(root);
    log::info!("daily check-in mounted into #{}", config.mount_id);
    Ok(mounted)
}

/// Browser startup: init logging, then mount [`crate::app::App`] into the
/// page, replacing whatever the mount point held.
///
/// # Errors
///
/// Returns [`BootError::HostUnavailable`] without a window document, and
/// [`BootError::MissingMountPoint`] when the page lacks the mount point.
#[cfg(feature = "csr")]
pub fn launch(config: &BootConfig) -> Result<(), BootError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::strict::strict_mode;

    crate::logging::init(config.log_level);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootError::HostUnavailable)?;

    let strict = config.strict;
    mount(&document, config, move |root| {
        root.set_inner_html("");
        let root = root.unchecked_into::<web_sys::HtmlElement>();
        leptos::mount::mount_to(root, move || strict_mode(strict, || view! { <App/> })).forget();
    })
}
