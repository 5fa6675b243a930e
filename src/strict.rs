//! Development-only render check.
//!
//! Mirrors a strict-mode wrapper: in debug builds the wrapped render runs one
//! extra time and the first result is discarded, so a render that is not a
//! pure function of its inputs shows up during development. Release builds
//! render exactly once.

#[cfg(test)]
#[path = "strict_test.rs"]
mod strict_test;

/// Invoke `render`, double-invoking it first when the check is active.
pub fn strict_mode<V, F>(enabled: bool, render: F) -> V
where
    F: Fn() -> V,
{
    if enabled && cfg!(debug_assertions) {
        log::debug!("strict mode: discarding first render");
        drop(render());
    }
    render()
}
