//! Browser console logging.
//!
//! Routes `log` records to the devtools console and installs the panic hook
//! so a startup panic is readable there. Natively this does nothing; tests
//! leave the `log` facade without a backend.

/// Install the console logger and panic hook. Safe to call more than once.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn init(level: log::Level) {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(level) {
            log::debug!("console logger already installed: {err}");
        }
    }
}
