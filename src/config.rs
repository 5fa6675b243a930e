//! Startup configuration for the bootstrapper.
//!
//! The page has no environment to read from, so configuration is a typed
//! value with defaults that depend only on the build profile.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id the shell is mounted into unless overridden.
pub const DEFAULT_MOUNT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootConfig {
    /// Id of the host element that receives the rendered shell.
    pub mount_id: String,
    /// Maximum level forwarded to the browser console.
    pub log_level: log::Level,
    /// Run the strict-mode render check. Only has an effect in debug builds.
    pub strict: bool,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            log_level: if cfg!(debug_assertions) { log::Level::Info } else { log::Level::Warn },
            strict: cfg!(debug_assertions),
        }
    }
}

impl BootConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
