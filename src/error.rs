//! Startup errors.

/// Error returned by [`crate::boot::mount`] and [`crate::boot::launch`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    /// The host document has no element with the configured id.
    #[error("mount point `#{id}` not found in host document")]
    MissingMountPoint { id: String },
    /// No window or document is reachable from the running context.
    #[error("host document is unavailable")]
    HostUnavailable,
}

#[cfg(feature = "csr")]
impl From<BootError> for wasm_bindgen::JsValue {
    fn from(err: BootError) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}
