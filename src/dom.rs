//! Host document access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bootstrapper only needs to look an element up by id. Keeping that
//! behind a trait lets the mount path run against `web_sys::Document` in the
//! browser and against in-memory documents in native tests.

/// A document that can resolve elements by id.
pub trait HostDocument {
    type Element;

    /// Return the element with the given id, if the document has one.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

#[cfg(feature = "csr")]
impl HostDocument for web_sys::Document {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        self.get_element_by_id(id)
    }
}
