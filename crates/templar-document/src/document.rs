//! The opaque template document value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::DocumentError;

/// An opaque, externally-defined template document.
///
/// Internally this is just a `serde_json::Value` — a tree of sections,
/// rows, columns, and modules whose shape is defined entirely by the
/// external editor widget. Templar passes it through unexamined.
///
/// ## The one invariant
///
/// Nothing in this framework reads or writes *inside* the document. The
/// only structural question ever asked is [`is_empty`](Self::is_empty):
/// does the value carry a document at all, or is it JSON `null`? Keeping
/// that promise is what lets the widget vendor evolve their schema without
/// breaking hosts.
///
/// `#[serde(transparent)]` makes the wrapper invisible on the wire — a
/// `TemplateDocument` serializes exactly as its inner JSON, with no extra
/// nesting.
///
/// ## Example
///
/// ```rust
/// use templar_document::TemplateDocument;
///
/// let doc = TemplateDocument::from_str(r#"{"rows": []}"#).unwrap();
/// assert!(!doc.is_empty());
///
/// let nothing = TemplateDocument::from_str("null").unwrap();
/// assert!(nothing.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateDocument(Value);

impl TemplateDocument {
    /// Wraps an already-parsed JSON value as a document.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parses a raw save payload (bytes) into a document.
    ///
    /// This is the entry point for the widget's `onSave` callback, which
    /// delivers the serialized document as bytes.
    ///
    /// # Errors
    /// Returns [`DocumentError::Parse`] if the bytes are not valid JSON.
    pub fn from_slice(data: &[u8]) -> Result<Self, DocumentError> {
        serde_json::from_slice(data)
            .map(Self)
            .map_err(DocumentError::Parse)
    }

    /// Parses a string payload into a document.
    ///
    /// # Errors
    /// Returns [`DocumentError::Parse`] if the string is not valid JSON.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(data)
            .map(Self)
            .map_err(DocumentError::Parse)
    }

    /// Returns `true` if this value carries no document (JSON `null`).
    ///
    /// This is the controller's presence/absence check — the ONLY
    /// inspection the framework ever performs on a document.
    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }

    /// Borrows the inner JSON value.
    ///
    /// Intended for widget implementations, which need the raw value to
    /// hand to the vendor SDK. Host code should have no reason to call
    /// this.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the document, returning the inner JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

// =========================================================================
// Tests
// =========================================================================
