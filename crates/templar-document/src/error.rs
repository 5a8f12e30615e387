//! Error types for the document layer.
//!
//! Each crate in Templar defines its own error enum. This keeps errors
//! specific and meaningful — when you see a `DocumentError`, you know the
//! problem is a malformed payload, not an auth failure or a widget rejection.

/// Errors that can occur in the document layer.
///
/// `#[derive(thiserror::Error)]` auto-generates the `std::error::Error`
/// trait implementation. The `#[error("...")]` attributes define the
/// human-readable message for each variant.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A raw save payload from the widget did not parse as JSON.
    ///
    /// Common causes: truncated payloads, a widget version emitting a
    /// format we don't recognize, or plain garbage on the callback.
    /// The inner `serde_json::Error` is the original parser error; we
    /// wrap it so callers deal with `DocumentError` uniformly.
    #[error("save payload parse failed: {0}")]
    Parse(#[source] serde_json::Error),
}
