//! Error types for the widget contract.

/// Errors reported by an external editor widget.
///
/// The vendor SDK is a black box, so every variant carries the vendor's
/// own description as an opaque string — we can surface it, but not
/// interpret it.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The SDK refused to construct an instance.
    #[error("editor instance creation failed: {0}")]
    CreateFailed(String),

    /// The `start` call was rejected: malformed initial document, the
    /// mount container doesn't exist, or the vendor service is down.
    #[error("editor start rejected: {0}")]
    StartRejected(String),

    /// A `load` (reload) call was rejected. The instance stays up and
    /// the previously displayed document remains on screen.
    #[error("document load rejected: {0}")]
    LoadRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_vendor_cause() {
        let err = WidgetError::StartRejected("container #editor not found".into());
        assert!(err.to_string().contains("container #editor not found"));

        let err = WidgetError::LoadRejected("schema version 99".into());
        assert!(err.to_string().contains("schema version 99"));
    }
}
