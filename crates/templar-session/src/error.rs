//! Error types for the session layer.

/// Errors that can occur while acquiring a session credential.
///
/// All of these are fatal to the *current* request only: the controller
/// stays uninitialized and the caller may simply try again. Nothing in
/// this crate retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The remote authority looked at the request and said no — bad user
    /// id, revoked account, misconfigured intermediary, expired vendor
    /// secret.
    #[error("credential request rejected: {0}")]
    Rejected(String),

    /// The authority (or the intermediary in front of it) could not be
    /// reached at all: DNS failure, connection refused, timeout.
    #[error("auth service unreachable: {0}")]
    Unreachable(String),

    /// The authority answered, but the response body was not in the
    /// shape we expect. Usually a version mismatch between the host and
    /// its intermediary.
    #[error("malformed auth response: {0}")]
    MalformedResponse(String),
}
