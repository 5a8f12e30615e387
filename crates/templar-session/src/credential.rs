//! The opaque session credential.

use std::fmt;

/// An opaque session token authorizing use of the external editor.
///
/// The token's format is owned by the remote authority — to us it is just
/// a string. What this type adds is *handling discipline*:
///
/// - It is acquired at most once per controller lifetime and lives only in
///   process memory. Nothing in Templar persists it.
/// - Its `Debug` and `Display` impls are redacted, so a credential can
///   never leak into logs through a formatting macro. The real value is
///   only reachable through the explicit [`expose`](Self::expose) call,
///   which widget implementations need to hand the token to the vendor SDK.
///
/// Deliberately NOT `Serialize` — serializing a credential is exactly the
/// kind of accidental persistence this type exists to prevent.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw token received from the authority.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    ///
    /// The name is a speed bump: call sites read `credential.expose()`,
    /// which makes every place the secret leaves this type easy to audit.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Redacted — shows only the token length, never its content.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<redacted, {} bytes>)", self.0.len())
    }
}

/// Redacted, same as `Debug`. A credential that ends up in a log line
/// via `{}` prints nothing useful to an attacker.
impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<redacted credential>")
    }
}
