//! The credential acquisition hook.
//!
//! Templar doesn't implement authentication itself — that's the job of
//! your backend intermediary and, behind it, the editor vendor's auth
//! service. Instead, this module defines the [`SessionProvider`] trait: a
//! single async method that takes a user identifier and returns a
//! [`Credential`] or an error. The controller calls it exactly once, the
//! first time a template is requested.
//!
//! Having the seam be a trait means:
//! - Production hosts use [`ProxyProvider`](crate::ProxyProvider) against
//!   their real intermediary.
//! - Demos use [`DevProvider`](crate::DevProvider).
//! - Tests use a scripted fake that fails on command.
//!
//! All without changing any framework code.

use crate::{Credential, SessionError};

/// Acquires a session credential for a user.
///
/// # Trait bounds
///
/// - `Send + Sync` → the provider may be called from any async task.
/// - `'static` → it owns its data; it lives as long as the controller.
///
/// # Example
///
/// ```rust
/// use templar_session::{Credential, SessionError, SessionProvider};
///
/// /// Hands every user the same fixed token. Test wiring only.
/// struct FixedProvider(&'static str);
///
/// impl SessionProvider for FixedProvider {
///     async fn acquire(
///         &self,
///         _user_id: &str,
///     ) -> Result<Credential, SessionError> {
///         Ok(Credential::new(self.0))
///     }
/// }
/// ```
pub trait SessionProvider: Send + Sync + 'static {
    /// Exchanges a user identifier for a session credential.
    ///
    /// Called by the controller during its first acquire-and-start
    /// sequence. Suspends until the authority answers; the controller
    /// imposes no timeout of its own, so any deadline must live in the
    /// provider (or the HTTP client underneath it).
    ///
    /// # Errors
    /// - [`SessionError::Rejected`] — the authority refused the request
    /// - [`SessionError::Unreachable`] — the authority couldn't be reached
    /// - [`SessionError::MalformedResponse`] — the answer didn't parse
    fn acquire(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Credential, SessionError>> + Send;
}
