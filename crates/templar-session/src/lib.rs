//! Session credential acquisition for Templar.
//!
//! Before the external editor widget can be started it needs a session
//! credential: an opaque token proving the host is authorized to run the
//! editor for a given user. This crate handles that one concern:
//!
//! 1. **The contract** — the [`SessionProvider`] trait: "give me a user id,
//!    I'll give you a credential (or an error)".
//! 2. **The value** — [`Credential`], an opaque token that refuses to be
//!    logged in cleartext.
//! 3. **Implementations** — [`ProxyProvider`] (talks to your trusted
//!    backend intermediary over HTTP, behind the `proxy` feature) and
//!    [`DevProvider`] (mints local throwaway tokens for development).
//!
//! # How it fits in the stack
//!
//! ```text
//! Controller (above)  ← acquires a credential once, on first start
//!     ↕
//! Session Layer (this crate)  ← turns a user id into a credential
//!     ↕
//! Trusted intermediary (external)  ← holds the real vendor secret
//! ```
//!
//! The long-lived secret material (the vendor client secret) lives in the
//! intermediary, never here. This crate only ever sees the short-lived
//! session token it hands back.

#![allow(async_fn_in_trait)]

mod credential;
mod dev;
mod error;
mod provider;
#[cfg(feature = "proxy")]
mod proxy;

pub use credential::Credential;
pub use dev::DevProvider;
pub use error::SessionError;
pub use provider::SessionProvider;
#[cfg(feature = "proxy")]
pub use proxy::ProxyProvider;
