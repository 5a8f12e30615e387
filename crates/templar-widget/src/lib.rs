//! The external editor widget contract for Templar.
//!
//! The actual editor — rendering, drag-and-drop, undo/redo, the save
//! format — lives in a vendor SDK that this framework treats as a black
//! box. This crate defines the *shape* of that box:
//!
//! - **[`EditorWidget`]** — a factory that turns a session credential into
//!   a running editor instance.
//! - **[`EditorHandle`]** — the live instance: start it once, then reload
//!   documents into it as many times as you like.
//! - **[`EditorEvents`]** — the callback set a widget is given at start,
//!   through which it reports saves and internal errors.
//! - **[`EditorConfig`]** / **[`ContainerId`]** — where and how to mount.
//! - **[`WidgetError`]** — the ways the box can say no.
//!
//! # How it fits in the stack
//!
//! ```text
//! Controller (above)  ← decides when to create/start/reload
//!     ↕
//! Widget contract (this crate)  ← the seam the vendor SDK sits behind
//!     ↕
//! Vendor SDK (external)  ← opaque; owns rendering, history, save format
//! ```

#![allow(async_fn_in_trait)]

mod config;
mod error;
mod events;

pub use config::{ContainerId, EditorConfig};
pub use error::WidgetError;
pub use events::EditorEvents;

use std::sync::Arc;

use templar_document::TemplateDocument;
use templar_session::Credential;

/// A factory for external editor instances.
///
/// Implementations wrap a concrete vendor SDK (or a fake, in tests).
/// The controller calls [`create`](Self::create) at most once per
/// lifetime — the heavyweight instance is made exactly when the first
/// template arrives, never again.
pub trait EditorWidget: Send + Sync + 'static {
    /// The live-instance type produced by this widget.
    type Handle: EditorHandle;

    /// Constructs an editor instance bound to the given credential.
    ///
    /// This is construction only — nothing is mounted or rendered until
    /// [`EditorHandle::start`] is called. The credential is moved in: the
    /// instance owns it from here on, and the controller never sees it
    /// again.
    ///
    /// # Errors
    /// Returns [`WidgetError::CreateFailed`] if the SDK refuses to
    /// construct an instance (bad credential format, SDK not loaded).
    async fn create(
        &self,
        credential: Credential,
    ) -> Result<Self::Handle, WidgetError>;
}

/// A started (or startable) external editor instance.
///
/// The lifecycle is strict: exactly one [`start`](Self::start), then any
/// number of [`load`](Self::load) calls. The handle is destroyed by being
/// dropped; there is no explicit teardown call because the vendor SDK
/// ties instance destruction to its mount container's destruction.
pub trait EditorHandle: Send + 'static {
    /// Mounts the editor into its container and displays the first
    /// document.
    ///
    /// `events` is the callback set the widget will use for the rest of
    /// its life — save notifications and internal errors both arrive
    /// through it, asynchronously, on the widget's schedule.
    ///
    /// Suspends until the widget reports it is up. Called exactly once
    /// per handle; a second call is a contract violation and may be
    /// rejected by the implementation.
    ///
    /// # Errors
    /// Returns [`WidgetError::StartRejected`] if the widget refuses to
    /// start — malformed document, missing container, vendor-side outage.
    async fn start(
        &mut self,
        config: &EditorConfig,
        events: Arc<dyn EditorEvents>,
        document: &TemplateDocument,
    ) -> Result<(), WidgetError>;

    /// Replaces the displayed document without recreating the instance.
    ///
    /// This is the cheap path — no credential work, no re-mount. A
    /// documented side effect of the vendor SDK (not of this framework)
    /// is that reloading resets the editor's undo/redo history.
    ///
    /// # Errors
    /// Returns [`WidgetError::LoadRejected`] if the widget refuses the
    /// document. On rejection the previously displayed document stays on
    /// screen — best-effort vendor behavior, not a guarantee.
    async fn load(
        &mut self,
        document: &TemplateDocument,
    ) -> Result<(), WidgetError>;
}
