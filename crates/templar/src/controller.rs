//! The template-switching lifecycle controller.
//!
//! Creating an editor instance is expensive (credential round-trip, SDK
//! construction, mount). Switching templates is cheap (one reload call).
//! The controller is the state machine that keeps those two paths apart:
//!
//! ```text
//!                 request_template(doc)
//!   Uninitialized ────────────────────→ Ready ──┐
//!        │   acquire → create → start     ↑     │ request_template(doc)
//!        │                                └─────┘ load(doc)
//!        │
//!        └── on failure: stays Uninitialized, caller may retry
//! ```
//!
//! - **Uninitialized**: no handle exists. The first non-empty template
//!   request pays the full acquire-and-start cost.
//! - **Ready**: the handle exists and is bound to its container. Every
//!   later request is a reload against it. There is no way back — the
//!   handle lives until the controller is dropped, because the host that
//!   created the display container also owns its destruction.

use std::sync::Arc;

use templar_document::TemplateDocument;
use templar_session::SessionProvider;
use templar_widget::{EditorConfig, EditorHandle, EditorWidget};
use tokio::sync::Mutex;

use crate::bridge::{dispatch_save, EventBridge, HostEvents};
use crate::TemplarError;

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// The two lifecycle states. Private — hosts observe the state only
/// through behavior (and [`EditorController::is_ready`]).
enum Lifecycle<H> {
    /// No editor instance exists yet.
    Uninitialized,

    /// The instance is up; all further requests are reloads against it.
    /// Owning the handle here is what makes "created at most once" a
    /// structural fact rather than a convention.
    Ready(H),
}

// ---------------------------------------------------------------------------
// EditorController
// ---------------------------------------------------------------------------

/// Owns at most one external editor instance and routes template
/// requests to it.
///
/// Generic over the widget implementation `W` and the credential
/// provider `P`, so production SDKs, demo fakes, and test mocks all wire
/// in the same way.
///
/// ## Concurrency
///
/// All lifecycle state sits behind a `tokio::sync::Mutex`, so the
/// controller can be shared (`Arc<EditorController<…>>`) and called from
/// concurrent tasks. A `request_template` that arrives while a first
/// acquire-and-start is still in flight waits for it, then observes
/// `Ready` and issues a reload — two concurrent first requests can never
/// create two instances. The mutex is fair, so requests apply in arrival
/// order and the last one wins the screen.
///
/// ## What it will not do
///
/// No automatic retries, no timeouts, no cancellation of an in-flight
/// operation. Retry is always the host's call (issue another request);
/// deadlines belong in the provider or the widget's own I/O.
pub struct EditorController<W: EditorWidget, P: SessionProvider> {
    widget: W,
    provider: P,
    config: EditorConfig,
    user_id: String,
    events: Arc<dyn HostEvents>,
    state: Mutex<Lifecycle<W::Handle>>,
}

impl<W: EditorWidget, P: SessionProvider> EditorController<W, P> {
    /// Creates a builder with default settings.
    pub fn builder() -> EditorControllerBuilder {
        EditorControllerBuilder::new()
    }

    /// Asks the controller to display a template.
    ///
    /// - `None`, or a document whose value is JSON `null`: a no-op. A
    ///   diagnostic is logged, no external call is made, no state
    ///   changes.
    /// - First real document: acquires a credential for the configured
    ///   user, creates the editor instance, and starts it with this
    ///   document. On any failure the controller stays uninitialized and
    ///   the next call starts from scratch.
    /// - Every later real document: one `load` call against the existing
    ///   instance. No credential work is repeated. (The vendor widget
    ///   resets its undo/redo history on reload — its documented
    ///   behavior, not ours.)
    ///
    /// # Errors
    /// - [`TemplarError::Auth`] — credential acquisition failed
    /// - [`TemplarError::Start`] — instance creation or start rejected
    /// - [`TemplarError::Load`] — reload rejected; instance stays up
    pub async fn request_template(
        &self,
        document: Option<&TemplateDocument>,
    ) -> Result<(), TemplarError> {
        let Some(document) = document.filter(|d| !d.is_empty()) else {
            tracing::debug!("ignoring empty template request");
            return Ok(());
        };

        // Holding the lock across the await points below IS the
        // re-entrancy guard: a concurrent request parks here until the
        // in-flight acquire-and-start (or reload) settles.
        let mut state = self.state.lock().await;

        match &mut *state {
            Lifecycle::Uninitialized => {
                tracing::info!(
                    user_id = %self.user_id,
                    container = %self.config.container,
                    "first template request, starting editor"
                );

                let credential = self.provider.acquire(&self.user_id).await?;

                let mut handle = self
                    .widget
                    .create(credential)
                    .await
                    .map_err(TemplarError::Start)?;

                let bridge: Arc<dyn templar_widget::EditorEvents> =
                    Arc::new(EventBridge::new(Arc::clone(&self.events)));

                handle
                    .start(&self.config, bridge, document)
                    .await
                    .map_err(TemplarError::Start)?;

                tracing::info!(container = %self.config.container, "editor started");
                *state = Lifecycle::Ready(handle);
            }
            Lifecycle::Ready(handle) => {
                handle
                    .load(document)
                    .await
                    .map_err(TemplarError::Load)?;
                tracing::debug!("template reloaded");
            }
        }

        Ok(())
    }

    /// Inbound save event from the widget.
    ///
    /// Hosts that wire the widget's save callback by hand (instead of
    /// relying on the bridge handed to `start`) call this with the raw
    /// payload. A well-formed payload reaches the host sink's `on_save`
    /// exactly once; a malformed one is dropped and reported through
    /// `on_error` as [`TemplarError::SaveParse`]. Lifecycle state is
    /// untouched either way.
    pub fn on_user_save(&self, raw: &[u8]) {
        dispatch_save(self.events.as_ref(), raw);
    }

    /// Returns `true` once the editor instance exists.
    pub async fn is_ready(&self) -> bool {
        matches!(&*self.state.lock().await, Lifecycle::Ready(_))
    }
}

// ---------------------------------------------------------------------------
// EditorControllerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring an [`EditorController`].
///
/// # Example
///
/// ```rust,ignore
/// let controller = EditorController::builder()
///     .user("user-1234")
///     .config(config)
///     .build(widget, provider, events);
/// ```
pub struct EditorControllerBuilder {
    user_id: String,
    config: EditorConfig,
}

impl EditorControllerBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            user_id: "anonymous".to_string(),
            config: EditorConfig::default(),
        }
    }

    /// Sets the user identity credentials are acquired for.
    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the editor configuration (container, locale, extras).
    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Wires everything together. Pure assembly — no I/O happens until
    /// the first [`request_template`](EditorController::request_template).
    pub fn build<W: EditorWidget, P: SessionProvider>(
        self,
        widget: W,
        provider: P,
        events: Arc<dyn HostEvents>,
    ) -> EditorController<W, P> {
        EditorController {
            widget,
            provider,
            config: self.config,
            user_id: self.user_id,
            events,
            state: Mutex::new(Lifecycle::Uninitialized),
        }
    }
}

impl Default for EditorControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
