//! Event routing between the widget and the host.
//!
//! Events flow in one direction — widget → host — but change shape on the
//! way: the widget emits raw bytes and vendor errors, the host wants
//! parsed documents and typed [`TemplarError`]s. This module is the
//! adapter in between:
//!
//! ```text
//! Widget ──on_save(bytes)──→ EventBridge ──on_save(TemplateDocument)──→ Host
//!        ──on_error(cause)─→            ──on_error(TemplarError)─────→
//! ```
//!
//! The bridge is deliberately stateless: parse, forward, done. It holds
//! no lifecycle state and never talks back to the widget, so a slow or
//! panicky host sink can't corrupt the controller.

use std::sync::Arc;

use templar_document::TemplateDocument;
use templar_widget::{EditorEvents, WidgetError};

use crate::TemplarError;

/// The upward notification sink a host supplies at construction time.
///
/// This is the capability set through which the host learns anything
/// asynchronous: the user saved a template, or something failed outside
/// a `request_template` call.
///
/// Methods are synchronous and called from whatever task delivered the
/// widget event — return quickly, hand off to a channel if you need to
/// do real work.
pub trait HostEvents: Send + Sync + 'static {
    /// A template was saved in the editor and parsed successfully.
    ///
    /// Called exactly once per well-formed save payload.
    fn on_save(&self, document: TemplateDocument);

    /// Something failed asynchronously: a save payload didn't parse
    /// ([`TemplarError::SaveParse`]) or the widget reported an internal
    /// error ([`TemplarError::Widget`]).
    fn on_error(&self, error: TemplarError);
}

/// Parses a raw save payload and routes the result to the host.
///
/// The single implementation of the save contract: on parse success the
/// host's `on_save` fires exactly once with the parsed document; on
/// failure the save is dropped and `on_error` fires with
/// [`TemplarError::SaveParse`]. Used by both the bridge (widget-driven
/// path) and [`EditorController::on_user_save`](crate::EditorController::on_user_save)
/// (host-driven path), so the two paths cannot drift apart.
pub(crate) fn dispatch_save(events: &dyn HostEvents, raw: &[u8]) {
    match TemplateDocument::from_slice(raw) {
        Ok(document) => {
            tracing::debug!(bytes = raw.len(), "save payload parsed, forwarding to host");
            events.on_save(document);
        }
        Err(e) => {
            tracing::warn!(error = %e, "dropping unparseable save payload");
            events.on_error(TemplarError::SaveParse(e));
        }
    }
}

/// Adapter implementing the widget-facing [`EditorEvents`] contract on
/// top of a host's [`HostEvents`] sink.
///
/// The controller constructs one of these and hands it to
/// [`EditorHandle::start`](templar_widget::EditorHandle::start); the
/// widget holds it for the life of the instance.
pub(crate) struct EventBridge {
    events: Arc<dyn HostEvents>,
}

impl EventBridge {
    pub(crate) fn new(events: Arc<dyn HostEvents>) -> Self {
        Self { events }
    }
}

impl EditorEvents for EventBridge {
    fn on_save(&self, raw: Vec<u8>) {
        dispatch_save(self.events.as_ref(), &raw);
    }

    fn on_error(&self, cause: WidgetError) {
        tracing::warn!(error = %cause, "widget reported internal error");
        self.events.on_error(TemplarError::Widget(cause));
    }
}

// =========================================================================
// Tests
// =========================================================================
