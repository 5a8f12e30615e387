//! Unified error type for the Templar framework.

use templar_document::DocumentError;
use templar_session::SessionError;
use templar_widget::WidgetError;

/// Top-level error surfaced to hosts.
///
/// The variants map one-to-one onto the failure points of the controller
/// lifecycle, and each carries its retry policy in the docs. Note what is
/// deliberately absent: nothing here is retried automatically. Retry is
/// always host-initiated, by issuing another
/// [`request_template`](crate::EditorController::request_template) call.
#[derive(Debug, thiserror::Error)]
pub enum TemplarError {
    /// Credential acquisition failed. The controller is still
    /// uninitialized; a later request performs a fresh acquire-and-start.
    #[error(transparent)]
    Auth(#[from] SessionError),

    /// Creating or starting the editor instance was rejected. Same
    /// standing as [`Auth`](Self::Auth): nothing was kept, retry is safe.
    #[error("editor start failed: {0}")]
    Start(#[source] WidgetError),

    /// A reload against the running instance was rejected. Non-fatal:
    /// the instance stays up with the previously displayed document, and
    /// the next request reloads against the same handle.
    #[error("template reload failed: {0}")]
    Load(#[source] WidgetError),

    /// A save payload from the widget didn't parse. The save is dropped;
    /// the lifecycle state is untouched.
    #[error(transparent)]
    SaveParse(#[from] DocumentError),

    /// The widget reported an internal error through its event callback,
    /// outside any controller operation. Informational — the lifecycle
    /// state is whatever it was.
    #[error("editor reported error: {0}")]
    Widget(#[source] WidgetError),
}
