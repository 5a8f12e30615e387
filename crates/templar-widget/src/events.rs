//! The widget-facing callback set.

use crate::WidgetError;

/// Callbacks a running editor instance invokes to report what happened.
///
/// The vendor SDK is event-driven: the user clicks "save" inside the
/// widget, or something breaks inside it, and the host only finds out
/// through a callback. This trait is that callback surface, handed to the
/// widget once at [`EditorHandle::start`](crate::EditorHandle::start).
///
/// Implementations must be `Send + Sync` — the widget may fire events
/// from any task at any time — and the methods are synchronous and should
/// return quickly; a slow sink stalls the widget's event delivery.
///
/// Hosts normally don't implement this directly: the controller layer
/// provides a bridge that parses save payloads and forwards typed events
/// upward.
pub trait EditorEvents: Send + Sync + 'static {
    /// The user saved: `raw` is the serialized document as the widget
    /// emitted it. No validity guarantee — parsing is the receiver's job.
    fn on_save(&self, raw: Vec<u8>);

    /// The widget hit an internal error it couldn't handle itself.
    fn on_error(&self, cause: WidgetError);
}
