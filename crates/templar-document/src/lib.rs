//! Template document values for Templar.
//!
//! A "template document" is the structured description of an email layout
//! (sections, rows, columns, modules, styles) that the external editor
//! widget consumes and produces. Its schema is owned by the widget vendor,
//! NOT by this framework — so this crate deliberately treats documents as
//! opaque values:
//!
//! - **[`TemplateDocument`]** — a thin wrapper around arbitrary JSON.
//!   The framework never inspects or mutates its contents; the only
//!   question it ever asks is "is there a document here at all?"
//!   ([`TemplateDocument::is_empty`]).
//! - **[`DocumentError`]** — what can go wrong turning a raw save payload
//!   from the widget back into a document.
//!
//! # Architecture
//!
//! The document layer sits at the very bottom of the stack. It doesn't know
//! about sessions, widgets, or controllers — it only knows how to carry a
//! vendor-defined blob and how to parse one out of bytes.
//!
//! ```text
//! Widget (bytes) → Document (opaque value) → Controller (lifecycle)
//! ```

mod document;
mod error;

pub use document::TemplateDocument;
pub use error::DocumentError;
