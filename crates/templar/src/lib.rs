//! # Templar
//!
//! A small framework for hosts that embed a third-party no-code
//! template editor widget.
//!
//! The vendor SDK is heavyweight: creating an instance means acquiring a
//! session credential from a remote authority and mounting the widget
//! into a display container. Switching which template it shows, by
//! contrast, is cheap — a single reload call against the running
//! instance. Templar owns exactly that distinction: the
//! [`EditorController`] creates the instance at most once, on the first
//! template request, and turns every later request into a reload.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use templar::prelude::*;
//!
//! // Implement EditorWidget for your vendor SDK, HostEvents for your
//! // app, then:
//! let controller = EditorController::builder()
//!     .user("user-1234")
//!     .config(EditorConfig {
//!         container: ContainerId::new("email-editor-root"),
//!         ..EditorConfig::default()
//!     })
//!     .build(my_widget, ProxyProvider::new("http://localhost:4000/auth"), events);
//!
//! controller.request_template(Some(&welcome_email)).await?; // start
//! controller.request_template(Some(&newsletter)).await?;    // reload
//! ```

mod bridge;
mod controller;
mod error;

pub use bridge::HostEvents;
pub use controller::{EditorController, EditorControllerBuilder};
pub use error::TemplarError;

/// One-stop imports for hosts.
pub mod prelude {
    pub use crate::{EditorController, EditorControllerBuilder, HostEvents, TemplarError};
    pub use templar_document::{DocumentError, TemplateDocument};
    #[cfg(feature = "proxy")]
    pub use templar_session::ProxyProvider;
    pub use templar_session::{Credential, DevProvider, SessionError, SessionProvider};
    pub use templar_widget::{
        ContainerId, EditorConfig, EditorEvents, EditorHandle, EditorWidget, WidgetError,
    };
}
