//! Quickstart: embed a (pretend) template editor and switch templates.
//!
//! Stands a full Templar host on its feet without any vendor SDK or
//! backend: a console widget plays the editor, `DevProvider` plays the
//! auth intermediary. The flow mirrors what a real embedding does —
//! request a template (editor starts), request another (editor reloads),
//! request nothing (ignored), then the "user" saves and the parsed
//! document pops out of the host sink.
//!
//! Run with `RUST_LOG=debug cargo run -p quickstart` to watch the
//! lifecycle decisions in the logs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use templar::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// A console stand-in for the vendor editor SDK
// ---------------------------------------------------------------------------

/// Fake editor that prints what a real widget would render, and keeps
/// the callback set so `main` can simulate a user save.
#[derive(Default)]
struct ConsoleEditor {
    callbacks: Mutex<Option<Arc<dyn EditorEvents>>>,
}

struct ConsoleWidget(Arc<ConsoleEditor>);

impl EditorWidget for ConsoleWidget {
    type Handle = ConsoleHandle;

    async fn create(
        &self,
        credential: Credential,
    ) -> Result<ConsoleHandle, WidgetError> {
        // Note what the log shows: the credential Display is redacted.
        tracing::info!(%credential, "console editor instance created");
        Ok(ConsoleHandle {
            editor: Arc::clone(&self.0),
            reloads: AtomicUsize::new(0),
        })
    }
}

struct ConsoleHandle {
    editor: Arc<ConsoleEditor>,
    reloads: AtomicUsize,
}

impl EditorHandle for ConsoleHandle {
    async fn start(
        &mut self,
        config: &EditorConfig,
        events: Arc<dyn EditorEvents>,
        document: &TemplateDocument,
    ) -> Result<(), WidgetError> {
        *self.editor.callbacks.lock().unwrap() = Some(events);
        println!(
            "[widget] mounted in '{}' (locale {}), showing '{}'",
            config.container,
            config.locale,
            document.as_value()["name"].as_str().unwrap_or("?"),
        );
        Ok(())
    }

    async fn load(
        &mut self,
        document: &TemplateDocument,
    ) -> Result<(), WidgetError> {
        let n = self.reloads.fetch_add(1, Ordering::SeqCst) + 1;
        println!(
            "[widget] reload #{n}: now showing '{}' (undo history reset)",
            document.as_value()["name"].as_str().unwrap_or("?"),
        );
        Ok(())
    }
}

impl ConsoleEditor {
    /// Pretends the user clicked "save" inside the editor.
    fn simulate_user_save(&self, raw: &[u8]) {
        self.callbacks
            .lock()
            .unwrap()
            .as_ref()
            .expect("editor not started")
            .on_save(raw.to_vec());
    }
}

// ---------------------------------------------------------------------------
// Host sink
// ---------------------------------------------------------------------------

struct PrintEvents;

impl HostEvents for PrintEvents {
    fn on_save(&self, document: TemplateDocument) {
        println!(
            "[host] template saved: {}",
            serde_json::to_string_pretty(document.as_value()).unwrap()
        );
    }

    fn on_error(&self, error: TemplarError) {
        eprintln!("[host] editor error: {error}");
    }
}

// ---------------------------------------------------------------------------
// Demo flow
// ---------------------------------------------------------------------------

fn bundled_template(name: &str, headline: &str) -> TemplateDocument {
    TemplateDocument::from_value(serde_json::json!({
        "name": name,
        "rows": [
            { "columns": [{ "modules": [
                { "type": "title", "text": headline },
                { "type": "button", "text": "Read more" },
            ]}]},
        ],
    }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let editor = Arc::new(ConsoleEditor::default());
    let events: Arc<dyn HostEvents> = Arc::new(PrintEvents);

    let controller = EditorController::<ConsoleWidget, DevProvider>::builder()
        .user("demo-user")
        .config(EditorConfig {
            container: ContainerId::new("quickstart-editor"),
            ..EditorConfig::default()
        })
        .build(ConsoleWidget(Arc::clone(&editor)), DevProvider, events);

    let welcome = bundled_template("welcome", "Welcome aboard!");
    let newsletter = bundled_template("newsletter", "This month in review");

    // First request: credential + create + start.
    controller.request_template(Some(&welcome)).await?;

    // Second request: just a reload, same instance.
    controller.request_template(Some(&newsletter)).await?;

    // Empty request: ignored, newsletter stays on screen.
    controller.request_template(None).await?;

    // The user edits and saves; the parsed document reaches the host.
    let edited = bundled_template("newsletter", "This month, revised");
    editor.simulate_user_save(&serde_json::to_vec(edited.as_value())?);

    // And a corrupted callback payload is reported, not forwarded.
    editor.simulate_user_save(b"<oops>");

    Ok(())
}
