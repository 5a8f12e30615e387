//! Editor configuration and the mount-target capability.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// ContainerId
// ---------------------------------------------------------------------------

/// Identifies the display container an editor instance mounts into.
///
/// The vendor SDK mutates a page-level container by identifier — implicit
/// global state. Templar instead treats the container as an explicit
/// capability: whoever constructs the controller hands it a `ContainerId`,
/// and that is the only container the controller's widget may touch. Two
/// controllers given the *same* container id is undefined behavior
/// delegated to the vendor SDK; don't do it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a container id from the host's mount-target identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// EditorConfig
// ---------------------------------------------------------------------------

/// Configuration handed to the widget at start.
///
/// Only `container` and `locale` are meaningful to Templar itself.
/// Everything else a vendor SDK might want — brand colors, feature
/// toggles, sidebar layout — rides along in `extras`, passed through
/// unexamined, exactly like template documents are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Where the editor mounts.
    pub container: ContainerId,

    /// BCP 47 locale tag for the editor UI.
    pub locale: String,

    /// Vendor-specific configuration keys, forwarded opaquely.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extras: Map<String, Value>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            container: ContainerId::new("editor-container"),
            locale: "en-US".to_string(),
            extras: Map::new(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id_display_is_raw_identifier() {
        let id = ContainerId::new("email-editor-root");
        assert_eq!(id.to_string(), "email-editor-root");
        assert_eq!(id.as_str(), "email-editor-root");
    }

    #[test]
    fn test_container_id_works_as_map_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ContainerId::new("a"), 1);
        assert_eq!(map[&ContainerId::new("a")], 1);
    }

    #[test]
    fn test_default_config_uses_en_us_locale() {
        let config = EditorConfig::default();
        assert_eq!(config.locale, "en-US");
        assert!(config.extras.is_empty());
    }

    #[test]
    fn test_config_serializes_extras_transparently() {
        let mut config = EditorConfig::default();
        config.extras.insert("trackChanges".into(), Value::Bool(true));

        let json = serde_json::to_value(&config).unwrap();

        // Extras are a flat opaque map, container is a bare string.
        assert_eq!(json["extras"]["trackChanges"], Value::Bool(true));
        assert_eq!(json["container"], "editor-container");
    }

    #[test]
    fn test_config_omits_empty_extras_on_serialize() {
        let json = serde_json::to_value(EditorConfig::default()).unwrap();
        assert!(json.get("extras").is_none());
    }

    #[test]
    fn test_config_deserializes_without_extras() {
        let config: EditorConfig = serde_json::from_str(
            r#"{"container":"c","locale":"de-DE"}"#,
        )
        .unwrap();

        assert_eq!(config.locale, "de-DE");
        assert!(config.extras.is_empty());
    }
}
