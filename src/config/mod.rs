//! Configuration loading and management

mod io;

pub use io::ConfigStore;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the persistence layer.
///
/// Resolution misses are never represented here; an unknown label is a
/// normal outcome, not a failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configurations file exists but is not valid JSON of the
    /// expected shape.
    #[error("configurations file {path} is corrupt: {source}")]
    Corrupt {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configurations file exists but could not be read.
    #[error("failed to read configurations file {path}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configurations file could not be written.
    #[error("failed to write configurations file {path}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory configurations could not be serialized for writing.
    #[error("failed to serialize configurations for {path}")]
    Serialize {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The persisted registry state: compose files by name, plus alias shortcuts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configurations {
    /// Compose definitions: name -> compose file path
    pub dockers: HashMap<String, String>,

    /// Shortcuts: alias -> name
    ///
    /// An alias value is not required to reference a live `dockers` key.
    /// Dangling aliases are removed lazily when a resolution attempt
    /// hits them.
    pub alias: HashMap<String, String>,
}

/// On-disk form of [`Configurations`].
///
/// Older or hand-edited files may lack one or both collections; unknown
/// top-level keys are ignored by serde. Healing into the in-memory form
/// happens once, right after parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredConfigurations {
    pub dockers: Option<HashMap<String, String>>,
    pub alias: Option<HashMap<String, String>>,
}

impl StoredConfigurations {
    /// Repair a freshly parsed file into a healthy configuration,
    /// substituting empty collections for absent ones.
    pub fn heal(self) -> Configurations {
        Configurations {
            dockers: self.dockers.unwrap_or_default(),
            alias: self.alias.unwrap_or_default(),
        }
    }
}

impl From<Configurations> for StoredConfigurations {
    fn from(configurations: Configurations) -> Self {
        Self {
            dockers: Some(configurations.dockers),
            alias: Some(configurations.alias),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heal_fills_missing_collections() {
        let healed = StoredConfigurations::default().heal();

        assert!(healed.dockers.is_empty());
        assert!(healed.alias.is_empty());
    }

    #[test]
    fn test_heal_keeps_present_collections() {
        let mut dockers = HashMap::new();
        dockers.insert("web".to_string(), "/srv/web.yml".to_string());

        let stored = StoredConfigurations {
            dockers: Some(dockers.clone()),
            alias: None,
        };

        let healed = stored.heal();
        assert_eq!(healed.dockers, dockers);
        assert!(healed.alias.is_empty());
    }

    #[test]
    fn test_heal_is_idempotent() {
        let stored = StoredConfigurations {
            dockers: None,
            alias: Some(HashMap::from([(
                "w".to_string(),
                "web".to_string(),
            )])),
        };

        let once = stored.heal();
        let twice = StoredConfigurations::from(once.clone()).heal();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_serialize_error_is_not_reported_as_corrupt() {
        let source = serde_json::from_str::<StoredConfigurations>("{").unwrap_err();
        let err = StoreError::Serialize {
            path: "/tmp/configurations.json".into(),
            source,
        };

        let message = err.to_string();
        assert!(message.contains("serialize"));
        assert!(!message.contains("corrupt"));
    }

    #[test]
    fn test_parse_tolerates_missing_and_unknown_keys() {
        let parsed: StoredConfigurations =
            serde_json::from_str(r#"{"alias": {"w": "web"}, "version": 3}"#).unwrap();

        let healed = parsed.heal();
        assert!(healed.dockers.is_empty());
        assert_eq!(healed.alias.get("w").map(String::as_str), Some("web"));
    }
}
