//! Engine configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::inline::DEFAULT_MARKER;

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for an [`EventEngine`](crate::engine::EventEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// JSON rule file loaded once when the engine is built.
    pub rules_path: Option<PathBuf>,

    /// Keyword of inline markers, the `set_flag` in `{{set_flag: name}}`.
    pub inline_marker: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            inline_marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the rule file path.
    pub fn with_rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = Some(path.into());
        self
    }

    /// Set the inline marker keyword.
    pub fn with_inline_marker(mut self, marker: impl Into<String>) -> Self {
        self.inline_marker = marker.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.rules_path.is_none());
        assert_eq!(config.inline_marker, "set_flag");
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_parse_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            rules_path = "data/events.json"
            inline_marker = "unlock"
            "#,
        )
        .unwrap();

        assert_eq!(config.rules_path, Some(PathBuf::from("data/events.json")));
        assert_eq!(config.inline_marker, "unlock");
    }

    #[test]
    fn test_parse_error() {
        let err = EngineConfig::from_toml_str("inline_marker = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rules_path = \"events.json\"").unwrap();

        let config = EngineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.rules_path, Some(PathBuf::from("events.json")));
        assert_eq!(config.inline_marker, "set_flag");
    }
}
