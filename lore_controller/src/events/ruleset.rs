//! Loading rule data (a JSON array of event rules).

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use super::EventRule;

/// Errors raised while loading rule data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read rule data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rule data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered list of event rules. Order is evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<EventRule>,
}

impl RuleSet {
    /// Parse rules from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse rules from any reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse a JSON rule file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRule> {
        self.rules.iter()
    }

    /// Take the rules out of the set.
    pub fn into_rules(self) -> Vec<EventRule> {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RULES: &str = r#"[
        {"id": "intro", "trigger_flags": [], "set_flags": ["started"], "text": "Once upon a time.", "repeatable": false},
        {"id": "wolf", "trigger_flags": ["started", "in_forest"], "set_flags": [], "repeatable": true},
        {"id": "sparse"}
    ]"#;

    #[test]
    fn test_parse_keeps_order() {
        let set = RuleSet::from_json_str(RULES).unwrap();

        let ids: Vec<_> = set.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "wolf", "sparse"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let set = RuleSet::from_json_str(
            r#"[
                {"id": "a", "trigger_flags": null, "set_flags": null, "text": "hi", "repeatable": null},
                {"id": "b", "trigger_flags": ["x"]}
            ]"#,
        )
        .unwrap();

        let rules = set.into_rules();
        assert_eq!(rules.len(), 2);
        assert!(rules[0].trigger_flags.is_empty());
        assert!(rules[0].set_flags.is_empty());
        assert!(!rules[0].repeatable);
        assert_eq!(rules[1].trigger_flags, vec!["x"]);
    }

    #[test]
    fn test_parse_error() {
        let err = RuleSet::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));

        // A rule without an id is malformed beyond repair
        let err = RuleSet::from_json_str(r#"[{"text": "orphan"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RULES.as_bytes()).unwrap();

        let set = RuleSet::from_path(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.iter().nth(1).unwrap().repeatable);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RuleSet::from_path(dir.path().join("events.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
