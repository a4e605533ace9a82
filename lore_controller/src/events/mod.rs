//! Event rules - declarative trigger/effect mappings over story flags.
//!
//! A rule is ready when every one of its `trigger_flags` is set. Firing a rule
//! sets its `set_flags` and emits its optional `text`.

mod ruleset;

pub use ruleset::*;

use serde::{Deserialize, Serialize};
use story_state::de::null_as_default;
use story_state::FlagStore;

/// Prefix of the conventional marker name for a fired rule.
pub const FIRED_MARKER_PREFIX: &str = "event_fired_";

/// A single event rule as found in the rule data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRule {
    pub id: String,

    /// All of these must be set for the rule to fire.
    #[serde(default, deserialize_with = "null_as_default")]
    pub trigger_flags: Vec<String>,

    /// Marked present when the rule fires.
    #[serde(default, deserialize_with = "null_as_default")]
    pub set_flags: Vec<String>,

    /// Display text emitted when the rule fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// If false the rule fires at most once.
    #[serde(default, deserialize_with = "null_as_default")]
    pub repeatable: bool,
}

impl EventRule {
    /// Create a one-shot rule with no triggers, effects or text.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            trigger_flags: Vec::new(),
            set_flags: Vec::new(),
            text: None,
            repeatable: false,
        }
    }

    /// Add a trigger flag.
    pub fn with_trigger(mut self, flag: impl Into<String>) -> Self {
        self.trigger_flags.push(flag.into());
        self
    }

    /// Add a flag to set on fire.
    pub fn with_set_flag(mut self, flag: impl Into<String>) -> Self {
        self.set_flags.push(flag.into());
        self
    }

    /// Set the display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set whether the rule may fire more than once.
    pub fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Check if every trigger flag is set in `flags`.
    pub fn is_ready(&self, flags: &FlagStore) -> bool {
        flags.contains_all(&self.trigger_flags)
    }

    /// Conventional marker name for this rule, `event_fired_<id>`.
    ///
    /// Rules sharing an id share a marker.
    pub fn fired_marker(&self) -> String {
        format!("{}{}", FIRED_MARKER_PREFIX, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_builder() {
        let rule = EventRule::new("wolf_howl")
            .with_trigger("night")
            .with_trigger("in_forest")
            .with_set_flag("heard_howl")
            .with_text("A howl echoes between the trees.")
            .with_repeatable(true);

        assert_eq!(rule.trigger_flags, vec!["night", "in_forest"]);
        assert_eq!(rule.set_flags, vec!["heard_howl"]);
        assert!(rule.repeatable);
        assert_eq!(rule.fired_marker(), "event_fired_wolf_howl");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let rule: EventRule = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();

        assert!(rule.trigger_flags.is_empty());
        assert!(rule.set_flags.is_empty());
        assert!(rule.text.is_none());
        assert!(!rule.repeatable);
    }

    #[test]
    fn test_is_ready() {
        let rule = EventRule::new("gate").with_trigger("has_key").with_trigger("at_gate");
        let mut flags = FlagStore::new();

        flags.set("has_key");
        assert!(!rule.is_ready(&flags));

        flags.set("at_gate");
        assert!(rule.is_ready(&flags));
    }

    #[test]
    fn test_no_triggers_is_always_ready() {
        let rule = EventRule::new("prologue");
        assert!(rule.is_ready(&FlagStore::new()));
    }
}
