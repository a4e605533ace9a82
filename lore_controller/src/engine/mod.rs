//! Event Engine - owns one story session and evaluates rules against its flags.
//!
//! Evaluation is a single forward sweep over the rule list:
//! 1. **Skip**: non-repeatable rules that already fired
//! 2. **Test**: every trigger flag must be set (no triggers means ready)
//! 3. **Fire**: set the rule's flags, record it as fired, collect its text
//!
//! Flags set by a rule are visible to later rules in the same sweep. Earlier
//! rules are not revisited until the next call.

use std::collections::HashSet;
use std::path::Path;

use story_state::{FlagStore, SessionId, StoryNode};
use tracing::{debug, error, info};

use crate::config::EngineConfig;
use crate::events::{EventRule, LoadError, RuleSet};
use crate::inline::extract_inline_flags_with;
use crate::lore::{filter_lore, LoreEntry};

/// Lifecycle of the engine's rule data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No rule data loaded, or the load failed. Evaluation is a no-op.
    Uninitialized,
    /// Rule data loaded and ready for evaluation.
    Loaded,
}

/// One story session: flags, rules, fired ledger and current node.
#[derive(Debug, Clone)]
pub struct EventEngine {
    session: SessionId,
    config: EngineConfig,
    state: EngineState,
    flags: FlagStore,
    rules: Vec<EventRule>,

    /// Ids of rules that have fired, kept apart from story flags.
    fired: HashSet<String>,

    current_node: Option<String>,
}

impl Default for EventEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EventEngine {
    /// Create an engine with no rules loaded.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            session: SessionId::new(),
            config,
            state: EngineState::Uninitialized,
            flags: FlagStore::new(),
            rules: Vec::new(),
            fired: HashSet::new(),
            current_node: None,
        }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Create an engine from an already-parsed rule list.
    pub fn with_rules(rules: Vec<EventRule>) -> Self {
        let mut engine = Self::with_defaults();
        engine.install_rules(rules);
        engine
    }

    /// Create an engine and, if the config names a rule file, load it once.
    ///
    /// A failed load is logged and leaves the engine uninitialized.
    pub fn from_config(config: EngineConfig) -> Self {
        let rules_path = config.rules_path.clone();
        let mut engine = Self::new(config);

        if let Some(path) = rules_path {
            engine.load_rules_from_path(path);
        }

        engine
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    /// Mutable access to the flag store, for hosts that set flags directly.
    pub fn flags_mut(&mut self) -> &mut FlagStore {
        &mut self.flags
    }

    pub fn rules(&self) -> &[EventRule] {
        &self.rules
    }

    /// Id of the node most recently entered through [`advance_node`](Self::advance_node).
    pub fn current_node(&self) -> Option<&str> {
        self.current_node.as_deref()
    }

    /// Check if a rule with this id has fired.
    pub fn has_fired(&self, rule_id: &str) -> bool {
        self.fired.contains(rule_id)
    }

    /// Load rules from a JSON file, replacing any current rules.
    ///
    /// Returns whether the load succeeded. Failures are logged, never raised.
    pub fn load_rules_from_path(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        debug!(session = %self.session, path = %path.display(), "Loading events");
        self.apply_load(RuleSet::from_path(path))
    }

    /// Load rules from JSON text, replacing any current rules.
    pub fn load_rules_from_str(&mut self, json: &str) -> bool {
        self.apply_load(RuleSet::from_json_str(json))
    }

    fn apply_load(&mut self, result: Result<RuleSet, LoadError>) -> bool {
        match result {
            Ok(rule_set) => {
                self.install_rules(rule_set.into_rules());
                true
            }
            Err(e) => {
                error!(session = %self.session, "Failed to load events: {}", e);
                self.rules.clear();
                self.state = EngineState::Uninitialized;
                false
            }
        }
    }

    fn install_rules(&mut self, rules: Vec<EventRule>) {
        self.rules = rules;
        self.state = EngineState::Loaded;
        info!(session = %self.session, count = self.rules.len(), "Loaded events");
    }

    /// Evaluate every rule once, in order, and return the texts of those that fired.
    pub fn process_events(&mut self) -> Vec<String> {
        let mut triggered = Vec::new();

        for rule in &self.rules {
            if !rule.repeatable && self.fired.contains(&rule.id) {
                continue;
            }

            if !rule.is_ready(&self.flags) {
                continue;
            }

            self.flags.set_all(rule.set_flags.iter().cloned());
            self.fired.insert(rule.id.clone());

            if let Some(text) = rule.text.as_deref().filter(|t| !t.is_empty()) {
                triggered.push(text.to_string());
            }

            debug!(session = %self.session, event = %rule.id, "Event fired");
        }

        triggered
    }

    /// Enter a story node: record it, unlock its flags, then evaluate rules.
    ///
    /// Does nothing and returns no text when `node` is `None`.
    pub fn advance_node(&mut self, node: Option<&StoryNode>) -> Vec<String> {
        let Some(node) = node else {
            return Vec::new();
        };

        self.current_node = Some(node.id.clone());
        info!(session = %self.session, node = %node.id, "Advancing to node");

        self.flags.set_all(node.unlock_flags.iter().cloned());

        self.process_events()
    }

    /// Set every flag named by an inline marker in `text`.
    pub fn parse_inline_flags(&mut self, text: &str) {
        for flag in extract_inline_flags_with(text, &self.config.inline_marker) {
            debug!(session = %self.session, flag = %flag, "Inline flag set");
            self.flags.set(flag);
        }
    }

    /// Return copies of `entries` with `active` computed from the current flags.
    pub fn filter_lore(&self, entries: &[LoreEntry]) -> Vec<LoreEntry> {
        filter_lore(entries, &self.flags)
    }
}
