//! Lore entries - display items gated by an optional flag condition.

use serde::{Deserialize, Serialize};
use story_state::FlagStore;

/// A lorebook entry supplied by the host.
///
/// Fields other than `condition` and `active` are kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoreEntry {
    /// Flag that must be set for the entry to be active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LoreEntry {
    /// Create an unconditional entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry gated by `flag`.
    pub fn conditional(flag: impl Into<String>) -> Self {
        Self {
            condition: Some(flag.into()),
            ..Self::default()
        }
    }

    /// Attach an opaque field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether this entry's condition holds against `flags`.
    ///
    /// An empty condition counts as no condition.
    pub fn is_active_in(&self, flags: &FlagStore) -> bool {
        self.condition
            .as_deref()
            .filter(|flag| !flag.is_empty())
            .map_or(true, |flag| flags.get(flag))
    }
}

/// Return copies of `entries` with `active` recomputed against `flags`.
///
/// The input is left untouched.
pub fn filter_lore(entries: &[LoreEntry], flags: &FlagStore) -> Vec<LoreEntry> {
    entries
        .iter()
        .map(|entry| LoreEntry {
            active: entry.is_active_in(flags),
            ..entry.clone()
        })
        .collect()
}
