//! Flag store - the set of story flags shared by every part of the engine.
//!
//! Flags are monotonic: once set they stay set. There is no
//! `unset` on the public API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from flag name to presence.
///
/// A missing key reads as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FlagStore {
    flags: HashMap<String, bool>,
}

impl FlagStore {
    /// Create a new empty flag store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a flag. Unknown flags are `false`.
    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Mark a flag as present. Idempotent.
    pub fn set(&mut self, name: impl Into<String>) {
        self.flags.insert(name.into(), true);
    }

    /// Mark every flag in `names` as present.
    pub fn set_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.set(name);
        }
    }

    /// Check that every flag in `names` is set.
    ///
    /// An empty list is vacuously satisfied.
    pub fn contains_all<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|name| self.get(name.as_ref()))
    }

    /// Number of set flags.
    pub fn len(&self) -> usize {
        self.flags.values().filter(|set| **set).count()
    }

    /// Check if no flag is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the names of all set flags (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, set)| **set)
            .map(|(name, _)| name.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for FlagStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut store = FlagStore::new();
        store.set_all(iter);
        store
    }
}
