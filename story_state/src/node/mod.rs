//! Story nodes and session identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one story session (one engine instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a session ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A story checkpoint. Entering it unlocks flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    pub id: String,

    /// Flags marked present when the node is entered.
    #[serde(default, deserialize_with = "crate::de::null_as_default")]
    pub unlock_flags: Vec<String>,
}

impl StoryNode {
    /// Create a node that unlocks nothing.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            unlock_flags: Vec::new(),
        }
    }

    /// Add a flag to unlock on entry.
    pub fn with_unlock(mut self, flag: impl Into<String>) -> Self {
        self.unlock_flags.push(flag.into());
        self
    }

    /// Add multiple flags to unlock on entry.
    pub fn with_unlocks<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unlock_flags.extend(flags.into_iter().map(Into::into));
        self
    }
}
