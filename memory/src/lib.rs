//! Short-lived memory for a prompt agent.
//!
//! A [`Memory`] keeps three bounded [`RecencyList`]s of recent niches, tones
//! and topics alongside an unbounded [`SessionHistory`] of pipeline events.
//! Nothing here is persisted; a memory lives exactly as long as its agent.

pub mod history;
pub mod recency;

pub use history::{EventKind, SessionEvent, SessionHistory};
pub use recency::RecencyList;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Default cap for every recency list.
pub const MAX_MEMORY_ITEMS: usize = 5;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("failed to snapshot memory: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// What the agent has recently seen from the user and produced for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserPreferences {
    pub last_niches: RecencyList<String>,
    pub frequent_tones: RecencyList<String>,
    pub recent_topics: RecencyList<String>,
}

impl UserPreferences {
    pub fn new(capacity: usize) -> Self {
        Self {
            last_niches: RecencyList::new(capacity),
            frequent_tones: RecencyList::new(capacity),
            recent_topics: RecencyList::new(capacity),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self::new(MAX_MEMORY_ITEMS)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Memory {
    pub user_preferences: UserPreferences,
    pub session_history: SessionHistory,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory whose recency lists hold at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            user_preferences: UserPreferences::new(capacity),
            session_history: SessionHistory::new(),
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.user_preferences
    }

    pub fn history(&self) -> &SessionHistory {
        &self.session_history
    }

    /// Append an event to the session history.
    pub fn log_event(&mut self, kind: EventKind, data: impl Into<Value>) {
        log::trace!("session event: {kind}");
        self.session_history.record(kind, data);
    }

    /// Swap in a new set of preferences, e.g. after a staged update.
    pub fn commit(&mut self, preferences: UserPreferences) {
        self.user_preferences = preferences;
    }

    /// Push a topic onto the recent-topics list.
    pub fn remember_topic(&mut self, topic: impl Into<String>) {
        self.user_preferences.recent_topics.push(topic.into());
    }

    /// JSON view of `preferences` plus the current history length.
    ///
    /// History is summarized rather than copied so successive snapshots do
    /// not nest earlier ones.
    pub fn snapshot_of(&self, preferences: &UserPreferences) -> Result<Value, MemoryError> {
        Ok(json!({
            "user_preferences": serde_json::to_value(preferences)?,
            "session_events": self.session_history.len(),
        }))
    }
}
