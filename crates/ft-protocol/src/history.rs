use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    /// Fixed response from the interpreter table.
    Local,
    /// Resolved by the query bridge.
    Bridge,
}

/// A resolved (input, response) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Submission sequence number within the session.
    pub seq: u64,
    /// Trimmed input in its original casing.
    pub input: String,
    /// Response text shown under the input.
    pub response: String,
    pub source: ResponseSource,
    pub submitted_at: DateTime<Utc>,
    pub resolved_at: DateTime<Utc>,
}

/// Ordered, append-only history for one interactive session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
