//! State-value table backing the learned policy

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::StateKey;

/// Mapping from board-state key to a scalar value estimate.
///
/// Entries are created lazily: querying an unseen state yields 0.0 and is not
/// an error. Entries are never deleted during a run; the table outlives
/// individual episodes and is mutated in place across a whole training run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyTable {
    values: HashMap<String, f64>,
}

impl PolicyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Get the value estimate for a state, 0.0 when unseen
    pub fn value_of(&self, key: &StateKey) -> f64 {
        self.values.get(key.as_str()).copied().unwrap_or(0.0)
    }

    /// Insert or overwrite the value estimate for a state
    pub fn set(&mut self, key: StateKey, value: f64) {
        self.values.insert(key.into_string(), value);
    }

    /// Whether the state has an explicit entry
    pub fn contains(&self, key: &StateKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    /// Number of states with explicit entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the stored (state, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
