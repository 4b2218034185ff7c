//! In-memory override state: two disjoint sets of normalized phrases.
//!
//! State is owned by the backing store; a request loads it fresh, mutates it
//! here, and persists it before replying. Nothing is cached across requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowercase a raw phrase into its storage and lookup key.
pub fn normalize(phrase: &str) -> String {
    phrase.to_lowercase()
}

/// The pair of override sets. Serde derives double as the flat-file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryState {
    pub honorable: BTreeSet<String>,
    pub dishonorable: BTreeSet<String>,
}

impl MemoryState {
    /// Record an explicit judgment. A phrase lives in at most one set, so
    /// setting one side always clears the other.
    pub fn set_honor(&mut self, phrase: &str, honorable: bool) {
        let key = normalize(phrase);
        if honorable {
            self.dishonorable.remove(&key);
            self.honorable.insert(key);
        } else {
            self.honorable.remove(&key);
            self.dishonorable.insert(key);
        }
    }

    /// Drop a phrase from whichever set holds it. Returns whether an
    /// override existed.
    pub fn remove(&mut self, phrase: &str) -> bool {
        let key = normalize(phrase);
        self.honorable.remove(&key) || self.dishonorable.remove(&key)
    }
}
