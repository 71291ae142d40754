use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Checked shopping-list lines of one week, keyed by entry key.
///
/// Unchecking removes the key, so the stored map only grows with what is
/// actually ticked.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct CheckState(BTreeMap<String, bool>);

impl From<BTreeMap<String, bool>> for CheckState {
    fn from(value: BTreeMap<String, bool>) -> Self {
        Self(value)
    }
}

impl CheckState {
    pub fn is_checked(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or_default()
    }

    /// Flips the state of `key` and returns the new state.
    pub fn toggle(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.is_checked(&key) {
            self.0.remove(&key);
            return false;
        }

        self.0.insert(key, true);
        true
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    /// Returns whether the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    pub fn checked_count(&self) -> usize {
        self.0.values().filter(|checked| **checked).count()
    }

    pub fn as_map(&self) -> &BTreeMap<String, bool> {
        &self.0
    }
}
