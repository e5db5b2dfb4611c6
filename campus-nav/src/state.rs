//! Navigation state - current selection and the expansion set

use std::collections::HashSet;

use crate::config::NavConfig;

/// Selected key plus the set of expanded group names.
///
/// Owned by one session. Changed only through [`select`](Self::select) and
/// [`toggle_expand`](Self::toggle_expand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    selected_key: String,
    expanded_keys: HashSet<String>,
    initial_key: String,
}

impl NavigationState {
    pub fn new(initial_key: impl Into<String>) -> Self {
        let initial_key = initial_key.into();
        Self {
            selected_key: initial_key.clone(),
            expanded_keys: HashSet::new(),
            initial_key,
        }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(config.initial_key.clone())
    }

    pub fn selected_key(&self) -> &str {
        &self.selected_key
    }

    pub fn expanded_keys(&self) -> &HashSet<String> {
        &self.expanded_keys
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_keys.contains(key)
    }

    /// Overwrite the selection; the key is not checked against any tree
    pub fn select(&mut self, key: impl Into<String>) {
        self.selected_key = key.into();
    }

    /// Collapse `key` if open, otherwise open it. Other groups are untouched.
    pub fn toggle_expand(&mut self, key: &str) {
        if !self.expanded_keys.remove(key) {
            self.expanded_keys.insert(key.to_string());
        }
    }

    /// Open every name in `keys`, leaving already-open groups open
    pub fn expand_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        self.expanded_keys
            .extend(keys.into_iter().map(str::to_string));
    }

    /// Back to the initial selection with nothing expanded
    pub fn reset(&mut self) {
        self.selected_key = self.initial_key.clone();
        self.expanded_keys.clear();
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::from_config(&NavConfig::default())
    }
}
