use std::collections::BTreeSet;

/// Keys marked for batch scoping. Survives paging and re-search; only the
/// explicit transitions below empty it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    active: bool,
    keys: BTreeSet<String>,
}

impl SelectionSet {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turning the mode off drops every key so stale keys cannot scope a later command.
    pub fn toggle_mode(&mut self) -> bool {
        self.active = !self.active;
        if !self.active {
            self.keys.clear();
        }
        self.active
    }

    /// Flips membership. Ignored outside selection mode; returns whether the key is now selected.
    pub fn toggle(&mut self, key: &str) -> bool {
        if !self.active {
            return false;
        }
        if self.keys.remove(key) {
            return false;
        }
        self.keys.insert(key.to_string());
        true
    }

    /// Replaces the contents with exactly `key` and enters selection mode.
    pub fn select_only(&mut self, key: &str) {
        self.active = true;
        self.keys.clear();
        self.keys.insert(key.to_string());
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}
