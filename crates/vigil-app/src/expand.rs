// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use crate::RowKey;

/// Which rows of one list are expanded. Kept apart from the records so the
/// datasets stay immutable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpandedRows {
    keys: BTreeSet<RowKey>,
}

impl ExpandedRows {
    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// Flips the row and returns its new state.
    pub fn toggle(&mut self, key: RowKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn collapse_all(&mut self) -> usize {
        let count = self.keys.len();
        self.keys.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ExpandedRows;
    use crate::RowKey;

    #[test]
    fn toggle_flips_one_row_only() {
        let mut expanded = ExpandedRows::default();
        let first = RowKey::new("DEP", 1);
        let second = RowKey::new("DEP", 2);

        assert!(expanded.toggle(first));
        assert!(expanded.is_expanded(&first));
        assert!(!expanded.is_expanded(&second));

        assert!(!expanded.toggle(first));
        assert!(expanded.is_empty());
    }

    #[test]
    fn collapse_all_reports_how_many_closed() {
        let mut expanded = ExpandedRows::default();
        expanded.toggle(RowKey::new("POL", 1));
        expanded.toggle(RowKey::new("POL", 3));

        assert_eq!(expanded.collapse_all(), 2);
        assert_eq!(expanded.len(), 0);
    }
}
