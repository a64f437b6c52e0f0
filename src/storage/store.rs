//! Insertion-ordered keyed collection.

use crate::entities::Record;
use std::collections::HashMap;

/// In-memory store of records keyed by [`Record::key`], iterated in insertion order.
#[derive(Debug, Clone)]
pub struct Store<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> Store<T> {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from loaded records. A repeated key replaces the earlier record
    /// but keeps its original position.
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Whether a record with `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Looks up a record by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.records[slot])
    }

    /// Mutable lookup by key. Changing the record's key through this breaks the index.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index.get(key).map(|&slot| &mut self.records[slot])
    }

    /// Inserts a record, returning the one it replaced (if the key was present).
    pub fn insert(&mut self, record: T) -> Option<T> {
        if let Some(&slot) = self.index.get(record.key()) {
            return Some(std::mem::replace(&mut self.records[slot], record));
        }
        self.index
            .insert(record.key().to_string(), self.records.len());
        self.records.push(record);
        None
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Records in insertion order, as a slice (what gets written to disk).
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, T: Record> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Supplier;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut store = Store::new();
        store.insert(Supplier::new("S9", "Zeta", "z"));
        store.insert(Supplier::new("S1", "Acme", "a"));
        store.insert(Supplier::new("S5", "Mid", "m"));

        let ids: Vec<&str> = store.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["S9", "S1", "S5"]);
    }

    #[test]
    fn test_repeated_key_replaces_in_place() {
        let store = Store::from_records(vec![
            Supplier::new("S1", "Acme", "old"),
            Supplier::new("S2", "Globex", "g"),
            Supplier::new("S1", "Acme", "new"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[0].contact_info, "new");
        assert_eq!(store.get("S1").unwrap().contact_info, "new");
    }

    #[test]
    fn test_get_mut_edits_the_stored_record() {
        let mut store = Store::new();
        store.insert(Supplier::new("S1", "Acme", "a"));
        store.get_mut("S1").unwrap().name = "Acme Corp".to_string();

        assert_eq!(store.get("S1").unwrap().name, "Acme Corp");
        assert!(store.get_mut("S404").is_none());
        assert!(!store.contains("S404"));
    }
}
