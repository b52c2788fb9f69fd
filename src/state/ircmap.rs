//! A map keyed by IRC identifiers.
//!
//! Nicknames and channel names compare under a casemapping rule, so a plain
//! `HashMap<String, V>` would treat `Alice` and `alice` as two users. [`IrcMap`]
//! looks keys up by their folded form while remembering the spelling they were
//! last inserted under, which is what gets shown back when iterating.

use std::collections::HashMap;
use std::fmt;

use slircbot_proto::CaseMapping;

use crate::error::StateError;

/// An insertion-ordered map whose keys compare under a [`CaseMapping`].
///
/// At most one entry exists per equivalence class. Inserting under an
/// equivalent key with a different spelling drops the old entry and stores the
/// new spelling at the end of iteration order.
#[derive(Clone)]
pub struct IrcMap<V> {
    casemapping: CaseMapping,
    /// `(stored spelling, value)` in insertion order.
    entries: Vec<(String, V)>,
    /// Folded key -> position in `entries`.
    index: HashMap<String, usize>,
}

impl<V> IrcMap<V> {
    /// Create an empty map using RFC 1459 casemapping.
    pub fn new() -> Self {
        Self::with_casemapping(CaseMapping::default())
    }

    /// Create an empty map using the given casemapping.
    pub fn with_casemapping(casemapping: CaseMapping) -> Self {
        Self {
            casemapping,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn casemapping(&self) -> CaseMapping {
        self.casemapping
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(&self.casemapping.fold(key)).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.position(key).map(|i| &mut self.entries[i].1)
    }

    /// The spelling `key` is currently stored under.
    pub fn stored_key(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].0.as_str())
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    pub fn lookup(&self, key: &str) -> Result<&V, StateError> {
        self.get(key)
            .ok_or_else(|| StateError::KeyNotFound(key.to_string()))
    }

    /// Store `value` under `key`, replacing any entry with an equivalent key.
    ///
    /// Returns the displaced value, if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let old = self.remove(&key);
        self.push(key, value);
        old
    }

    /// Store `value` under `key` like [`insert`](Self::insert) and return a
    /// reference to the freshly stored value.
    pub fn insert_entry(&mut self, key: impl Into<String>, value: V) -> &mut V {
        let key = key.into();
        self.remove(&key);
        let pos = self.push(key, value);
        &mut self.entries[pos].1
    }

    fn push(&mut self, key: String, value: V) -> usize {
        let pos = self.entries.len();
        self.index.insert(self.casemapping.fold(&key), pos);
        self.entries.push((key, value));
        pos
    }

    /// Remove the entry equivalent to `key`. Absence is not an error.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let pos = self.index.remove(&self.casemapping.fold(key))?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Like [`remove`](Self::remove), but a missing key is an error.
    pub fn delete(&mut self, key: &str) -> Result<V, StateError> {
        self.remove(key)
            .ok_or_else(|| StateError::KeyNotFound(key.to_string()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterate `(stored spelling, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, v)| v)
    }
}

impl<V> Default for IrcMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for IrcMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a IrcMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for IrcMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut map = IrcMap::new();
        map.insert("#Rust[dev]", 1);

        assert_eq!(map.get("#rust{DEV}"), Some(&1));
        assert!(map.contains_key("#RUST[DEV]"));
        assert_eq!(map.stored_key("#rust{dev}"), Some("#Rust[dev]"));
    }

    #[test]
    fn test_reinsert_replaces_spelling_and_value() {
        let mut map = IrcMap::new();
        map.insert("Alice", 1);
        map.insert("bob", 2);

        assert_eq!(map.insert("ALICE", 3), Some(1));
        assert_eq!(map.len(), 2);
        // New spelling moves to the end
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["bob", "ALICE"]);
        assert_eq!(map.get("alice"), Some(&3));
    }

    #[test]
    fn test_remove_keeps_remaining_lookups_valid() {
        let mut map = IrcMap::new();
        for (i, nick) in ["a", "b", "c", "d"].into_iter().enumerate() {
            map.insert(nick, i);
        }

        assert_eq!(map.remove("B"), Some(1));
        assert_eq!(map.remove("b"), None);
        assert_eq!(map.get("c"), Some(&2));
        assert_eq!(map.get("d"), Some(&3));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_lookup_and_delete_report_missing_keys() {
        let mut map: IrcMap<()> = IrcMap::new();
        assert_eq!(
            map.lookup("ghost"),
            Err(StateError::KeyNotFound("ghost".to_string()))
        );
        assert_eq!(
            map.delete("ghost"),
            Err(StateError::KeyNotFound("ghost".to_string()))
        );

        map.insert("ghost", ());
        assert_eq!(map.delete("GHOST"), Ok(()));
        assert!(map.is_empty());
    }

    #[test]
    fn test_injected_casemapping() {
        let mut map = IrcMap::with_casemapping(CaseMapping::Ascii);
        map.insert("nick[", ());
        assert!(map.contains_key("NICK["));
        assert!(!map.contains_key("nick{"));
    }

    #[test]
    fn test_insert_entry_returns_stored_value() {
        let mut map = IrcMap::new();
        map.insert("#a", 1);
        *map.insert_entry("#A", 2) += 40;
        assert_eq!(map.get("#a"), Some(&42));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_values_mut_and_extend() {
        let mut map = IrcMap::new();
        map.extend([("x", 1), ("y", 2)]);
        for v in map.values_mut() {
            *v *= 10;
        }
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![10, 20]);
        assert_eq!((&map).into_iter().count(), 2);
    }

    fn nick() -> impl Strategy<Value = String> {
        "[a-zA-Z\\[\\]\\\\^~{}|]{1,6}"
    }

    proptest! {
        #[test]
        fn prop_equivalent_keys_share_an_entry(a in nick()) {
            let b: String = a
                .chars()
                .map(|c| match c {
                    '[' => '{',
                    '{' => '[',
                    '~' => '^',
                    c => c.to_ascii_uppercase(),
                })
                .collect();

            let mut map = IrcMap::new();
            map.insert(a.clone(), 7);
            prop_assert_eq!(map.get(&b), Some(&7));
            prop_assert!(map.contains_key(&b));

            map.insert(b.clone(), 8);
            prop_assert_eq!(map.len(), 1);
            prop_assert_eq!(map.stored_key(&a), Some(b.as_str()));
        }

        #[test]
        fn prop_index_matches_entries(ops in proptest::collection::vec((nick(), any::<bool>()), 0..40)) {
            let mut map = IrcMap::new();
            for (key, insert) in &ops {
                if *insert {
                    map.insert(key.clone(), key.clone());
                } else {
                    map.remove(key);
                }
            }
            for (stored, value) in map.iter() {
                prop_assert_eq!(map.get(stored), Some(value));
            }
            prop_assert_eq!(map.keys().count(), map.len());
        }
    }
}
