//! Flat, owned field-name → text projection of a live entity.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// Point-in-time projection of one entity.
///
/// Owns copies of every value it carries, so it never borrows from the
/// entity it was built from. Keys iterate in sorted order, which makes two
/// builds of an unchanged entity byte-identical once serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    fields: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_owned(), value.into());
    }

    /// Set `key` only when `value` is present. Absent optionals leave the key
    /// out entirely rather than storing `""`.
    pub fn set_opt<S: Into<String>>(&mut self, key: &str, value: Option<S>) {
        if let Some(v) = value {
            self.set(key, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for Snapshot {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Snapshot {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let s = Snapshot::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.iter().count(), 0);
    }

    #[test]
    fn set_opt_skips_absent_values() {
        let mut s = Snapshot::new();
        s.set_opt("realmname", None::<String>);
        s.set_opt("description", Some("ladder game"));
        assert!(!s.contains_key("realmname"));
        assert_eq!(s.get("description"), Some("ladder game"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut s = Snapshot::new();
        s.set("id", "1");
        s.set("id", "2");
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("id"), Some("2"));
    }

    #[test]
    fn keys_iterate_sorted() {
        let s: Snapshot = [("name", "x"), ("id", "7"), ("email", "e")].into_iter().collect();
        assert_eq!(s.keys().collect::<Vec<_>>(), ["email", "id", "name"]);
    }

    #[test]
    fn serializes_as_flat_map() {
        let s: Snapshot = [("id", "7"), ("name", "bob")].into_iter().collect();
        let yaml = serde_yaml::to_string(&s).unwrap();
        let back: BTreeMap<String, String> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.get("id").map(String::as_str), Some("7"));
        assert_eq!(back.len(), 2);
    }
}
