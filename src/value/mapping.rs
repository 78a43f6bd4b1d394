//! Insertion-ordered keyed record.
//!
//! [`Mapping`] stores `(key, value)` pairs in a `Vec` and keeps a hash index
//! from key to position, so enumeration order is insertion order and lookups
//! stay O(1).
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `get`          | O(1)       |
//! | `insert`       | O(1)*      |
//! | `iter`         | O(n)       |
//! | `len`          | O(1)       |
//!
//! With the `fxhash` feature the index uses `rustc-hash`'s `FxBuildHasher`
//! instead of the standard `RandomState`.

use super::Value;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "fxhash")]
type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
type KeyHasher = std::hash::RandomState;

/// A keyed collection of named values with significant insertion order.
///
/// Keys are unique. Inserting under an existing key replaces the value but
/// keeps the key at its original position.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::{Mapping, Value};
///
/// let mut mapping = Mapping::new();
/// mapping.insert("b", 2);
/// mapping.insert("a", 1);
/// mapping.insert("b", 20);
///
/// let keys: Vec<&str> = mapping.keys().collect();
/// assert_eq!(keys, vec!["b", "a"]);
/// assert_eq!(mapping.get("b"), Some(&Value::from(20)));
/// ```
#[derive(Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, Value)>,
    positions: HashMap<String, usize, KeyHasher>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mapping with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity_and_hasher(capacity, KeyHasher::default()),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let position = *self.positions.get(key)?;
        Some(&mut self.entries[position].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Stores `value` under `key` and returns the previous value, if any.
    ///
    /// A new key is appended at the end; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(&position) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates mutably over values in insertion order.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Value> + ExactSizeIterator {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    pub(crate) fn as_slice(&self) -> &[(String, Value)] {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Order-sensitive: two mappings are equal when they hold structurally equal
/// values under the same keys in the same order.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}
