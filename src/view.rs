//! Uniform traversal over sequences and mappings.
//!
//! [`Collection`] is the tagged variant every operation consumes. Its
//! [`entries`](Collection::entries) iterator yields one [`Entry`] per element
//! in traversal order:
//!
//! - sequences: ascending index
//! - mappings: insertion order
//!
//! The iterator is double-ended, so right folds walk the same order backwards.
//!
//! # Examples
//!
//! ```rust
//! use lambars_collections::{Collection, Key, Value, record};
//!
//! let collection = Collection::from(record! { "one" => 1, "two" => 2 });
//! let keys: Vec<Key<'_>> = collection.entries().map(|entry| entry.key).collect();
//!
//! assert_eq!(keys, vec![Key::Name("one"), Key::Name("two")]);
//! ```

use crate::error::CollectionError;
use crate::value::{Mapping, Value};
use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::rc::Rc;
use std::slice;

/// The shape of a value, as seen by the traversal layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An ordered, index-addressed sequence.
    Sequence,
    /// A keyed mapping.
    Mapping,
    /// Anything that cannot be traversed.
    Neither,
}

/// A sequence or a mapping of [`Value`]s.
#[derive(Clone, Debug, PartialEq)]
pub enum Collection {
    /// Elements addressed by 0-based position.
    Sequence(Vec<Value>),
    /// Values addressed by unique text keys, in insertion order.
    Mapping(Mapping),
}

static_assertions::assert_not_impl_any!(Collection: Send, Sync);

impl Collection {
    /// Classifies a value without converting it.
    ///
    /// ```rust
    /// use lambars_collections::{Collection, Shape, Value, values};
    ///
    /// assert_eq!(Collection::classify(&Value::from(values![1])), Shape::Sequence);
    /// assert_eq!(Collection::classify(&Value::from("text")), Shape::Neither);
    /// ```
    pub const fn classify(value: &Value) -> Shape {
        match value {
            Value::Sequence(_) => Shape::Sequence,
            Value::Mapping(_) => Shape::Mapping,
            _ => Shape::Neither,
        }
    }

    /// The shape of this collection; never [`Shape::Neither`].
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.len(),
            Self::Mapping(mapping) => mapping.len(),
        }
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every element with its key or index.
    pub fn entries(&self) -> Entries<'_> {
        let cursor = match self {
            Self::Sequence(elements) => Cursor::Sequence(elements.iter().enumerate()),
            Self::Mapping(mapping) => Cursor::Mapping(mapping.as_slice().iter()),
        };
        Entries {
            source: self,
            cursor,
        }
    }

    /// Iterates over the element values only.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries().map(|entry| entry.value)
    }

    /// Copies the element values into a new `Vec`, in traversal order.
    pub fn to_values(&self) -> Vec<Value> {
        self.values().cloned().collect()
    }

    fn rejected(value: &Value) -> CollectionError {
        tracing::debug!(
            found = value.kind_name(),
            "value is neither a sequence nor a mapping"
        );
        CollectionError::shape("collection", "a sequence or mapping", value.kind_name())
    }
}

impl From<Vec<Value>> for Collection {
    fn from(elements: Vec<Value>) -> Self {
        Self::Sequence(elements)
    }
}

impl From<Mapping> for Collection {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

/// Unwraps a nested sequence or mapping, copying it out of its shared
/// allocation only when other references to it exist.
impl TryFrom<Value> for Collection {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(elements) => Ok(Self::Sequence(Rc::unwrap_or_clone(elements))),
            Value::Mapping(mapping) => Ok(Self::Mapping(Rc::unwrap_or_clone(mapping))),
            other => Err(Self::rejected(&other)),
        }
    }
}

impl TryFrom<&Value> for Collection {
    type Error = CollectionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(elements) => Ok(Self::Sequence(elements.to_vec())),
            Value::Mapping(mapping) => Ok(Self::Mapping(Mapping::clone(mapping))),
            other => Err(Self::rejected(other)),
        }
    }
}

impl From<Collection> for Value {
    fn from(collection: Collection) -> Self {
        match collection {
            Collection::Sequence(elements) => Self::from(elements),
            Collection::Mapping(mapping) => Self::from(mapping),
        }
    }
}

/// The position of an entry: an index into a sequence or a mapping key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// 0-based sequence position.
    Index(usize),
    /// Mapping key.
    Name(&'a str),
}

impl Key<'_> {
    /// Converts the key into a value: a number for indices, text for names.
    pub fn to_value(self) -> Value {
        match self {
            Self::Index(index) => Value::from(index),
            Self::Name(name) => Value::from(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

/// One traversed element.
#[derive(Clone, Copy, Debug)]
pub struct Entry<'a> {
    /// The element.
    pub value: &'a Value,
    /// Where the element sits in its collection.
    pub key: Key<'a>,
    /// The collection being traversed.
    pub source: &'a Collection,
}

#[derive(Clone, Debug)]
enum Cursor<'a> {
    Sequence(Enumerate<slice::Iter<'a, Value>>),
    Mapping(slice::Iter<'a, (String, Value)>),
}

/// Iterator over the [`Entry`]s of a [`Collection`], created by
/// [`Collection::entries`].
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    source: &'a Collection,
    cursor: Cursor<'a>,
}

impl<'a> Entries<'a> {
    fn entry(&self, value: &'a Value, key: Key<'a>) -> Entry<'a> {
        Entry {
            value,
            key,
            source: self.source,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (value, key) = match &mut self.cursor {
            Cursor::Sequence(elements) => {
                let (index, value) = elements.next()?;
                (value, Key::Index(index))
            }
            Cursor::Mapping(pairs) => {
                let (name, value) = pairs.next()?;
                (value, Key::Name(name.as_str()))
            }
        };
        Some(self.entry(value, key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Cursor::Sequence(elements) => elements.size_hint(),
            Cursor::Mapping(pairs) => pairs.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (value, key) = match &mut self.cursor {
            Cursor::Sequence(elements) => {
                let (index, value) = elements.next_back()?;
                (value, Key::Index(index))
            }
            Cursor::Mapping(pairs) => {
                let (name, value) = pairs.next_back()?;
                (value, Key::Name(name.as_str()))
            }
        };
        Some(self.entry(value, key))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a Collection {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
