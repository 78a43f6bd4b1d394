//! Positional helpers for sequences.
//!
//! The accessors here take `&[Value]` rather than a [`Collection`]: they only
//! make sense for index-addressed data, and a mapping cannot be passed by
//! accident. Use [`to_array`] to turn a mapping or text into a sequence first.

use crate::error::CollectionError;
use crate::traversal::{fold_left, truthy};
use crate::value::Value;
use crate::view::Collection;
use smallvec::SmallVec;
use std::slice;

/// Nesting depth the `flatten` work stack holds without allocating.
const INLINE_DEPTH: usize = 8;

/// Returns the first element.
pub fn first(sequence: &[Value]) -> Option<Value> {
    sequence.first().cloned()
}

/// Returns the first `count` elements, or all of them if there are fewer.
pub fn first_n(sequence: &[Value], count: usize) -> Vec<Value> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element.
pub fn last(sequence: &[Value]) -> Option<Value> {
    sequence.last().cloned()
}

/// Returns the last `count` elements, or all of them if there are fewer.
///
/// ```rust
/// use lambars_collections::{last_n, values};
///
/// assert_eq!(last_n(&values![5, 4, 3, 2, 1], 2), values![2, 1]);
/// assert_eq!(last_n(&values![1], 10), values![1]);
/// ```
pub fn last_n(sequence: &[Value], count: usize) -> Vec<Value> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}

/// Returns everything but the last element.
pub fn initial(sequence: &[Value]) -> Vec<Value> {
    initial_n(sequence, 1)
}

/// Returns everything but the last `count` elements. A `count` of zero keeps
/// the whole sequence.
pub fn initial_n(sequence: &[Value], count: usize) -> Vec<Value> {
    sequence[..sequence.len().saturating_sub(count)].to_vec()
}

/// Returns everything but the first element.
pub fn rest(sequence: &[Value]) -> Vec<Value> {
    rest_from(sequence, 1)
}

/// Returns the elements from `index` onwards; an `index` past the end yields
/// an empty sequence.
pub fn rest_from(sequence: &[Value], index: usize) -> Vec<Value> {
    sequence.get(index..).unwrap_or_default().to_vec()
}

/// Drops every falsy element, keeping the others in order.
///
/// ```rust
/// use lambars_collections::{Value, compact, values};
///
/// let kept = compact(&values![0, 1, false, 2, "", 3, Value::Null, f64::NAN]);
/// assert_eq!(kept, values![1, 2, 3]);
/// ```
pub fn compact(sequence: &[Value]) -> Vec<Value> {
    sequence.iter().filter(|value| truthy(value)).cloned().collect()
}

/// Flattens nested sequences, depth first and left to right.
///
/// With `shallow` only the outermost level of nesting is removed. Mappings
/// and other values are kept as elements. The walk uses an explicit work
/// stack, so deep nesting cannot overflow the call stack.
///
/// ```rust
/// use lambars_collections::{flatten, values};
///
/// let nested = values![1, values![2], values![3, values![values![4]]]];
///
/// assert_eq!(flatten(&nested, false), values![1, 2, 3, 4]);
/// assert_eq!(flatten(&nested, true), values![1, 2, 3, values![values![4]]]);
/// ```
pub fn flatten(sequence: &[Value], shallow: bool) -> Vec<Value> {
    let mut flattened = Vec::with_capacity(sequence.len());
    let mut stack: SmallVec<[slice::Iter<'_, Value>; INLINE_DEPTH]> = SmallVec::new();
    stack.push(sequence.iter());

    while let Some(cursor) = stack.last_mut() {
        let Some(value) = cursor.next() else {
            stack.pop();
            continue;
        };
        match value {
            Value::Sequence(nested) if !shallow || stack.len() == 1 => {
                if stack.len() == INLINE_DEPTH && !stack.spilled() {
                    tracing::trace!(depth = stack.len() + 1, "flatten work stack moved to the heap");
                }
                stack.push(nested.iter());
            }
            other => flattened.push(other.clone()),
        }
    }
    flattened
}

/// Converts a value into a sequence.
///
/// - sequence: copied unchanged
/// - mapping: one `[key, value]` pair per entry, in insertion order
/// - text: one single-character text per character
///
/// # Errors
///
/// Returns [`CollectionError::Shape`] for any other value.
///
/// ```rust
/// use lambars_collections::{Value, record, to_array, values};
///
/// let pairs = to_array(&Value::from(record! { "one" => 1, "two" => 2 }));
/// assert_eq!(pairs, Ok(values![values!["one", 1], values!["two", 2]]));
///
/// assert_eq!(to_array(&Value::from("abc")), Ok(values!["a", "b", "c"]));
/// assert!(to_array(&Value::from(1)).is_err());
/// ```
pub fn to_array(value: &Value) -> Result<Vec<Value>, CollectionError> {
    match value {
        Value::Sequence(elements) => Ok(elements.to_vec()),
        Value::Mapping(mapping) => Ok(mapping
            .iter()
            .map(|(key, value)| Value::from(vec![Value::from(key), value.clone()]))
            .collect()),
        Value::Text(text) => Ok(text.chars().map(Value::from).collect()),
        other => {
            tracing::debug!(found = other.kind_name(), "value cannot be converted to a sequence");
            Err(CollectionError::shape(
                "to_array",
                "a sequence, mapping or text",
                other.kind_name(),
            ))
        }
    }
}

/// Counts the elements of a collection by traversing it.
pub fn size(collection: &Collection) -> usize {
    fold_left(collection, 0, |count, _| count + 1)
}

/// Transposes collections: the i-th result is a sequence of the i-th element
/// of every input.
///
/// The result is as long as the longest input; shorter inputs contribute
/// [`Value::Undefined`]. Mappings contribute their values in insertion order.
///
/// ```rust
/// use lambars_collections::{Collection, Value, values, zip};
///
/// let zipped = zip(&[
///     Collection::from(values!["moe", "larry"]),
///     Collection::from(values![30, 40, 50]),
/// ]);
///
/// assert_eq!(
///     zipped,
///     values![values!["moe", 30], values!["larry", 40], values![Value::Undefined, 50]]
/// );
/// ```
pub fn zip(collections: &[Collection]) -> Vec<Value> {
    let length = collections.iter().map(Collection::len).max().unwrap_or(0);
    let mut columns: Vec<_> = collections.iter().map(Collection::values).collect();

    (0..length)
        .map(|_| {
            columns
                .iter_mut()
                .map(|column| column.next().cloned().unwrap_or_default())
                .collect::<Value>()
        })
        .collect()
}
