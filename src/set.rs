//! Set algebra under strict equality.
//!
//! Membership is decided by [`Value::strict_equals`]: scalars by value, nested
//! sequences and mappings by identity. Results are sequences in a defined
//! order, described on each function.

use crate::traversal::contains;
use crate::value::Value;
use crate::view::Collection;

/// Returns every distinct value of `collections`, in order of first occurrence
/// taking the collections left to right.
///
/// ```rust
/// use lambars_collections::{Collection, union, values};
///
/// let merged = union(&[
///     Collection::from(values![1, 2, 3]),
///     Collection::from(values![101, 2, 1, 10]),
///     Collection::from(values![2, 1]),
/// ]);
/// assert_eq!(merged, values![1, 2, 3, 101, 10]);
/// ```
pub fn union(collections: &[Collection]) -> Vec<Value> {
    let mut merged = Vec::new();
    for value in collections.iter().flat_map(Collection::values) {
        push_distinct(&mut merged, value);
    }
    merged
}

/// Returns the distinct values present in every collection, in the order of
/// the first collection. No collections yields an empty result.
///
/// ```rust
/// use lambars_collections::{Collection, intersection, values};
///
/// let common = intersection(&[
///     Collection::from(values![1, 2, 3]),
///     Collection::from(values![101, 2, 1, 10]),
///     Collection::from(values![2, 1]),
/// ]);
/// assert_eq!(common, values![1, 2]);
/// ```
pub fn intersection(collections: &[Collection]) -> Vec<Value> {
    let Some((base, others)) = collections.split_first() else {
        return Vec::new();
    };
    let mut common = Vec::new();
    for value in base.values() {
        if others.iter().all(|other| contains(other, value)) {
            push_distinct(&mut common, value);
        }
    }
    common
}

/// Returns the distinct values of `collection` that appear in none of
/// `others`, in `collection`'s order. Each qualifying value is emitted once.
///
/// ```rust
/// use lambars_collections::{Collection, difference, values};
///
/// let remaining = difference(
///     &Collection::from(values![1, 2, 3, 4, 5]),
///     &[Collection::from(values![5, 2, 10])],
/// );
/// assert_eq!(remaining, values![1, 3, 4]);
/// ```
pub fn difference(collection: &Collection, others: &[Collection]) -> Vec<Value> {
    let mut remaining = Vec::new();
    for value in collection.values() {
        if !others.iter().any(|other| contains(other, value)) {
            push_distinct(&mut remaining, value);
        }
    }
    remaining
}

/// Returns `collection` with every occurrence of the `excluded` values
/// removed. Other values, duplicates included, keep their order.
pub fn without(collection: &Collection, excluded: &[Value]) -> Vec<Value> {
    collection
        .values()
        .filter(|value| !excluded.iter().any(|candidate| candidate.strict_equals(value)))
        .cloned()
        .collect()
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// Pass `is_sorted = true` when equal values are known to be adjacent; only
/// neighbors are then compared.
///
/// ```rust
/// use lambars_collections::{Collection, uniq, values};
///
/// assert_eq!(uniq(&Collection::from(values![1, 2, 1, 3, 1, 4]), false), values![1, 2, 3, 4]);
/// assert_eq!(uniq(&Collection::from(values![1, 1, 2, 3, 3]), true), values![1, 2, 3]);
/// ```
pub fn uniq(collection: &Collection, is_sorted: bool) -> Vec<Value> {
    uniq_by(collection, is_sorted, Value::clone)
}

/// Removes values whose `criterion` result strictly equals that of an earlier
/// value, keeping the first occurrence.
///
/// With `is_sorted = true` a value is dropped only when its result equals the
/// immediately preceding value's result.
pub fn uniq_by<F, K>(collection: &Collection, is_sorted: bool, mut criterion: F) -> Vec<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    let mut unique = Vec::new();
    if is_sorted {
        let mut previous: Option<Value> = None;
        for value in collection.values() {
            let rank = criterion(value).into();
            if !previous.as_ref().is_some_and(|seen| seen.strict_equals(&rank)) {
                unique.push(value.clone());
            }
            previous = Some(rank);
        }
    } else {
        let mut seen: Vec<Value> = Vec::new();
        for value in collection.values() {
            let rank = criterion(value).into();
            if !seen.iter().any(|earlier| earlier.strict_equals(&rank)) {
                seen.push(rank);
                unique.push(value.clone());
            }
        }
    }
    unique
}

fn push_distinct(values: &mut Vec<Value>, value: &Value) {
    if !values.iter().any(|present| present.strict_equals(value)) {
        values.push(value.clone());
    }
}
