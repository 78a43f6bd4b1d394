//! Ranking by a derived criterion.
//!
//! Criterion results are compared with [`Value::compare`]. An incomparable
//! pair (say, a number against a text, or anything against `NaN`) is never
//! "greater" or "less": `max`/`min` keep their current pick, and `sort_by`
//! treats the pair as equal, leaving it in input order.
//!
//! `max`/`min` never pick a value whose rank is incomparable with itself
//! (`undefined`, `NaN`, nested values). When no rank is comparable at all,
//! they fall back to the first value.

use crate::value::Value;
use crate::view::Collection;
use std::cmp::Ordering;

/// Returns the value with the greatest criterion result.
///
/// Ties keep the first value encountered. An empty collection yields `None`.
///
/// # Contract
///
/// Unlike [`min`], there is no criterion-less shorthand: callers always supply
/// the ranking criterion.
///
/// ```rust
/// use lambars_collections::{Collection, Value, max, property, record};
///
/// let stooges = Collection::from(vec![
///     Value::from(record! { "name" => "moe", "age" => 40 }),
///     Value::from(record! { "name" => "curly", "age" => 60 }),
///     Value::from(record! { "name" => "larry", "age" => 50 }),
/// ]);
///
/// let oldest = max(&stooges, property("age"));
/// assert_eq!(oldest.map(|stooge| stooge.property("name")), Some(Value::from("curly")));
/// ```
pub fn max<F, K>(collection: &Collection, criterion: F) -> Option<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    extreme(collection, criterion, Ordering::Greater)
}

/// Returns the value with the least criterion result.
///
/// Ties keep the first value encountered. An empty collection yields `None`.
pub fn min<F, K>(collection: &Collection, criterion: F) -> Option<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    extreme(collection, criterion, Ordering::Less)
}

/// [`min`] ranked by the values themselves.
///
/// ```rust
/// use lambars_collections::{Collection, Value, min_value, values};
///
/// let numbers = Collection::from(values![10, 5, 100, 2, 1000]);
/// assert_eq!(min_value(&numbers), Some(Value::from(2)));
/// ```
pub fn min_value(collection: &Collection) -> Option<Value> {
    min(collection, Value::clone)
}

fn extreme<F, K>(collection: &Collection, mut criterion: F, wanted: Ordering) -> Option<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    let mut first: Option<&Value> = None;
    let mut best: Option<(&Value, Value)> = None;
    for value in collection.values() {
        first.get_or_insert(value);
        let rank = criterion(value).into();
        if rank.compare(&rank).is_none() {
            continue;
        }
        let replace = best
            .as_ref()
            .is_none_or(|(_, best_rank)| rank.compare(best_rank) == Some(wanted));
        if replace {
            best = Some((value, rank));
        }
    }
    best.map(|(value, _)| value).or(first).cloned()
}

/// Returns a new sequence sorted ascending by `criterion`.
///
/// The sort is stable: values whose criterion results compare equal, or are
/// incomparable, keep their input order. `criterion` runs once per value.
///
/// ```rust
/// use lambars_collections::{Collection, Value, sort_by, values};
///
/// let numbers = Collection::from(values![1, 2, 3, 4, 5, 6]);
/// let sorted = sort_by(&numbers, |value| value.as_number().map(f64::sin));
/// assert_eq!(sorted, values![5, 4, 6, 3, 1, 2]);
/// ```
pub fn sort_by<F, K>(collection: &Collection, criterion: F) -> Vec<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    stable_sort(collection.values().cloned().collect(), criterion)
}

/// [`sort_by`] ranked by the values themselves.
pub fn sort(collection: &Collection) -> Vec<Value> {
    sort_by(collection, Value::clone)
}

/// Sorts `values` ascending by `criterion` with a bottom-up merge sort.
///
/// Never panics on inconsistent comparisons, unlike `slice::sort_by`, which
/// may when the ordering is not total.
pub(crate) fn stable_sort<F, K>(values: Vec<Value>, mut criterion: F) -> Vec<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    let mut ranked: Vec<(Value, Value)> = values
        .into_iter()
        .map(|value| (criterion(&value).into(), value))
        .collect();
    let mut buffer: Vec<(Value, Value)> = Vec::with_capacity(ranked.len());

    let length = ranked.len();
    let mut width = 1;
    while width < length {
        buffer.clear();
        let mut start = 0;
        while start < length {
            let middle = (start + width).min(length);
            let end = (start + 2 * width).min(length);
            merge(&ranked[start..middle], &ranked[middle..end], &mut buffer);
            start = end;
        }
        std::mem::swap(&mut ranked, &mut buffer);
        width *= 2;
    }

    ranked.into_iter().map(|(_, value)| value).collect()
}

fn merge(left: &[(Value, Value)], right: &[(Value, Value)], output: &mut Vec<(Value, Value)>) {
    let (mut left_index, mut right_index) = (0, 0);
    while left_index < left.len() && right_index < right.len() {
        // Take from the right run only when strictly smaller, so equal and
        // incomparable ranks keep the left run first.
        if right[right_index].0.compare(&left[left_index].0) == Some(Ordering::Less) {
            output.push(right[right_index].clone());
            right_index += 1;
        } else {
            output.push(left[left_index].clone());
            left_index += 1;
        }
    }
    output.extend_from_slice(&left[left_index..]);
    output.extend_from_slice(&right[right_index..]);
}
