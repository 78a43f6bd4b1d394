//! Traversal primitives: iteration, short-circuiting and accumulation.
//!
//! Every other operation in the crate is built from these. They accept any
//! [`Collection`] and visit elements in traversal order (see
//! [`view`](crate::view)).
//!
//! # Caller failures
//!
//! A panic in a caller closure unwinds through these functions unchanged. For
//! closures that report failure through `Result`, use the `try_*` variants:
//! they stop at the first `Err` and return it as-is.
//!
//! # Examples
//!
//! ```rust
//! use lambars_collections::{Collection, Value, reduce, values};
//!
//! let numbers = Collection::from(values![1, 2, 3]);
//! let sum = reduce(
//!     &numbers,
//!     |memo, number| Value::from(memo.as_number().unwrap_or(0.0) + number.as_number().unwrap_or(0.0)),
//!     Some(Value::from(0)),
//! );
//! assert_eq!(sum, Value::from(6));
//! ```

use crate::value::Value;
use crate::view::{Collection, Entry};

/// Calls `function` once per entry, for its side effects.
pub fn each<'a, F>(collection: &'a Collection, mut function: F)
where
    F: FnMut(Entry<'a>),
{
    for entry in collection.entries() {
        function(entry);
    }
}

/// Transforms every value.
///
/// # In-place behavior for mappings
///
/// The two shapes behave differently, and callers rely on both:
///
/// - **Sequence**: returns a new sequence of `function(value)` and leaves the
///   input untouched.
/// - **Mapping**: overwrites every value of the input mapping with
///   `function(value)`, keeping its keys, and returns a copy of the mutated
///   mapping.
///
/// Use [`map_values`] for a transformation that never mutates.
///
/// ```rust
/// use lambars_collections::{Collection, Value, map, record, values};
///
/// let triple = |value: &Value| value.as_number().map(|number| number * 3.0);
///
/// let mut sequence = Collection::from(values![1, 2, 3]);
/// assert_eq!(map(&mut sequence, triple), Collection::from(values![3, 6, 9]));
/// assert_eq!(sequence, Collection::from(values![1, 2, 3]));
///
/// let mut mapping = Collection::from(record! { "one" => 1, "two" => 2 });
/// let mapped = map(&mut mapping, triple);
/// assert_eq!(mapping, Collection::from(record! { "one" => 3, "two" => 6 }));
/// assert_eq!(mapped, mapping);
/// ```
pub fn map<F, K>(collection: &mut Collection, mut function: F) -> Collection
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    match collection {
        Collection::Sequence(elements) => Collection::Sequence(
            elements
                .iter()
                .map(|value| -> Value { function(value).into() })
                .collect(),
        ),
        Collection::Mapping(mapping) => {
            for value in mapping.values_mut() {
                *value = function(value).into();
            }
            Collection::Mapping(mapping.clone())
        }
    }
}

/// Transforms every value into a new sequence, for either shape, without
/// touching the input.
pub fn map_values<F, K>(collection: &Collection, mut function: F) -> Vec<Value>
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    collection
        .values()
        .map(|value| -> Value { function(value).into() })
        .collect()
}

/// Folds left to right.
///
/// With a `seed`, `function(seed, first)` starts the fold. Without one, the
/// first element becomes the seed and folding starts at the second.
///
/// # Contract
///
/// An empty collection with no seed has no meaningful result; it returns
/// [`Value::Undefined`]. Pass a seed when the collection may be empty.
pub fn reduce<F>(collection: &Collection, function: F, seed: Option<Value>) -> Value
where
    F: FnMut(Value, &Value) -> Value,
{
    fold_seeded(collection.values(), function, seed)
}

/// Folds right to left: reverse index order for sequences, reverse insertion
/// order for mappings.
///
/// Without a `seed` the last element becomes the seed. The same contract as
/// [`reduce`] applies to empty collections.
///
/// ```rust
/// use lambars_collections::{Collection, Value, reduce_right, values};
///
/// let nested = Collection::from(values![values![0, 1], values![2, 3], values![4, 5]]);
/// let flat = reduce_right(
///     &nested,
///     |memo, pair| {
///         let mut joined = memo.as_sequence().unwrap_or_default().to_vec();
///         joined.extend(pair.as_sequence().unwrap_or_default().iter().cloned());
///         Value::from(joined)
///     },
///     Some(Value::from(values![])),
/// );
/// assert_eq!(flat, Value::from(values![4, 5, 2, 3, 0, 1]));
/// ```
pub fn reduce_right<F>(collection: &Collection, function: F, seed: Option<Value>) -> Value
where
    F: FnMut(Value, &Value) -> Value,
{
    fold_seeded(collection.values().rev(), function, seed)
}

fn fold_seeded<'a, I, F>(mut values: I, mut function: F, seed: Option<Value>) -> Value
where
    I: Iterator<Item = &'a Value>,
    F: FnMut(Value, &Value) -> Value,
{
    let Some(seed) = seed.or_else(|| values.next().cloned()) else {
        return Value::Undefined;
    };
    values.fold(seed, |memo, value| function(memo, value))
}

/// Folds left to right into an accumulator of any type.
pub fn fold_left<B, F>(collection: &Collection, init: B, mut function: F) -> B
where
    F: FnMut(B, &Value) -> B,
{
    collection
        .values()
        .fold(init, |accumulator, value| function(accumulator, value))
}

/// Folds right to left into an accumulator of any type.
///
/// `function` receives the element first and the accumulator second.
pub fn fold_right<B, F>(collection: &Collection, init: B, mut function: F) -> B
where
    F: FnMut(&Value, B) -> B,
{
    collection
        .values()
        .rev()
        .fold(init, |accumulator, value| function(value, accumulator))
}

/// Returns the first value satisfying `predicate`, without visiting the rest.
pub fn find<F>(collection: &Collection, mut predicate: F) -> Option<Value>
where
    F: FnMut(&Value) -> bool,
{
    collection.values().find(|value| predicate(value)).cloned()
}

/// Returns every value satisfying `predicate`, in traversal order.
pub fn filter<F>(collection: &Collection, mut predicate: F) -> Vec<Value>
where
    F: FnMut(&Value) -> bool,
{
    collection
        .values()
        .filter(|value| predicate(value))
        .cloned()
        .collect()
}

/// Returns every value failing `predicate`, in traversal order.
pub fn reject<F>(collection: &Collection, mut predicate: F) -> Vec<Value>
where
    F: FnMut(&Value) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Returns `true` if every value satisfies `predicate`; `true` when empty.
pub fn every<F>(collection: &Collection, mut predicate: F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    collection.values().all(|value| predicate(value))
}

/// Returns `true` as soon as a value satisfies `predicate`.
///
/// Pass [`truthy`] to test the values themselves.
pub fn some<F>(collection: &Collection, mut predicate: F) -> bool
where
    F: FnMut(&Value) -> bool,
{
    collection.values().any(|value| predicate(value))
}

/// Returns `true` if some element strictly equals `target`.
pub fn contains(collection: &Collection, target: &Value) -> bool {
    collection.values().any(|value| value.strict_equals(target))
}

/// The identity criterion.
pub fn identity(value: &Value) -> Value {
    value.clone()
}

/// The truthiness predicate.
pub fn truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Fallible [`each`]: stops at the first error and returns it.
///
/// # Errors
///
/// Returns the first error produced by `function`, unchanged.
pub fn try_each<F, E>(collection: &Collection, function: F) -> Result<(), E>
where
    F: FnMut(Entry<'_>) -> Result<(), E>,
{
    collection.entries().try_for_each(function)
}

/// Fallible [`map`], with the same in-place behavior for mappings.
///
/// A mapping is only written back once every value has been transformed, so
/// a failure leaves it unmodified.
///
/// # Errors
///
/// Returns the first error produced by `function`, unchanged.
pub fn try_map<F, K, E>(collection: &mut Collection, mut function: F) -> Result<Collection, E>
where
    F: FnMut(&Value) -> Result<K, E>,
    K: Into<Value>,
{
    let transformed = collection
        .values()
        .map(|value| function(value).map(Into::<Value>::into))
        .collect::<Result<Vec<Value>, E>>()?;
    match collection {
        Collection::Sequence(_) => Ok(Collection::Sequence(transformed)),
        Collection::Mapping(mapping) => {
            for (slot, value) in mapping.values_mut().zip(transformed) {
                *slot = value;
            }
            Ok(Collection::Mapping(mapping.clone()))
        }
    }
}

/// Fallible [`reduce`].
///
/// # Errors
///
/// Returns the first error produced by `function`, unchanged.
pub fn try_reduce<F, E>(
    collection: &Collection,
    mut function: F,
    seed: Option<Value>,
) -> Result<Value, E>
where
    F: FnMut(Value, &Value) -> Result<Value, E>,
{
    let mut values = collection.values();
    let Some(seed) = seed.or_else(|| values.next().cloned()) else {
        return Ok(Value::Undefined);
    };
    values.try_fold(seed, |memo, value| function(memo, value))
}

/// Fallible [`find`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`, unchanged.
pub fn try_find<F, E>(collection: &Collection, mut predicate: F) -> Result<Option<Value>, E>
where
    F: FnMut(&Value) -> Result<bool, E>,
{
    for value in collection.values() {
        if predicate(value)? {
            return Ok(Some(value.clone()));
        }
    }
    Ok(None)
}

/// Fallible [`filter`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`, unchanged.
pub fn try_filter<F, E>(collection: &Collection, mut predicate: F) -> Result<Vec<Value>, E>
where
    F: FnMut(&Value) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for value in collection.values() {
        if predicate(value)? {
            kept.push(value.clone());
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Key;
    use crate::{record, values};
    use rstest::rstest;

    fn number(value: &Value) -> f64 {
        value.as_number().unwrap_or(f64::NAN)
    }

    fn is_even(value: &Value) -> bool {
        number(value) % 2.0 == 0.0
    }

    fn add(memo: Value, value: &Value) -> Value {
        Value::from(number(&memo) + number(value))
    }

    #[rstest]
    fn test_each_visits_sequence_entries_in_order() {
        let collection = Collection::from(values![10, 20, 30]);
        let mut visited = Vec::new();

        each(&collection, |entry| visited.push((entry.key, entry.value.clone())));

        assert_eq!(
            visited,
            vec![
                (Key::Index(0), Value::from(10)),
                (Key::Index(1), Value::from(20)),
                (Key::Index(2), Value::from(30)),
            ]
        );
    }

    #[rstest]
    fn test_each_visits_mapping_values() {
        let collection = Collection::from(record! { "one" => 1, "two" => 2, "three" => 3 });
        let mut seen = Vec::new();

        each(&collection, |entry| seen.push(entry.value.clone()));

        assert_eq!(seen, values![1, 2, 3]);
    }

    #[rstest]
    fn test_map_sequence_returns_new_sequence() {
        let mut collection = Collection::from(values![1, 2, 3]);

        let mapped = map(&mut collection, |value| number(value) * 3.0);

        assert_eq!(mapped, Collection::from(values![3, 6, 9]));
        assert_eq!(collection, Collection::from(values![1, 2, 3]));
    }

    #[rstest]
    fn test_map_mapping_mutates_input_in_place() {
        let mut collection = Collection::from(record! { "one" => 1, "two" => 2, "three" => 3 });

        let mapped = map(&mut collection, |value| number(value) * 3.0);

        let expected = Collection::from(record! { "one" => 3, "two" => 6, "three" => 9 });
        assert_eq!(collection, expected);
        assert_eq!(mapped, expected);
    }

    #[rstest]
    fn test_map_values_never_mutates() {
        let collection = Collection::from(record! { "one" => 1, "two" => 2 });

        assert_eq!(map_values(&collection, |value| number(value) + 1.0), values![2, 3]);
        assert_eq!(collection, Collection::from(record! { "one" => 1, "two" => 2 }));
    }

    #[rstest]
    #[case(Some(Value::from(0)), 6.0)]
    #[case(Some(Value::from(10)), 16.0)]
    #[case(None, 6.0)]
    fn test_reduce_sums(#[case] seed: Option<Value>, #[case] expected: f64) {
        let collection = Collection::from(values![1, 2, 3]);
        assert_eq!(reduce(&collection, add, seed), Value::from(expected));
    }

    #[rstest]
    fn test_reduce_without_seed_skips_first_element() {
        let collection = Collection::from(values!["a", "b", "c"]);
        let mut calls = 0;

        let joined = reduce(
            &collection,
            |memo, value| {
                calls += 1;
                Value::from(format!("{memo}{value}"))
            },
            None,
        );

        assert_eq!(joined, Value::from("abc"));
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_reduce_empty_without_seed_is_undefined() {
        let collection = Collection::from(values![]);
        assert_eq!(reduce(&collection, add, None), Value::Undefined);
        assert_eq!(reduce_right(&collection, add, None), Value::Undefined);
    }

    #[rstest]
    fn test_reduce_over_mapping() {
        let collection = Collection::from(record! { "a" => 1, "b" => 2, "c" => 3 });
        assert_eq!(reduce(&collection, add, Some(Value::from(0))), Value::from(6));
    }

    #[rstest]
    fn test_reduce_right_folds_from_the_end() {
        let collection = Collection::from(values!["a", "b", "c"]);
        let concat = |memo: Value, value: &Value| Value::from(format!("{memo}{value}"));

        assert_eq!(reduce_right(&collection, concat, None), Value::from("cba"));
        assert_eq!(
            reduce_right(&collection, concat, Some(Value::from(">"))),
            Value::from(">cba")
        );
    }

    #[rstest]
    fn test_reduce_right_over_mapping_reverses_insertion_order() {
        let collection = Collection::from(record! { "x" => "1", "y" => "2", "z" => "3" });
        let concat = |memo: Value, value: &Value| Value::from(format!("{memo}{value}"));

        assert_eq!(
            reduce_right(&collection, concat, Some(Value::from(""))),
            Value::from("321")
        );
    }

    #[rstest]
    fn test_typed_folds() {
        let collection = Collection::from(values![1, 2, 3]);

        let left = fold_left(&collection, String::new(), |accumulator, value| {
            format!("{accumulator}{value}")
        });
        let right = fold_right(&collection, String::new(), |value, accumulator| {
            format!("{accumulator}{value}")
        });

        assert_eq!(left, "123");
        assert_eq!(right, "321");
    }

    #[rstest]
    fn test_find_short_circuits() {
        let collection = Collection::from(values![1, 2, 3, 4, 5, 6]);
        let mut visited = 0;

        let found = find(&collection, |value| {
            visited += 1;
            is_even(value)
        });

        assert_eq!(found, Some(Value::from(2)));
        assert_eq!(visited, 2);
    }

    #[rstest]
    fn test_find_without_match_is_none() {
        let collection = Collection::from(record! { "a" => 1, "b" => 3 });
        assert_eq!(find(&collection, is_even), None);
    }

    #[rstest]
    fn test_filter_and_reject_are_complements() {
        let collection = Collection::from(values![1, 2, 3, 4, 5, 6]);

        assert_eq!(filter(&collection, is_even), values![2, 4, 6]);
        assert_eq!(reject(&collection, is_even), values![1, 3, 5]);
    }

    #[rstest]
    fn test_filter_over_mapping() {
        let collection = Collection::from(record! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 });
        assert_eq!(filter(&collection, is_even), values![2, 4]);
    }

    #[rstest]
    fn test_every() {
        assert!(every(&Collection::from(values![1, 2, 3, 4]), |value| number(value) < 5.0));
        assert!(!every(&Collection::from(values![1, 2, 3, 4, 5]), |value| number(value) < 5.0));
        assert!(every(&Collection::from(values![]), |_| false));
        assert!(!every(&Collection::from(values![true, 1, Value::Null, "yes"]), truthy));
    }

    #[rstest]
    fn test_some() {
        assert!(some(&Collection::from(values![Value::Null, 0, "yes", false]), truthy));
        assert!(!some(&Collection::from(values![Value::Null, 0, "", false]), truthy));
        assert!(!some(&Collection::from(values![]), truthy));
        assert!(some(&Collection::from(record! { "a" => 1, "b" => 2 }), is_even));
    }

    #[rstest]
    fn test_contains_uses_strict_equality() {
        let shared = Value::from(values![1]);
        let collection = Collection::from(vec![Value::from(3), shared.clone()]);

        assert!(contains(&collection, &Value::from(3)));
        assert!(!contains(&collection, &Value::from("3")));
        assert!(!contains(&collection, &Value::from(4)));
        assert!(contains(&collection, &shared));
        assert!(!contains(&collection, &Value::from(values![1])));
    }

    #[rstest]
    fn test_contains_over_mapping() {
        let collection = Collection::from(record! { "a" => 1, "b" => 2 });
        assert!(contains(&collection, &Value::from(2)));
        assert!(!contains(&collection, &Value::from("a")));
    }

    #[derive(Debug, PartialEq)]
    struct Boom(usize);

    #[rstest]
    fn test_try_each_returns_caller_error_unchanged() {
        let collection = Collection::from(values![1, 2, 3]);

        let result = try_each(&collection, |entry| match entry.key {
            Key::Index(index) if index == 1 => Err(Boom(index)),
            _ => Ok(()),
        });

        assert_eq!(result, Err(Boom(1)));
    }

    #[rstest]
    fn test_try_map_failure_leaves_mapping_untouched() {
        let original = Collection::from(record! { "a" => 1, "b" => 2 });
        let mut collection = original.clone();

        let result = try_map(&mut collection, |value| {
            if is_even(value) { Err(Boom(2)) } else { Ok(value.clone()) }
        });

        assert_eq!(result, Err(Boom(2)));
        assert_eq!(collection, original);
    }

    #[rstest]
    fn test_try_map_success_matches_map() {
        let mut collection = Collection::from(record! { "a" => 1, "b" => 2 });

        let result = try_map(&mut collection, |value| Ok::<f64, Boom>(number(value) * 10.0));

        let expected = Collection::from(record! { "a" => 10, "b" => 20 });
        assert_eq!(result, Ok(expected.clone()));
        assert_eq!(collection, expected);
    }

    #[rstest]
    fn test_try_reduce_find_and_filter() {
        let collection = Collection::from(values![1, 2, 3]);

        assert_eq!(
            try_reduce(&collection, |memo, value| Ok::<Value, Boom>(add(memo, value)), None),
            Ok(Value::from(6))
        );
        assert_eq!(
            try_reduce(&collection, |_, _| Err(Boom(0)), Some(Value::from(0))),
            Err(Boom(0))
        );
        assert_eq!(
            try_find(&collection, |value| Ok::<bool, Boom>(is_even(value))),
            Ok(Some(Value::from(2)))
        );
        assert_eq!(
            try_filter(&collection, |value| {
                if number(value) > 2.0 { Err(Boom(3)) } else { Ok(true) }
            }),
            Err(Boom(3))
        );
    }
}
