//! Predicate matching and re-keying.
//!
//! Grouping operations key their output [`Mapping`] by the **stringified**
//! criterion result (see [`Value`]'s `Display`). Criterion results that
//! stringify identically share a key, so the number `40` and the text `"40"`
//! land in the same group.
//!
//! # Examples
//!
//! ```rust
//! use lambars_collections::{Collection, Value, group_by, property, values};
//!
//! let words = Collection::from(values!["one", "two", "three"]);
//! let by_length = group_by(&words, property("length"));
//!
//! assert_eq!(by_length.get("3"), Some(&Value::from(values!["one", "two"])));
//! assert_eq!(by_length.get("5"), Some(&Value::from(values!["three"])));
//! ```

use crate::traversal::{filter, find};
use crate::value::{Mapping, Value};
use crate::view::Collection;
use std::rc::Rc;

/// Builds a criterion that looks up the property `name` on each value.
///
/// See [`Value::property`] for the lookup rules.
pub fn property(name: &str) -> impl Fn(&Value) -> Value + '_ {
    move |value: &Value| value.property(name)
}

/// Builds a predicate that is `true` for values whose properties strictly
/// equal every pair in `properties`.
///
/// An empty `properties` matches every value.
pub fn matches(properties: &Mapping) -> impl Fn(&Value) -> bool + '_ {
    move |value: &Value| {
        properties
            .iter()
            .all(|(name, expected)| value.property(name).strict_equals(expected))
    }
}

/// Returns every value matching all of `properties`, in traversal order.
///
/// ```rust
/// use lambars_collections::{Collection, Value, record, where_matching};
///
/// let plays = Collection::from(vec![
///     Value::from(record! { "title" => "Cymbeline", "author" => "Shakespeare", "year" => 1611 }),
///     Value::from(record! { "title" => "The Tempest", "author" => "Shakespeare", "year" => 1611 }),
///     Value::from(record! { "title" => "Hamlet", "author" => "Shakespeare", "year" => 1603 }),
/// ]);
///
/// let matched = where_matching(&plays, &record! { "author" => "Shakespeare", "year" => 1611 });
/// assert_eq!(matched.len(), 2);
/// ```
pub fn where_matching(collection: &Collection, properties: &Mapping) -> Vec<Value> {
    filter(collection, matches(properties))
}

/// Returns the first value matching all of `properties`, if any.
pub fn find_where(collection: &Collection, properties: &Mapping) -> Option<Value> {
    find(collection, matches(properties))
}

/// Extracts the property `name` from every value; missing properties yield
/// [`Value::Undefined`] so positions line up with the input.
pub fn pluck(collection: &Collection, name: &str) -> Vec<Value> {
    collection.values().map(property(name)).collect()
}

/// Groups values by their stringified criterion result.
///
/// Keys appear in first-seen order; each group is a sequence in traversal
/// order.
pub fn group_by<F, K>(collection: &Collection, mut criterion: F) -> Mapping
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    let mut groups = Mapping::new();
    for value in collection.values() {
        let key = stringify(criterion(value));
        match groups.get_mut(&key) {
            Some(Value::Sequence(members)) => Rc::make_mut(members).push(value.clone()),
            _ => {
                groups.insert(key, vec![value.clone()]);
            }
        }
    }
    groups
}

/// Indexes values by their stringified criterion result.
///
/// Later values overwrite earlier ones with the same key; the key keeps the
/// position where it was first seen.
///
/// ```rust
/// use lambars_collections::{Collection, Value, index_by, property, record};
///
/// let stooges = Collection::from(vec![
///     Value::from(record! { "name" => "moe", "age" => 40 }),
///     Value::from(record! { "name" => "larry", "age" => 50 }),
/// ]);
/// let by_age = index_by(&stooges, property("age"));
///
/// assert_eq!(by_age.keys().collect::<Vec<_>>(), vec!["40", "50"]);
/// assert_eq!(by_age.get("50").map(|stooge| stooge.property("name")), Some(Value::from("larry")));
/// ```
pub fn index_by<F, K>(collection: &Collection, mut criterion: F) -> Mapping
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    let mut index = Mapping::with_capacity(collection.len());
    for value in collection.values() {
        index.insert(stringify(criterion(value)), value.clone());
    }
    index
}

/// Counts values per stringified criterion result, in first-seen key order.
pub fn count_by<F, K>(collection: &Collection, mut criterion: F) -> Mapping
where
    F: FnMut(&Value) -> K,
    K: Into<Value>,
{
    let mut counts = Mapping::new();
    for value in collection.values() {
        let key = stringify(criterion(value));
        match counts.get_mut(&key) {
            Some(Value::Number(count)) => *count += 1.0,
            _ => {
                counts.insert(key, 1);
            }
        }
    }
    counts
}

/// Splits values into `(matching, non_matching)`, each in traversal order.
pub fn partition<F>(collection: &Collection, mut predicate: F) -> (Vec<Value>, Vec<Value>)
where
    F: FnMut(&Value) -> bool,
{
    collection
        .values()
        .cloned()
        .partition(|value| predicate(value))
}

fn stringify<K: Into<Value>>(key: K) -> String {
    key.into().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, values};
    use rstest::rstest;

    fn stooges() -> Collection {
        Collection::from(vec![
            Value::from(record! { "name" => "moe", "age" => 40 }),
            Value::from(record! { "name" => "larry", "age" => 50 }),
            Value::from(record! { "name" => "curly", "age" => 60 }),
        ])
    }

    fn plays() -> Collection {
        Collection::from(vec![
            Value::from(record! { "title" => "Cymbeline", "author" => "Shakespeare", "year" => 1611 }),
            Value::from(record! { "title" => "The Tempest", "author" => "Shakespeare", "year" => 1611 }),
            Value::from(record! { "title" => "The Tempest", "author" => "Shakespeare", "year" => 1644 }),
        ])
    }

    fn is_odd(value: &Value) -> bool {
        value.as_number().is_some_and(|number| number % 2.0 != 0.0)
    }

    #[rstest]
    fn test_where_matching_selects_all_pairs() {
        let matched = where_matching(&plays(), &record! { "author" => "Shakespeare", "year" => 1611 });

        assert_eq!(
            pluck(&Collection::from(matched), "title"),
            values!["Cymbeline", "The Tempest"]
        );
    }

    #[rstest]
    fn test_where_matching_with_no_properties_matches_everything() {
        let collection = Collection::from(values![1, "two", Value::Null]);
        assert_eq!(where_matching(&collection, &Mapping::new()), values![1, "two", Value::Null]);
    }

    #[rstest]
    fn test_where_matching_is_strict() {
        let collection = Collection::from(vec![Value::from(record! { "id" => "1" })]);
        assert!(where_matching(&collection, &record! { "id" => 1 }).is_empty());
    }

    #[rstest]
    fn test_find_where_returns_first_match() {
        let found = find_where(&plays(), &record! { "year" => 1611 });
        assert_eq!(
            found.map(|play| play.property("title")),
            Some(Value::from("Cymbeline"))
        );
    }

    #[rstest]
    fn test_find_where_without_match_or_on_empty() {
        assert_eq!(find_where(&plays(), &record! { "year" => 2000 }), None);
        assert_eq!(
            find_where(&Collection::from(values![]), &record! { "year" => 1611 }),
            None
        );
    }

    #[rstest]
    fn test_pluck_names() {
        assert_eq!(pluck(&stooges(), "name"), values!["moe", "larry", "curly"]);
    }

    #[rstest]
    fn test_pluck_missing_property_yields_undefined() {
        let collection = Collection::from(vec![
            Value::from(record! { "name" => "moe" }),
            Value::from(record! { "age" => 50 }),
            Value::from(7),
        ]);
        assert_eq!(
            pluck(&collection, "name"),
            vec![Value::from("moe"), Value::Undefined, Value::Undefined]
        );
    }

    #[rstest]
    fn test_group_by_floor() {
        let collection = Collection::from(values![1.3, 2.1, 2.4]);
        let groups = group_by(&collection, |value| value.as_number().map(f64::floor));

        assert_eq!(
            groups,
            record! { "1" => values![1.3], "2" => values![2.1, 2.4] }
        );
    }

    #[rstest]
    fn test_group_by_keys_collide_after_stringification() {
        let collection = Collection::from(values![40, "40"]);
        let groups = group_by(&collection, |value: &Value| value.clone());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("40"), Some(&Value::from(values![40, "40"])));
    }

    #[rstest]
    fn test_group_by_over_mapping_keeps_first_seen_order() {
        let collection = Collection::from(record! { "a" => 3, "b" => 2, "c" => 1, "d" => 4 });
        let groups = group_by(&collection, |value| if is_odd(value) { "odd" } else { "even" });

        assert_eq!(groups, record! { "odd" => values![3, 1], "even" => values![2, 4] });
    }

    #[rstest]
    fn test_index_by_later_duplicates_overwrite() {
        let collection = Collection::from(vec![
            Value::from(record! { "name" => "moe", "age" => 60 }),
            Value::from(record! { "name" => "larry", "age" => 50 }),
            Value::from(record! { "name" => "shemp", "age" => 60 }),
        ]);
        let index = index_by(&collection, property("age"));

        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["60", "50"]);
        assert_eq!(
            index.get("60").map(|stooge| stooge.property("name")),
            Some(Value::from("shemp"))
        );
    }

    #[rstest]
    fn test_count_by_parity() {
        let collection = Collection::from(values![1, 2, 3, 4, 5]);
        let counts = count_by(&collection, |value| if is_odd(value) { "odd" } else { "even" });

        assert_eq!(counts, record! { "odd" => 3, "even" => 2 });
    }

    #[rstest]
    fn test_count_by_empty() {
        assert!(count_by(&Collection::from(values![]), |_| "any").is_empty());
    }

    #[rstest]
    fn test_partition_splits_in_order() {
        let collection = Collection::from(values![0, 1, 2, 3, 4, 5]);
        let (odd, even) = partition(&collection, is_odd);

        assert_eq!(odd, values![1, 3, 5]);
        assert_eq!(even, values![0, 2, 4]);
    }

    #[rstest]
    fn test_partition_over_mapping() {
        let collection = Collection::from(record! { "a" => 1, "b" => 2 });
        let (odd, even) = partition(&collection, is_odd);

        assert_eq!(odd, values![1]);
        assert_eq!(even, values![2]);
    }
}
