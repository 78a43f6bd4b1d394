//! Calling a named method on every element.
//!
//! [`invoke`] looks a method up by name and applies it to each value of a
//! collection, forwarding the same arguments every time. The method table:
//!
//! | method | applies to | arguments | result |
//! |---|---|---|---|
//! | `sort` | sequence | | elements ordered by their stringified form, undefined last |
//! | `reverse` | sequence | | elements in reverse order |
//! | `join` | sequence | separator (default `","`) | text |
//! | `concat` | sequence, text | values to append | sequence (sequence arguments are spread) or text |
//! | `indexOf` | sequence, text | needle | first position or `-1` |
//! | `includes` | sequence, text | needle | boolean |
//! | `slice` | sequence, text | start, end (negative counts from the end) | sequence or text |
//! | `toUpperCase`, `toLowerCase`, `trim` | text | | text |
//! | `toString` | any defined value | | text |
//! | `keys`, `values` | mapping | | sequence |
//! | `compact` | sequence | | sequence without falsy values |
//! | `flatten` | sequence | shallow flag | flattened sequence |
//! | `uniq` | sequence | sorted flag | sequence without duplicates |
//!
//! Undefined and null elements have no methods.

use crate::error::CollectionError;
use crate::order::stable_sort;
use crate::sequence::{compact, flatten};
use crate::set::uniq;
use crate::value::Value;
use crate::view::Collection;

/// Applies the method called `name` to every value of `collection` and
/// collects the results in traversal order.
///
/// # Errors
///
/// - [`CollectionError::Unimplemented`] if no method is called `name`.
/// - [`CollectionError::Shape`] for the first value the method does not apply
///   to.
///
/// ```rust
/// use lambars_collections::{Collection, Value, invoke, values};
///
/// let nested = Collection::from(values![values![5, 1, 7], values![3, 2, 1]]);
/// assert_eq!(
///     invoke(&nested, "sort", &[]),
///     Ok(values![values![1, 5, 7], values![1, 2, 3]])
/// );
///
/// let words = Collection::from(values!["a", "b"]);
/// assert!(invoke(&words, "shout", &[]).is_err_and(|error| error.is_unimplemented()));
/// ```
pub fn invoke(
    collection: &Collection,
    name: &str,
    arguments: &[Value],
) -> Result<Vec<Value>, CollectionError> {
    let Some(method) = Method::parse(name) else {
        tracing::debug!(method = name, "no such method to invoke");
        return Err(CollectionError::unimplemented(format!("invoke({name})")));
    };
    tracing::trace!(
        method = name,
        elements = collection.len(),
        arguments = arguments.len(),
        "invoking method on every element"
    );

    collection
        .values()
        .map(|value| {
            method.apply(value, arguments).ok_or_else(|| {
                CollectionError::shape(format!("invoke({name})"), method.expected(), value.kind_name())
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Sort,
    Reverse,
    Join,
    Concat,
    IndexOf,
    Includes,
    Slice,
    ToUpperCase,
    ToLowerCase,
    Trim,
    ToString,
    Keys,
    Values,
    Compact,
    Flatten,
    Uniq,
}

impl Method {
    fn parse(name: &str) -> Option<Self> {
        let method = match name {
            "sort" => Self::Sort,
            "reverse" => Self::Reverse,
            "join" => Self::Join,
            "concat" => Self::Concat,
            "indexOf" => Self::IndexOf,
            "includes" => Self::Includes,
            "slice" => Self::Slice,
            "toUpperCase" => Self::ToUpperCase,
            "toLowerCase" => Self::ToLowerCase,
            "trim" => Self::Trim,
            "toString" => Self::ToString,
            "keys" => Self::Keys,
            "values" => Self::Values,
            "compact" => Self::Compact,
            "flatten" => Self::Flatten,
            "uniq" => Self::Uniq,
            _ => return None,
        };
        Some(method)
    }

    const fn expected(self) -> &'static str {
        match self {
            Self::Sort | Self::Reverse | Self::Join | Self::Compact | Self::Flatten | Self::Uniq => {
                "sequence"
            }
            Self::Concat | Self::IndexOf | Self::Includes | Self::Slice => "sequence or text",
            Self::ToUpperCase | Self::ToLowerCase | Self::Trim => "text",
            Self::Keys | Self::Values => "mapping",
            Self::ToString => "a defined value",
        }
    }

    /// `None` when the method does not apply to `value`.
    fn apply(self, value: &Value, arguments: &[Value]) -> Option<Value> {
        let result = match (self, value) {
            (_, Value::Undefined | Value::Null) => return None,
            (Self::ToString, other) => Value::from(other.to_string()),

            (Self::Sort, Value::Sequence(elements)) => Value::from(sort_stringified(elements)),
            (Self::Reverse, Value::Sequence(elements)) => elements.iter().rev().cloned().collect(),
            (Self::Join, Value::Sequence(elements)) => {
                let separator = match argument(arguments, 0) {
                    Value::Undefined => ",".to_owned(),
                    other => other.to_string(),
                };
                let parts: Vec<String> = elements.iter().map(join_part).collect();
                Value::from(parts.join(&separator))
            }
            (Self::Concat, Value::Sequence(elements)) => {
                let mut joined = elements.to_vec();
                for extra in arguments {
                    match extra {
                        Value::Sequence(more) => joined.extend(more.iter().cloned()),
                        other => joined.push(other.clone()),
                    }
                }
                Value::from(joined)
            }
            (Self::Concat, Value::Text(text)) => {
                let mut joined = text.clone();
                for extra in arguments {
                    joined.push_str(&extra.to_string());
                }
                Value::from(joined)
            }
            (Self::IndexOf, Value::Sequence(elements)) => {
                let needle = argument(arguments, 0);
                elements
                    .iter()
                    .position(|element| element.strict_equals(&needle))
                    .map_or(Value::from(-1), Value::from)
            }
            (Self::IndexOf, Value::Text(text)) => {
                let needle = argument(arguments, 0).to_string();
                text.find(&needle)
                    .map_or(Value::from(-1), |byte| Value::from(text[..byte].chars().count()))
            }
            (Self::Includes, Value::Sequence(elements)) => {
                let needle = argument(arguments, 0);
                Value::from(elements.iter().any(|element| same_value_zero(element, &needle)))
            }
            (Self::Includes, Value::Text(text)) => {
                Value::from(text.contains(&argument(arguments, 0).to_string()))
            }
            (Self::Slice, Value::Sequence(elements)) => {
                let (start, end) = slice_bounds(arguments, elements.len());
                Value::from(elements[start..end].to_vec())
            }
            (Self::Slice, Value::Text(text)) => {
                let (start, end) = slice_bounds(arguments, text.chars().count());
                Value::from(text.chars().skip(start).take(end - start).collect::<String>())
            }
            (Self::ToUpperCase, Value::Text(text)) => Value::from(text.to_uppercase()),
            (Self::ToLowerCase, Value::Text(text)) => Value::from(text.to_lowercase()),
            (Self::Trim, Value::Text(text)) => Value::from(text.trim()),
            (Self::Keys, Value::Mapping(mapping)) => mapping.keys().map(Value::from).collect(),
            (Self::Values, Value::Mapping(mapping)) => mapping.values().cloned().collect(),
            (Self::Compact, Value::Sequence(elements)) => Value::from(compact(elements)),
            (Self::Flatten, Value::Sequence(elements)) => {
                Value::from(flatten(elements, argument(arguments, 0).is_truthy()))
            }
            (Self::Uniq, Value::Sequence(elements)) => {
                let collection = Collection::from(elements.to_vec());
                Value::from(uniq(&collection, argument(arguments, 0).is_truthy()))
            }
            _ => return None,
        };
        Some(result)
    }
}

fn argument(arguments: &[Value], index: usize) -> Value {
    arguments.get(index).cloned().unwrap_or_default()
}

fn sort_stringified(elements: &[Value]) -> Vec<Value> {
    let (defined, undefined): (Vec<Value>, Vec<Value>) =
        elements.iter().cloned().partition(|element| !element.is_undefined());
    let mut sorted = stable_sort(defined, |element: &Value| element.to_string());
    sorted.extend(undefined);
    sorted
}

fn join_part(element: &Value) -> String {
    match element {
        Value::Undefined | Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Strict equality, except that `NaN` is found by `NaN`.
fn same_value_zero(left: &Value, right: &Value) -> bool {
    let both_nan = matches!(
        (left, right),
        (Value::Number(left), Value::Number(right)) if left.is_nan() && right.is_nan()
    );
    both_nan || left.strict_equals(right)
}

fn slice_bounds(arguments: &[Value], length: usize) -> (usize, usize) {
    let start = slice_bound(&argument(arguments, 0), length, 0);
    let end = slice_bound(&argument(arguments, 1), length, length);
    (start, end.max(start))
}

/// Resolves a slice position: negative counts back from `length`, anything
/// out of range is clamped and a non-number means position zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn slice_bound(position: &Value, length: usize, default: usize) -> usize {
    if position.is_undefined() {
        return default;
    }
    let position = position
        .as_number()
        .filter(|number| !number.is_nan())
        .unwrap_or(0.0)
        .trunc();
    let magnitude = position.abs().min(length as f64) as usize;
    if position < 0.0 {
        length - magnitude
    } else {
        magnitude
    }
}
