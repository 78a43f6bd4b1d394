//! Dynamic values held by collections.
//!
//! Every element of a [`Collection`](crate::Collection) is a [`Value`]. A value
//! is a scalar (undefined, null, boolean, number, text) or a nested,
//! reference-counted sequence or mapping.
//!
//! # Equality
//!
//! `Value` has two notions of equality:
//!
//! - `==` ([`PartialEq`]) is structural and recurses into nested values. It is
//!   what tests and callers usually want.
//! - [`Value::strict_equals`] is identity for nested values and value equality
//!   for scalars. Membership in the set-algebra operations, `contains`, `without`
//!   and the property matchers all use strict equality.
//!
//! ```rust
//! use lambars_collections::{Value, values};
//!
//! let left = Value::from(values![1, 2]);
//! let right = Value::from(values![1, 2]);
//!
//! assert_eq!(left, right);
//! assert!(!left.strict_equals(&right));
//! assert!(left.strict_equals(&left.clone()));
//! ```

mod macros;
mod mapping;
#[cfg(feature = "serde")]
mod serde_impl;

pub use mapping::Mapping;

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A dynamically typed element.
///
/// Nested sequences and mappings are shared through [`Rc`] and never mutated
/// after construction, so cloning a `Value` is cheap and no value can contain
/// itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent placeholder, e.g. a missing property.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A text value.
    Text(String),
    /// A nested ordered sequence.
    Sequence(Rc<Vec<Value>>),
    /// A nested keyed record.
    Mapping(Rc<Mapping>),
}

static_assertions::assert_not_impl_any!(Value: Send, Sync);

impl Value {
    /// Compares two values without coercion.
    ///
    /// Scalars compare by value (`NaN` is never equal to anything, text compares
    /// by content). Nested sequences and mappings are equal only when they are
    /// the same shared allocation.
    #[allow(clippy::float_cmp)]
    pub fn strict_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left == right,
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Sequence(left), Self::Sequence(right)) => Rc::ptr_eq(left, right),
            (Self::Mapping(left), Self::Mapping(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns `false` for `undefined`, `null`, `false`, `0`, `-0`, `NaN` and
    /// the empty text; `true` for everything else, including empty nested
    /// collections.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => !text.is_empty(),
            Self::Sequence(_) | Self::Mapping(_) => true,
        }
    }

    /// Short lowercase name of the variant, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the number, if this is a number.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the elements, if this is a nested sequence.
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    /// Returns the record, if this is a nested mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(&**mapping),
            _ => None,
        }
    }

    /// Looks up a named property.
    ///
    /// - mappings: the value stored under `name`
    /// - sequences: `length`, or the element at a decimal index
    /// - text: `length` (in characters), or the character at a decimal index
    ///
    /// Anything else, including a missing key or an out-of-range index, is
    /// [`Value::Undefined`].
    ///
    /// ```rust
    /// use lambars_collections::{Value, record, values};
    ///
    /// let stooge = Value::from(record! { "name" => "moe", "age" => 40 });
    /// assert_eq!(stooge.property("age"), Value::from(40));
    /// assert_eq!(stooge.property("height"), Value::Undefined);
    ///
    /// assert_eq!(Value::from("three").property("length"), Value::from(5));
    /// assert_eq!(Value::from(values![7, 8]).property("1"), Value::from(8));
    /// ```
    pub fn property(&self, name: &str) -> Self {
        match self {
            Self::Mapping(mapping) => mapping.get(name).cloned().unwrap_or_default(),
            Self::Sequence(elements) => {
                if name == "length" {
                    return Self::from(elements.len());
                }
                parse_index(name)
                    .and_then(|index| elements.get(index).cloned())
                    .unwrap_or_default()
            }
            Self::Text(text) => {
                if name == "length" {
                    return Self::from(text.chars().count());
                }
                parse_index(name)
                    .and_then(|index| text.chars().nth(index))
                    .map(Self::from)
                    .unwrap_or_default()
            }
            _ => Self::Undefined,
        }
    }

    /// Orders two values the way relational comparison does.
    ///
    /// Numbers, booleans and null compare numerically (`true` is 1, `null` is
    /// 0), text compares lexicographically by UTF-16 code unit. Every other
    /// pairing, and any comparison involving `NaN`, is incomparable (`None`).
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => {
                Some(left.encode_utf16().cmp(right.encode_utf16()))
            }
            _ => self.numeric()?.partial_cmp(&other.numeric()?),
        }
    }

    fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Bool(flag) => Some(f64::from(u8::from(*flag))),
            Self::Null => Some(0.0),
            _ => None,
        }
    }
}

fn parse_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// Stringifies the value; this is the key used by grouping operations.
///
/// Integral numbers print without a fractional part and `-0` prints as `0`.
/// Nested sequences print their elements joined by commas (undefined and null
/// elements print empty) and mappings print `[object Object]`.
impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => format_number(*number, formatter),
            Self::Text(text) => formatter.write_str(text),
            Self::Sequence(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    if !matches!(element, Self::Undefined | Self::Null) {
                        write!(formatter, "{element}")?;
                    }
                }
                Ok(())
            }
            Self::Mapping(_) => formatter.write_str("[object Object]"),
        }
    }
}

fn format_number(number: f64, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    if number.is_nan() {
        formatter.write_str("NaN")
    } else if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        let exponential = format!("{number:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(formatter, "{mantissa}e+{exponent}")
            }
            _ => formatter.write_str(&exponential),
        }
    } else {
        write!(formatter, "{number}")
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Number(number as f64)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::Text(character.to_string())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(Rc::new(elements))
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(Rc::new(mapping))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
