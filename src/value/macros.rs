//! Construction macros for values and records.

/// Builds a `Vec<Value>`, converting every element with `Value::from`.
///
/// Nested `values!` calls become nested sequences once converted.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::{Value, values};
///
/// let nested = values![1, "two", values![3, 4]];
/// assert_eq!(nested.len(), 3);
/// assert_eq!(nested[1], Value::from("two"));
/// assert_eq!(nested[2], Value::from(values![3, 4]));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($element)),+]
    };
}

/// Builds a [`Mapping`](crate::Mapping) from `key => value` pairs, in order.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::{Value, record};
///
/// let stooge = record! { "name" => "moe", "age" => 40 };
/// assert_eq!(stooge.get("age"), Some(&Value::from(40)));
/// assert_eq!(stooge.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key, $crate::Value::from($value));
        )+
        mapping
    }};
}
