//! # lambars-collections
//!
//! Shape-agnostic collection utilities over sequences and keyed mappings of
//! dynamic values.
//!
//! ## Overview
//!
//! Every operation accepts a [`Collection`]: either an ordered sequence or an
//! insertion-ordered mapping of [`Value`]s. Operations traverse both shapes
//! the same way, so one `group_by` or `filter` serves records and lists alike.
//!
//! - **Traversal**: `each`, `map`, `reduce`, `find`, `filter`, `every`, ...
//! - **Query**: `where_matching`, `pluck`, `group_by`, `index_by`, `count_by`
//! - **Order**: `max`, `min`, `sort_by`
//! - **Set algebra**: `union`, `intersection`, `difference`, `uniq`
//! - **Sequences**: `first`, `rest`, `flatten`, `zip`, `invoke`, `shuffle`
//!
//! ## Feature Flags
//!
//! - `query`: property matching and re-keying
//! - `order`: `max`, `min` and stable sorting (pulls in `query`)
//! - `set`: set algebra under strict equality
//! - `sequence`: positional helpers, `zip` and `invoke` (pulls in `order` and `set`)
//! - `random`: `shuffle` and `sample`, backed by `rand`
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`Mapping`]
//! - `fxhash`: faster hashing for mapping key lookup
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_collections::prelude::*;
//! use lambars_collections::{record, values};
//!
//! let stooges = Collection::from(vec![
//!     Value::from(record! { "name" => "moe", "age" => 40 }),
//!     Value::from(record! { "name" => "larry", "age" => 50 }),
//!     Value::from(record! { "name" => "curly", "age" => 60 }),
//! ]);
//!
//! assert_eq!(pluck(&stooges, "name"), values!["moe", "larry", "curly"]);
//! assert_eq!(
//!     max(&stooges, property("age")).map(|stooge| stooge.property("name")),
//!     Some(Value::from("curly"))
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types and every enabled operation.
///
/// # Usage
///
/// ```rust
/// use lambars_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;
    pub use crate::traversal::*;
    pub use crate::value::{Mapping, Value};
    pub use crate::view::{Collection, Entry, Key, Shape};

    #[cfg(feature = "query")]
    pub use crate::query::*;

    #[cfg(feature = "order")]
    pub use crate::order::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "sequence")]
    pub use crate::invoke::*;
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;
}

pub mod error;
pub mod traversal;
mod value;
pub mod view;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "order")]
pub mod order;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "sequence")]
pub mod invoke;
#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "random")]
pub mod random;

pub use error::CollectionError;
pub use traversal::{
    contains, each, every, filter, find, fold_left, fold_right, identity, map, map_values,
    reduce, reduce_right, reject, some, truthy, try_each, try_filter, try_find, try_map,
    try_reduce,
};
pub use value::{Mapping, Value};
pub use view::{Collection, Entries, Entry, Key, Shape};

#[cfg(feature = "query")]
pub use query::{
    count_by, find_where, group_by, index_by, matches, partition, pluck, property,
    where_matching,
};

#[cfg(feature = "order")]
pub use order::{max, min, min_value, sort, sort_by};

#[cfg(feature = "set")]
pub use set::{difference, intersection, union, uniq, uniq_by, without};

#[cfg(feature = "sequence")]
pub use invoke::invoke;
#[cfg(feature = "sequence")]
pub use sequence::{
    compact, first, first_n, flatten, initial, initial_n, last, last_n, rest, rest_from, size,
    to_array, zip,
};

#[cfg(feature = "random")]
pub use random::{sample, sample_one, sample_one_with, sample_with, shuffle, shuffle_with};
