//! Error types for collection operations.
//!
//! Most operations are infallible by construction: the shape of their input is
//! fixed by the type system. [`CollectionError`] covers the places where a
//! dynamic [`Value`](crate::Value) has to be checked at run time.
//!
//! Failures raised by caller-supplied closures are not wrapped here. A panic
//! unwinds through the operation unchanged, and the `try_*` traversal variants
//! hand the caller's own error back as-is.

use thiserror::Error;

/// Errors raised by collection operations.
///
/// # Examples
///
/// ```rust
/// use lambars_collections::{Collection, CollectionError, Value};
///
/// let error = Collection::try_from(Value::from(42)).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "collection: expected a sequence or mapping, found number"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The input was not of the shape the operation requires.
    #[error("{operation}: expected {expected}, found {found}")]
    Shape {
        /// The operation that rejected the input.
        operation: String,
        /// A description of the accepted shapes.
        expected: &'static str,
        /// The kind of value that was supplied.
        found: &'static str,
    },

    /// The named operation has no implementation.
    #[error("{operation} is not implemented")]
    Unimplemented {
        /// The name that was requested.
        operation: String,
    },
}

impl CollectionError {
    /// Creates a [`CollectionError::Shape`].
    pub fn shape(operation: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::Shape {
            operation: operation.into(),
            expected,
            found,
        }
    }

    /// Creates a [`CollectionError::Unimplemented`].
    pub fn unimplemented(operation: impl Into<String>) -> Self {
        Self::Unimplemented {
            operation: operation.into(),
        }
    }

    /// Returns `true` for [`CollectionError::Unimplemented`].
    pub const fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented { .. })
    }
}
