//! Error types for collection operations.
//!
//! Every fallible operation in this crate reports a [`CollectionError`].
//! The variants are contract violations or capacity conditions, so they are
//! surfaced to the caller at the point of violation and never retried.

use std::fmt;

/// Represents errors that can occur when working with collections.
///
/// # Examples
///
/// ```rust
/// use bagwise::CollectionError;
///
/// let error = CollectionError::CapacityExceeded { bound: 4 };
/// assert_eq!(
///     format!("{error}"),
///     "collection is full: cannot add beyond bound 4"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A required argument was absent, or did not satisfy the operation's contract.
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// The name of the offending argument.
        argument: &'static str,
    },
    /// A value was rejected by a validation predicate.
    InvalidElement {
        /// The operation that rejected the element.
        operation: &'static str,
    },
    /// An insertion was attempted on a bounded view already at its bound.
    CapacityExceeded {
        /// The configured maximum size.
        bound: usize,
    },
    /// A positional request fell outside the container.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of elements available.
        len: usize,
    },
}

impl CollectionError {
    pub(crate) const fn missing(operation: &'static str, argument: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            argument,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                operation,
                argument,
            } => write!(formatter, "{operation}: invalid argument `{argument}`"),
            Self::InvalidElement { operation } => write!(
                formatter,
                "{operation}: element rejected by validation predicate"
            ),
            Self::CapacityExceeded { bound } => write!(
                formatter,
                "collection is full: cannot add beyond bound {bound}"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(formatter, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = CollectionError::missing("union", "a");
        assert_eq!(format!("{error}"), "union: invalid argument `a`");
    }

    #[test]
    fn test_invalid_element_display() {
        let error = CollectionError::InvalidElement {
            operation: "PredicatedView::add",
        };
        assert_eq!(
            format!("{error}"),
            "PredicatedView::add: element rejected by validation predicate"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let error = CollectionError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(format!("{error}"), "index 7 out of range for length 3");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CollectionError::CapacityExceeded { bound: 2 },
            CollectionError::CapacityExceeded { bound: 2 }
        );
        assert_ne!(
            CollectionError::CapacityExceeded { bound: 2 },
            CollectionError::CapacityExceeded { bound: 3 }
        );
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;

        let error = CollectionError::missing("subtract", "b");
        assert!(error.source().is_none());
        let _: &dyn Error = &error;
    }
}
