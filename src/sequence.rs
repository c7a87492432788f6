//! Operand abstraction for the collection algebra.
//!
//! The algebra needs finite, revisitable input that it may walk more than
//! once. [`Sequence`] exposes any such input as a slice, and encodes an
//! *absent* operand as `None` rather than as an empty slice: `Option<S>`
//! implements `Sequence` too, so a missing argument can be passed through
//! and is reported as [`CollectionError::InvalidArgument`] instead of being
//! mistaken for empty input.
//!
//! # Examples
//!
//! ```rust
//! use bagwise::Sequence;
//!
//! let present = vec![1, 2, 3];
//! let absent: Option<Vec<i32>> = None;
//!
//! assert_eq!(present.elements(), Some(&[1, 2, 3][..]));
//! assert_eq!(absent.elements(), None);
//! ```

use crate::error::{CollectionError, Result};

/// A finite, revisitable sequence of elements that may be absent.
pub trait Sequence<T> {
    /// Returns the elements as a slice, or `None` if the operand is absent.
    fn elements(&self) -> Option<&[T]>;

    /// Returns the number of elements, treating an absent operand as empty.
    fn size(&self) -> usize {
        self.elements().map_or(0, <[T]>::len)
    }
}

impl<T> Sequence<T> for [T] {
    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> Sequence<T> for Box<[T]> {
    #[inline]
    fn elements(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, S: Sequence<T> + ?Sized> Sequence<T> for &S {
    #[inline]
    fn elements(&self) -> Option<&[T]> {
        (**self).elements()
    }
}

impl<T, S: Sequence<T>> Sequence<T> for Option<S> {
    #[inline]
    fn elements(&self) -> Option<&[T]> {
        self.as_ref().and_then(Sequence::elements)
    }
}

/// Resolves an operand that the contract requires to be present.
pub(crate) fn require<'s, T, S>(
    sequence: &'s S,
    operation: &'static str,
    argument: &'static str,
) -> Result<&'s [T]>
where
    S: Sequence<T> + ?Sized,
{
    sequence
        .elements()
        .ok_or(CollectionError::missing(operation, argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_operand_is_rejected() {
        let absent: Option<Vec<i32>> = None;
        let error = require(&absent, "union", "a").unwrap_err();
        assert_eq!(error, CollectionError::missing("union", "a"));
    }

    #[test]
    fn test_empty_operand_is_present() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(require(&empty, "union", "a"), Ok(&[][..]));
    }

    #[test]
    fn test_size_of_absent_is_zero() {
        let absent: Option<[u8; 2]> = None;
        assert_eq!(absent.size(), 0);
        assert_eq!(Some([1u8, 2]).size(), 2);
    }
}
