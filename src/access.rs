//! Positional access across container kinds.
//!
//! [`Container`] is an explicit tagged union of the container kinds that
//! support positional lookup. [`get`] resolves the index with one handler
//! per kind instead of inspecting the container at runtime.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use bagwise::access::{get, Container};
//!
//! let values = vec!["a", "b", "c"];
//! assert_eq!(get(Container::from(&values), 2), Ok("c"));
//!
//! let map = BTreeMap::from([(1, "one"), (2, "two")]);
//! assert_eq!(get(Container::entries(&map), 1), Ok((2, "two")));
//! ```

use std::collections::VecDeque;
use std::fmt;

use crate::error::{CollectionError, Result};
use crate::sequence::{Sequence, require};

/// A container that supports lookup by position.
pub enum Container<'a, T> {
    /// Contiguous storage; O(1) lookup.
    Slice(&'a [T]),
    /// Ring buffer; O(1) lookup.
    Deque(&'a VecDeque<T>),
    /// Any other enumeration; walked up to the requested position.
    Iter(Box<dyn Iterator<Item = T> + 'a>),
}

impl<'a, K: Clone + 'a, V: Clone + 'a> Container<'a, (K, V)> {
    /// Enumerates the entries of a map (or any `(&K, &V)` source) in its
    /// iteration order.
    pub fn entries<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (&'a K, &'a V)>,
        M::IntoIter: 'a,
    {
        Self::Iter(Box::new(
            map.into_iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        ))
    }
}

impl<'a, T> From<&'a [T]> for Container<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::Slice(slice)
    }
}

impl<'a, T> From<&'a Vec<T>> for Container<'a, T> {
    fn from(vector: &'a Vec<T>) -> Self {
        Self::Slice(vector)
    }
}

impl<'a, T> From<&'a VecDeque<T>> for Container<'a, T> {
    fn from(deque: &'a VecDeque<T>) -> Self {
        Self::Deque(deque)
    }
}

impl<T> fmt::Debug for Container<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slice(slice) => write!(formatter, "Container::Slice(len = {})", slice.len()),
            Self::Deque(deque) => write!(formatter, "Container::Deque(len = {})", deque.len()),
            Self::Iter(_) => formatter.write_str("Container::Iter(..)"),
        }
    }
}

/// Returns a clone of the element at `index`.
///
/// # Errors
///
/// Returns [`CollectionError::IndexOutOfRange`] if `index` is past the end.
/// For [`Container::Iter`] the reported length is the number of elements
/// the iterator produced.
pub fn get<T: Clone>(container: Container<'_, T>, index: usize) -> Result<T> {
    match container {
        Container::Slice(slice) => slice
            .get(index)
            .cloned()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: slice.len(),
            }),
        Container::Deque(deque) => deque
            .get(index)
            .cloned()
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: deque.len(),
            }),
        Container::Iter(iterator) => {
            let mut seen = 0;
            for element in iterator {
                if seen == index {
                    return Ok(element);
                }
                seen += 1;
            }
            Err(CollectionError::IndexOutOfRange { index, len: seen })
        }
    }
}

/// Returns the only element of `sequence`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if `sequence` is absent or
/// does not hold exactly one element.
///
/// # Examples
///
/// ```rust
/// use bagwise::access::extract_singleton;
///
/// assert_eq!(extract_singleton(&["only"]), Ok("only"));
/// assert!(extract_singleton(&[1, 2]).is_err());
/// ```
pub fn extract_singleton<T, S>(sequence: &S) -> Result<T>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    match require(sequence, "extract_singleton", "sequence")? {
        [only] => Ok(only.clone()),
        _ => Err(CollectionError::missing("extract_singleton", "sequence")),
    }
}
