//! Stable merge of two sorted sequences.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{CollectionError, Result};
use crate::sequence::{Sequence, require};

/// Merges two sequences sorted by natural order, keeping duplicates.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::collate;
///
/// let merged = collate(&["a1", "a2", "a3"], &["a4", "a5", "a6"]).unwrap();
/// assert_eq!(merged, vec!["a1", "a2", "a3", "a4", "a5", "a6"]);
/// ```
pub fn collate<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Ord,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    collate_by(a, b, Some(T::cmp), true)
}

/// Merges two sequences sorted by `comparator`.
///
/// The merge is stable: on ties, elements of `a` come before elements of
/// `b`. With `include_duplicates == false`, each run of elements that the
/// comparator reports as equal collapses to its first element.
///
/// The inputs are assumed to be sorted; unsorted input yields an
/// interleaving but no error.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent,
/// or if `comparator` is `None`.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::collate_by;
///
/// let case_insensitive = |left: &&str, right: &&str| {
///     left.to_lowercase().cmp(&right.to_lowercase())
/// };
/// let merged = collate_by(&["A1", "A2", "a3"], &["A4", "a5", "A6"], Some(case_insensitive), false);
/// assert_eq!(merged, Ok(vec!["A1", "A2", "a3", "A4", "a5", "A6"]));
/// ```
pub fn collate_by<T, A, B, F>(
    a: &A,
    b: &B,
    comparator: Option<F>,
    include_duplicates: bool,
) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    let a = require(a, "collate", "a")?;
    let b = require(b, "collate", "b")?;
    let comparator = comparator.ok_or(CollectionError::missing("collate", "comparator"))?;
    trace!(left = a.len(), right = b.len(), include_duplicates, "collate");

    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut left, mut right) = (a.iter().peekable(), b.iter().peekable());
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(from_a), Some(from_b)) => comparator(*from_b, *from_a) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next.cloned());
    }
    merged.extend(left.cloned());
    merged.extend(right.cloned());

    if !include_duplicates {
        merged.dedup_by(|later, earlier| comparator(&*earlier, &*later) == Ordering::Equal);
    }
    Ok(merged)
}
