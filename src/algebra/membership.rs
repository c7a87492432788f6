//! Membership-based filtering and containment tests.
//!
//! Unlike the cardinal operations, these ignore how often a value occurs in
//! the second operand: only whether it occurs at all.

use std::hash::Hash;

use crate::equivalence::{DefaultEquator, Equator};
use crate::error::Result;
use crate::multiset::Multiset;
use crate::sequence::{Sequence, require};

/// Keeps the elements of `a` that have an equal element in `b`.
///
/// Order and duplicates of `a` are preserved.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::retain_all;
///
/// assert_eq!(retain_all(&[1, 2, 3, 1], &[1, 2]), Ok(vec![1, 2, 1]));
/// ```
pub fn retain_all<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    retain_all_by(a, b, DefaultEquator)
}

/// Keeps the elements of `a` that have an equivalent in `b` under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if either operand is absent.
pub fn retain_all_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    filter_by_membership(a, b, equator, "retain_all", true)
}

/// Drops the elements of `a` that have an equal element in `b`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::remove_all;
///
/// assert_eq!(remove_all(&[1, 2, 3], &[1, 2]), Ok(vec![3]));
/// assert_eq!(remove_all(&[1, 2, 3], &[4, 5, 6]), Ok(vec![1, 2, 3]));
/// ```
pub fn remove_all<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    remove_all_by(a, b, DefaultEquator)
}

/// Drops the elements of `a` that have an equivalent in `b` under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if either operand is absent.
pub fn remove_all_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    filter_by_membership(a, b, equator, "remove_all", false)
}

fn filter_by_membership<T, A, B, E>(
    a: &A,
    b: &B,
    equator: E,
    operation: &'static str,
    keep_members: bool,
) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, operation, "a")?;
    let b = require(b, operation, "b")?;
    let members = Multiset::from_elements(b, equator);
    Ok(a.iter()
        .filter(|element| members.contains(element) == keep_members)
        .cloned()
        .collect())
}

/// Returns `true` if `a` and `b` share at least one value.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::contains_any;
///
/// assert_eq!(contains_any(&["a", "b"], &["c", "b"]), Ok(true));
/// assert_eq!(contains_any(&["a"], &[] as &[&str]), Ok(false));
/// ```
pub fn contains_any<T, A, B>(a: &A, b: &B) -> Result<bool>
where
    T: Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    let a = require(a, "contains_any", "a")?;
    let b = require(b, "contains_any", "b")?;
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let members = Multiset::from_elements(smaller, DefaultEquator);
    Ok(larger.iter().any(|element| members.contains(element)))
}

/// Returns `true` if every value of `b` also occurs in `a`.
///
/// Cardinality is ignored: `a = [1]` contains all of `b = [1, 1]`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::contains_all;
///
/// assert_eq!(contains_all(&[1, 2, 3], &[3, 1, 1]), Ok(true));
/// assert_eq!(contains_all(&[1, 2], &[4]), Ok(false));
/// ```
pub fn contains_all<T, A, B>(a: &A, b: &B) -> Result<bool>
where
    T: Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    let a = require(a, "contains_all", "a")?;
    let b = require(b, "contains_all", "b")?;
    let members = Multiset::from_elements(a, DefaultEquator);
    Ok(b.iter().all(|element| members.contains(element)))
}
