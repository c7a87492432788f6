//! Cardinality-based operations: union, intersection, disjunction, subtract,
//! and the sub-collection and equality predicates.

use std::hash::Hash;

use tracing::trace;

use crate::equivalence::{DefaultEquator, Equator};
use crate::error::{CollectionError, Result};
use crate::multiset::Multiset;
use crate::sequence::{Sequence, require};

// =============================================================================
// Union
// =============================================================================

/// Returns the multiset union of `a` and `b` under natural equality.
///
/// Each value occurs `max(card(a), card(b))` times. The result lists `a` in
/// order, followed by the extra occurrences contributed by `b` in `b`'s order.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::union;
///
/// assert_eq!(union(&[1, 1, 5, 2], &[1, 2, 4]), Ok(vec![1, 1, 5, 2, 4]));
/// ```
pub fn union<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    union_by(a, b, DefaultEquator)
}

/// Returns the multiset union of `a` and `b` under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn union_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, "union", "a")?;
    let b = require(b, "union", "b")?;
    trace!(left = a.len(), right = b.len(), "union");

    let from_a = Multiset::from_elements(a, &equator);
    let mut seen_in_b = Multiset::with_equator(&equator);
    let mut result = a.to_vec();
    for element in b {
        if seen_in_b.insert(element) > from_a.cardinality(element) {
            result.push(element.clone());
        }
    }
    Ok(result)
}

// =============================================================================
// Intersection
// =============================================================================

/// Returns the multiset intersection of `a` and `b` under natural equality.
///
/// Each value occurs `min(card(a), card(b))` times, taken from the front of
/// `a` in `a`'s order.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::intersection;
///
/// assert_eq!(intersection(&[1, 2, 2, 3], &[2, 3, 3]), Ok(vec![2, 3]));
/// ```
pub fn intersection<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    intersection_by(a, b, DefaultEquator)
}

/// Returns the multiset intersection of `a` and `b` under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn intersection_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, "intersection", "a")?;
    let b = require(b, "intersection", "b")?;
    trace!(left = a.len(), right = b.len(), "intersection");

    let from_b = Multiset::from_elements(b, &equator);
    let mut emitted = Multiset::with_equator(&equator);
    let mut result = Vec::new();
    for element in a {
        if emitted.cardinality(element) < from_b.cardinality(element) {
            emitted.insert(element);
            result.push(element.clone());
        }
    }
    Ok(result)
}

// =============================================================================
// Disjunction
// =============================================================================

/// Returns the symmetric difference of `a` and `b` under natural equality.
///
/// Each value occurs `|card(a) - card(b)|` times: the surplus held by `a`
/// in `a`'s order, then the surplus held by `b` in `b`'s order.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::disjunction;
///
/// assert_eq!(disjunction(&[1, 1, 2], &[1, 3]), Ok(vec![1, 2, 3]));
/// ```
pub fn disjunction<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    disjunction_by(a, b, DefaultEquator)
}

/// Returns the symmetric difference of `a` and `b` under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn disjunction_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, "disjunction", "a")?;
    let b = require(b, "disjunction", "b")?;
    trace!(left = a.len(), right = b.len(), "disjunction");

    let from_a = Multiset::from_elements(a, &equator);
    let from_b = Multiset::from_elements(b, &equator);
    let mut result = Vec::new();
    push_surplus(&mut result, a, &from_a, &from_b, &equator);
    push_surplus(&mut result, b, &from_b, &from_a, &equator);
    Ok(result)
}

/// Appends the occurrences by which `own` exceeds `other`, in `elements` order.
fn push_surplus<T, E>(
    result: &mut Vec<T>,
    elements: &[T],
    own: &Multiset<'_, T, &E>,
    other: &Multiset<'_, T, &E>,
    equator: &E,
) where
    T: Clone,
    E: Equator<T>,
{
    let mut emitted = Multiset::with_equator(equator);
    for element in elements {
        let surplus = own
            .cardinality(element)
            .saturating_sub(other.cardinality(element));
        if emitted.cardinality(element) < surplus {
            emitted.insert(element);
            result.push(element.clone());
        }
    }
}

// =============================================================================
// Subtract
// =============================================================================

/// Returns `a` minus `b` under natural equality.
///
/// Each value occurs `max(card(a) - card(b), 0)` times; every element of `b`
/// cancels the earliest remaining equivalent element of `a`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::subtract;
///
/// assert_eq!(subtract(&[1, 1, 2, 4], &[1, 5, 2]), Ok(vec![1, 4]));
/// ```
pub fn subtract<T, A, B>(a: &A, b: &B) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    subtract_matching_by(a, b, |_: &T| true, DefaultEquator)
}

/// Returns `a` minus the elements of `b` that satisfy `predicate`.
///
/// Elements of `b` that fail the predicate have no effect on `a`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::subtract_matching;
///
/// let result = subtract_matching(&[1, 2, 3, 4], &[1, 2, 3], |value: &i32| value % 2 == 1);
/// assert_eq!(result, Ok(vec![2, 4]));
/// ```
pub fn subtract_matching<T, A, B, P>(a: &A, b: &B, predicate: P) -> Result<Vec<T>>
where
    T: Clone + Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    P: Fn(&T) -> bool,
{
    subtract_matching_by(a, b, predicate, DefaultEquator)
}

/// Returns `a` minus `b` under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn subtract_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    subtract_matching_by(a, b, |_: &T| true, equator)
}

/// Returns `a` minus the elements of `b` that satisfy `predicate`, under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn subtract_matching_by<T, A, B, P, E>(
    a: &A,
    b: &B,
    predicate: P,
    equator: E,
) -> Result<Vec<T>>
where
    T: Clone,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    P: Fn(&T) -> bool,
    E: Equator<T>,
{
    let a = require(a, "subtract", "a")?;
    let b = require(b, "subtract", "b")?;
    trace!(left = a.len(), right = b.len(), "subtract");

    let mut removals =
        Multiset::from_elements(b.iter().filter(|element| predicate(*element)), &equator);
    Ok(a.iter()
        .filter(|element| !removals.remove(*element))
        .cloned()
        .collect())
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns `true` if every value occurs in `a` at most as often as in `b`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::is_sub_collection;
///
/// assert_eq!(is_sub_collection(&[1, 2], &[2, 1, 3]), Ok(true));
/// assert_eq!(is_sub_collection(&[1, 1], &[1, 2]), Ok(false));
/// ```
pub fn is_sub_collection<T, A, B>(a: &A, b: &B) -> Result<bool>
where
    T: Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    is_sub_collection_by(a, b, DefaultEquator)
}

/// Returns `true` if every class occurs in `a` at most as often as in `b`, under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn is_sub_collection_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<bool>
where
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, "is_sub_collection", "a")?;
    let b = require(b, "is_sub_collection", "b")?;
    Ok(sub_collection(a, b, &equator))
}

fn sub_collection<T, E: Equator<T>>(a: &[T], b: &[T], equator: &E) -> bool {
    a.len() <= b.len()
        && Multiset::from_elements(a, equator)
            .is_sub_multiset_of(&Multiset::from_elements(b, equator))
}

/// Returns `true` if `a` is a sub-collection of `b` and strictly smaller.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::is_proper_sub_collection;
///
/// assert_eq!(is_proper_sub_collection(&[1, 2], &[1, 2, 3]), Ok(true));
/// assert_eq!(is_proper_sub_collection(&[1, 2, 3], &[1, 2, 3]), Ok(false));
/// ```
pub fn is_proper_sub_collection<T, A, B>(a: &A, b: &B) -> Result<bool>
where
    T: Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    is_proper_sub_collection_by(a, b, DefaultEquator)
}

/// Returns `true` if `a` is a strictly smaller sub-collection of `b`, under `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
pub fn is_proper_sub_collection_by<T, A, B, E>(a: &A, b: &B, equator: E) -> Result<bool>
where
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, "is_proper_sub_collection", "a")?;
    let b = require(b, "is_proper_sub_collection", "b")?;
    Ok(a.len() < b.len() && sub_collection(a, b, &equator))
}

/// Returns `true` if `a` and `b` hold the same values with the same cardinalities.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::is_equal_collection;
///
/// assert_eq!(is_equal_collection(&["a", "b", "a"], &["b", "a", "a"]), Ok(true));
/// assert_eq!(is_equal_collection(&["a", "b"], &["a", "b", "b"]), Ok(false));
/// ```
pub fn is_equal_collection<T, A, B>(a: &A, b: &B) -> Result<bool>
where
    T: Eq + Hash,
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
{
    is_equal_collection_by(a, b, Some(DefaultEquator))
}

/// Returns `true` if `a` and `b` hold the same classes with the same
/// cardinalities under an explicitly supplied `equator`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if either operand is absent,
/// or if the explicit equator slot is `None`.
///
/// # Examples
///
/// ```rust
/// use bagwise::algebra::is_equal_collection_by;
/// use bagwise::equivalence::{by_key, DefaultEquator};
/// use bagwise::CollectionError;
///
/// let case_insensitive = by_key(|text: &&str| text.to_lowercase());
/// assert_eq!(
///     is_equal_collection_by(&["A", "b"], &["B", "a"], Some(case_insensitive)),
///     Ok(true)
/// );
/// assert!(matches!(
///     is_equal_collection_by(&["a"], &["a"], None::<DefaultEquator>),
///     Err(CollectionError::InvalidArgument { argument: "equator", .. })
/// ));
/// ```
pub fn is_equal_collection_by<T, A, B, E>(a: &A, b: &B, equator: Option<E>) -> Result<bool>
where
    A: Sequence<T> + ?Sized,
    B: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let a = require(a, "is_equal_collection", "a")?;
    let b = require(b, "is_equal_collection", "b")?;
    let equator = equator.ok_or(CollectionError::missing("is_equal_collection", "equator"))?;
    if a.len() != b.len() {
        return Ok(false);
    }

    let from_a = Multiset::from_elements(a, &equator);
    let from_b = Multiset::from_elements(b, &equator);
    Ok(from_a.distinct_len() == from_b.distinct_len()
        && from_a
            .iter()
            .all(|(value, count)| count == from_b.cardinality(value)))
}
