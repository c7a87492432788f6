//! Pluggable notions of "the same element".
//!
//! An [`Equator`] combines an equality test with a compatible hash. The
//! multiset machinery groups elements into equivalence classes by
//! [`Equator::hash`] first and resolves each bucket with
//! [`Equator::equate`], so the two must never disagree:
//!
//! - `equate(a, a)` holds for every `a`
//! - `equate(a, b) == equate(b, a)`
//! - `equate(a, b)` implies `hash(a) == hash(b)`
//!
//! [`DefaultEquator`] delegates to the element's own `Eq` and `Hash`.
//!
//! # Examples
//!
//! ```rust
//! use bagwise::equivalence::{by_key, DefaultEquator, Equator};
//!
//! assert!(DefaultEquator.equate(&"a", &"a"));
//!
//! let case_insensitive = by_key(|text: &&str| text.to_lowercase());
//! assert!(case_insensitive.equate(&"Hello", &"hELLO"));
//! assert_eq!(case_insensitive.hash(&"Hello"), case_insensitive.hash(&"HELLO"));
//! ```

use std::hash::{BuildHasher, BuildHasherDefault, Hash};

#[cfg(feature = "fxhash")]
type ElementHasher = rustc_hash::FxHasher;

#[cfg(not(feature = "fxhash"))]
type ElementHasher = std::collections::hash_map::DefaultHasher;

/// Hashes a value with the crate's deterministic element hasher.
#[inline]
pub(crate) fn hash_value<T: Hash + ?Sized>(value: &T) -> u64 {
    BuildHasherDefault::<ElementHasher>::default().hash_one(value)
}

// =============================================================================
// Equator
// =============================================================================

/// An equality relation over `T` paired with a hash consistent with it.
pub trait Equator<T: ?Sized> {
    /// Returns `true` if `left` and `right` belong to the same class.
    fn equate(&self, left: &T, right: &T) -> bool;

    /// Returns a hash that is equal for any two equated values.
    fn hash(&self, value: &T) -> u64;
}

impl<T: ?Sized, E: Equator<T> + ?Sized> Equator<T> for &E {
    #[inline]
    fn equate(&self, left: &T, right: &T) -> bool {
        (**self).equate(left, right)
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

/// Natural equality: `Eq` for equating, `Hash` for hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquator;

impl<T: Eq + Hash + ?Sized> Equator<T> for DefaultEquator {
    #[inline]
    fn equate(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        hash_value(value)
    }
}

// =============================================================================
// Closure-backed equators
// =============================================================================

/// An [`Equator`] assembled from an equality closure and a hash closure.
///
/// The caller is responsible for keeping the two consistent.
///
/// # Examples
///
/// ```rust
/// use bagwise::equivalence::{Equator, FnEquator};
///
/// let parity = FnEquator::new(
///     |left: &i32, right: &i32| left % 2 == right % 2,
///     |value: &i32| u64::from(value.rem_euclid(2) == 1),
/// );
/// assert!(parity.equate(&2, &8));
/// assert!(!parity.equate(&2, &3));
/// ```
#[derive(Clone, Copy)]
pub struct FnEquator<F, H> {
    equate: F,
    hash: H,
}

impl<F, H> FnEquator<F, H> {
    /// Creates an equator from `equate` and `hash`.
    #[inline]
    pub const fn new(equate: F, hash: H) -> Self {
        Self { equate, hash }
    }
}

impl<T: ?Sized, F, H> Equator<T> for FnEquator<F, H>
where
    F: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    #[inline]
    fn equate(&self, left: &T, right: &T) -> bool {
        (self.equate)(left, right)
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

impl<F, H> std::fmt::Debug for FnEquator<F, H> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("FnEquator(<closures>)")
    }
}

/// Builds an equator that compares values by a projected key.
///
/// Two values are equivalent when their keys are equal; the hash is the
/// key's hash, so consistency holds by construction.
pub fn by_key<T, Q, K>(key: K) -> FnEquator<impl Fn(&T, &T) -> bool, impl Fn(&T) -> u64>
where
    T: ?Sized,
    Q: Eq + Hash,
    K: Fn(&T) -> Q + Clone,
{
    let hash_key = key.clone();
    FnEquator::new(
        move |left: &T, right: &T| key(left) == key(right),
        move |value: &T| hash_value(&hash_key(value)),
    )
}
