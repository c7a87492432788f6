//! Equivalence-aware multiset of borrowed elements.
//!
//! This module provides [`Multiset`], which maps each equivalence class of
//! an input to its occurrence count, and the [`cardinality`] and
//! [`cardinality_map`] helpers built on it.
//!
//! # Overview
//!
//! Elements are grouped by an [`Equator`]: buckets are keyed by
//! [`Equator::hash`] and each bucket is resolved with [`Equator::equate`].
//! The first element seen for a class becomes its representative, and
//! iteration reports classes in first-seen order.
//!
//! A class whose count drops to zero is treated as absent. Its slot is kept
//! so that indices stay stable, but it is skipped by every query.
//!
//! | Operation      | Complexity              |
//! |----------------|-------------------------|
//! | `insert`       | O(1) amortized          |
//! | `remove`       | O(1) amortized          |
//! | `cardinality`  | O(1) amortized          |
//! | `iter`         | O(d), d distinct values |
//!
//! # Examples
//!
//! ```rust
//! use bagwise::equivalence::DefaultEquator;
//! use bagwise::Multiset;
//!
//! let values = vec![1, 1, 5, 2];
//! let multiset = Multiset::from_sequence(&values, DefaultEquator).unwrap();
//!
//! assert_eq!(multiset.cardinality(&1), 2);
//! assert_eq!(multiset.cardinality(&7), 0);
//! assert_eq!(multiset.total_len(), 4);
//! assert_eq!(multiset.distinct_len(), 3);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::equivalence::{DefaultEquator, Equator};
use crate::error::Result;
use crate::sequence::{Sequence, require};

/// Slots sharing one hash; collisions are rare so one slot stays inline.
type Bucket = SmallVec<[usize; 1]>;

struct Slot<'a, T: ?Sized> {
    representative: &'a T,
    count: usize,
}

impl<T: ?Sized> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Slot<'_, T> {}

// =============================================================================
// Multiset Definition
// =============================================================================

/// An insertion-ordered multiset over borrowed elements.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the elements the multiset counts
/// * `T` - The element type
/// * `E` - The [`Equator`] that decides which elements are the same
///
/// # Examples
///
/// ```rust
/// use bagwise::equivalence::by_key;
/// use bagwise::Multiset;
///
/// let words = ["Apple", "apple", "Pear"];
/// let mut multiset = Multiset::with_equator(by_key(|word: &&str| word.to_lowercase()));
/// for word in &words {
///     multiset.insert(word);
/// }
///
/// assert_eq!(multiset.cardinality(&"APPLE"), 2);
/// let classes: Vec<(&&str, usize)> = multiset.iter().collect();
/// assert_eq!(classes, vec![(&"Apple", 2), (&"Pear", 1)]);
/// ```
pub struct Multiset<'a, T: ?Sized, E = DefaultEquator> {
    equator: E,
    slots: Vec<Slot<'a, T>>,
    buckets: HashMap<u64, Bucket>,
    total: usize,
    distinct: usize,
}

impl<'a, T: Eq + Hash + ?Sized> Multiset<'a, T> {
    /// Creates an empty multiset using natural equality.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_equator(DefaultEquator)
    }
}

impl<T: Eq + Hash + ?Sized> Default for Multiset<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized, E: Equator<T>> Multiset<'a, T, E> {
    /// Creates an empty multiset grouping elements with `equator`.
    #[inline]
    #[must_use]
    pub fn with_equator(equator: E) -> Self {
        Self {
            equator,
            slots: Vec::new(),
            buckets: HashMap::new(),
            total: 0,
            distinct: 0,
        }
    }

    /// Counts every element of `elements` in a single pass.
    pub fn from_elements<I>(elements: I, equator: E) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        let mut multiset = Self::with_equator(equator);
        for element in elements {
            multiset.insert(element);
        }
        multiset
    }

    /// Counts a sequence that the caller requires to be present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
    /// if `sequence` is absent.
    pub fn from_sequence<S>(sequence: &'a S, equator: E) -> Result<Self>
    where
        T: Sized,
        S: Sequence<T> + ?Sized,
    {
        let elements = require(sequence, "Multiset::from_sequence", "sequence")?;
        Ok(Self::from_elements(elements, equator))
    }

    fn find(&self, value: &T) -> Option<usize> {
        self.buckets
            .get(&self.equator.hash(value))?
            .iter()
            .copied()
            .find(|&slot| {
                self.equator
                    .equate(self.slots[slot].representative, value)
            })
    }

    /// Adds one occurrence of `value` and returns the class's new count.
    pub fn insert(&mut self, value: &'a T) -> usize {
        self.total += 1;
        if let Some(index) = self.find(value) {
            let slot = &mut self.slots[index];
            if slot.count == 0 {
                self.distinct += 1;
            }
            slot.count += 1;
            return slot.count;
        }
        let index = self.slots.len();
        self.slots.push(Slot {
            representative: value,
            count: 1,
        });
        self.buckets
            .entry(self.equator.hash(value))
            .or_default()
            .push(index);
        self.distinct += 1;
        1
    }

    /// Removes one occurrence of `value`.
    ///
    /// Returns `false` and leaves the multiset unchanged if the class is
    /// absent.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(index) if self.slots[index].count > 0 => {
                let slot = &mut self.slots[index];
                slot.count -= 1;
                if slot.count == 0 {
                    self.distinct -= 1;
                }
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns the number of occurrences equivalent to `value`.
    #[must_use]
    pub fn cardinality(&self, value: &T) -> usize {
        self.find(value).map_or(0, |index| self.slots[index].count)
    }

    /// Returns `true` if at least one occurrence equivalent to `value` is present.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.cardinality(value) > 0
    }

    /// Returns the total number of occurrences.
    #[inline]
    #[must_use]
    pub const fn total_len(&self) -> usize {
        self.total
    }

    /// Returns the number of classes with a non-zero count.
    #[inline]
    #[must_use]
    pub const fn distinct_len(&self) -> usize {
        self.distinct
    }

    /// Returns `true` if no occurrences are present.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the equator grouping this multiset.
    #[inline]
    pub const fn equator(&self) -> &E {
        &self.equator
    }

    /// Iterates `(representative, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, usize)> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.count > 0)
            .map(|slot| (slot.representative, slot.count))
    }

    /// Returns `true` if every class here occurs at most as often in `other`.
    pub fn is_sub_multiset_of<F: Equator<T>>(&self, other: &Multiset<'_, T, F>) -> bool {
        self.iter()
            .all(|(value, count)| count <= other.cardinality(value))
    }
}

impl<T: ?Sized, E: Clone> Clone for Multiset<'_, T, E> {
    fn clone(&self) -> Self {
        Self {
            equator: self.equator.clone(),
            slots: self.slots.clone(),
            buckets: self.buckets.clone(),
            total: self.total,
            distinct: self.distinct,
        }
    }
}

impl<T: fmt::Debug + ?Sized, E> fmt::Debug for Multiset<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(
                self.slots
                    .iter()
                    .filter(|slot| slot.count > 0)
                    .map(|slot| (slot.representative, slot.count)),
            )
            .finish()
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Returns how many elements of `sequence` are equivalent to `value`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if `sequence` is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::equivalence::DefaultEquator;
/// use bagwise::multiset::cardinality;
///
/// assert_eq!(cardinality(&"a", &["a", "b", "a"], DefaultEquator), Ok(2));
/// ```
pub fn cardinality<T, S, E>(value: &T, sequence: &S, equator: E) -> Result<usize>
where
    S: Sequence<T> + ?Sized,
    E: Equator<T>,
{
    let elements = require(sequence, "cardinality", "sequence")?;
    Ok(elements
        .iter()
        .filter(|element| equator.equate(*element, value))
        .count())
}

/// Builds a value to count map from `sequence` using natural equality.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if `sequence` is absent.
///
/// # Examples
///
/// ```rust
/// use bagwise::multiset::cardinality_map;
///
/// let counts = cardinality_map(&["a", "b", "a"]).unwrap();
/// assert_eq!(counts.get("a"), Some(&2));
/// assert_eq!(counts.get("c"), None);
/// ```
pub fn cardinality_map<T, S>(sequence: &S) -> Result<HashMap<T, usize>>
where
    T: Clone + Eq + Hash,
    S: Sequence<T> + ?Sized,
{
    let elements = require(sequence, "cardinality_map", "sequence")?;
    let mut counts = HashMap::with_capacity(elements.len());
    for element in elements {
        *counts.entry(element.clone()).or_insert(0) += 1;
    }
    Ok(counts)
}
