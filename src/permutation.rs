//! Lazy enumeration of every ordering of a sequence.
//!
//! [`Permutations`] walks the Steinhaus–Johnson–Trotter order: each ordering
//! differs from the previous one by a single swap of adjacent positions.
//! Permutation is positional, so equal values at different positions still
//! produce distinct orderings and an input of length `n` always yields
//! exactly `n!` items.
//!
//! The generator is one-shot. A second enumeration needs a new generator.
//!
//! # Examples
//!
//! ```rust
//! use bagwise::permutation::permutations;
//!
//! let orderings: Vec<Vec<i32>> = permutations(&[1, 2, 3]).unwrap().collect();
//! assert_eq!(
//!     orderings,
//!     vec![
//!         vec![1, 2, 3],
//!         vec![1, 3, 2],
//!         vec![3, 1, 2],
//!         vec![3, 2, 1],
//!         vec![2, 3, 1],
//!         vec![2, 1, 3],
//!     ]
//! );
//! ```

use std::iter::FusedIterator;

use crate::error::Result;
use crate::sequence::{Sequence, require};

/// Creates a generator over the orderings of `sequence`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument)
/// if `sequence` is absent.
pub fn permutations<T, S>(sequence: &S) -> Result<Permutations<T>>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
{
    let elements = require(sequence, "permutations", "sequence")?;
    Ok(Permutations::new(elements.to_vec()))
}

/// Iterator over every ordering of a fixed set of elements.
///
/// # Complexity
///
/// O(n) per `next()`: one scan for the largest mobile key plus building the
/// returned ordering.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    elements: Vec<T>,
    /// Current arrangement, as indices into `elements`.
    keys: Vec<usize>,
    /// Direction of each key, indexed by key; `true` points left.
    pointing_left: Vec<bool>,
    exhausted: bool,
    remaining: Option<usize>,
}

impl<T: Clone> Permutations<T> {
    /// Creates a generator that owns `elements`.
    #[must_use]
    pub fn new(elements: Vec<T>) -> Self {
        let length = elements.len();
        let remaining = (1..=length).try_fold(1usize, usize::checked_mul);
        Self {
            elements,
            keys: (0..length).collect(),
            pointing_left: vec![true; length],
            exhausted: false,
            remaining,
        }
    }

    fn current(&self) -> Vec<T> {
        self.keys
            .iter()
            .map(|&key| self.elements[key].clone())
            .collect()
    }

    /// Position of the largest key whose neighbour in its direction is smaller.
    fn largest_mobile(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (position, &key) in self.keys.iter().enumerate() {
            let neighbour = if self.pointing_left[key] {
                position.checked_sub(1)
            } else {
                Some(position + 1).filter(|&next| next < self.keys.len())
            };
            let is_mobile = neighbour.is_some_and(|next| self.keys[next] < key);
            if is_mobile && best.is_none_or(|current| self.keys[current] < key) {
                best = Some(position);
            }
        }
        best
    }

    fn advance(&mut self) {
        let Some(position) = self.largest_mobile() else {
            self.exhausted = true;
            return;
        };
        let key = self.keys[position];
        let target = if self.pointing_left[key] {
            position - 1
        } else {
            position + 1
        };
        self.keys.swap(position, target);
        for larger in key + 1..self.pointing_left.len() {
            self.pointing_left[larger] = !self.pointing_left[larger];
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }
        let ordering = self.current();
        self.advance();
        self.remaining = self.remaining.map(|count| count.saturating_sub(1));
        Some(ordering)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining {
            Some(count) => (count, Some(count)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}
