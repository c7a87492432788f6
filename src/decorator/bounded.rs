//! Size-capped view.

use std::marker::PhantomData;

use tracing::debug;

use super::{MutableCollection, Shared, forward_reads};
use crate::error::{CollectionError, Result};

/// A view that refuses to grow the wrapped collection past a bound.
///
/// An unbounded view forwards every insertion and is never full.
///
/// # Examples
///
/// ```rust
/// use bagwise::decorator::{shared, BoundedView};
///
/// let bounded = BoundedView::new(shared(vec![1, 2, 3, 4]), 4);
/// assert!(bounded.is_full());
/// assert_eq!(bounded.max_size(), Some(4));
///
/// let unbounded = BoundedView::unbounded(shared(vec![1, 2, 3, 4]));
/// assert!(!unbounded.is_full());
/// assert_eq!(unbounded.max_size(), None);
/// ```
pub struct BoundedView<T, C> {
    collection: Shared<C>,
    bound: Option<usize>,
    element: PhantomData<fn(T)>,
}

impl<T, C: MutableCollection<T>> BoundedView<T, C> {
    /// Decorates `collection` with a maximum size of `bound`.
    #[must_use]
    pub const fn new(collection: Shared<C>, bound: usize) -> Self {
        Self {
            collection,
            bound: Some(bound),
            element: PhantomData,
        }
    }

    /// Decorates `collection` without a bound.
    #[must_use]
    pub const fn unbounded(collection: Shared<C>) -> Self {
        Self {
            collection,
            bound: None,
            element: PhantomData,
        }
    }

    /// Decorates `collection` with its current size as the bound.
    ///
    /// # Panics
    ///
    /// Panics if the collection is mutably borrowed elsewhere.
    #[must_use]
    pub fn fixed_size(collection: Shared<C>) -> Self {
        let bound = collection.borrow().len();
        Self::new(collection, bound)
    }

    /// Returns the bound, or `None` when the view is unbounded.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> Option<usize> {
        self.bound
    }

    /// Returns `true` if the collection has reached the bound.
    ///
    /// An unbounded view is never full.
    ///
    /// # Panics
    ///
    /// Panics if the collection is mutably borrowed elsewhere.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == Some(0)
    }

    /// Returns how many more elements fit, or `None` when unbounded.
    ///
    /// # Panics
    ///
    /// Panics if the collection is mutably borrowed elsewhere.
    #[must_use]
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.bound
            .map(|bound| bound.saturating_sub(self.collection.borrow().len()))
    }

    /// Inserts `element` unless the collection is full.
    ///
    /// Returns whether the wrapped collection changed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the collection is
    /// already at its bound; the collection is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn add(&mut self, element: T) -> Result<bool> {
        self.ensure_room(1)?;
        Ok(self.collection.borrow_mut().insert(element))
    }

    /// Inserts every element of `elements`, or none of them.
    ///
    /// The batch is admitted only if all of it fits, counting every element
    /// even when a set-like collection would absorb duplicates. Returns how
    /// many insertions changed the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the batch does not
    /// fit; nothing is inserted.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> Result<usize> {
        let batch: Vec<T> = elements.into_iter().collect();
        self.ensure_room(batch.len())?;
        let mut collection = self.collection.borrow_mut();
        Ok(batch
            .into_iter()
            .map(|element| collection.insert(element))
            .filter(|&changed| changed)
            .count())
    }

    /// Removes one occurrence of `element`, returning `true` if one was present.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn remove(&mut self, element: &T) -> bool {
        self.collection.borrow_mut().remove(element)
    }

    /// Removes every element.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn clear(&mut self) {
        self.collection.borrow_mut().clear();
    }

    fn ensure_room(&self, additional: usize) -> Result<()> {
        match (self.bound, self.remaining_capacity()) {
            (Some(bound), Some(remaining)) if remaining < additional => {
                debug!(bound, additional, remaining, "bounded view rejected insertion");
                Err(CollectionError::CapacityExceeded { bound })
            }
            _ => Ok(()),
        }
    }
}

forward_reads!(BoundedView<T, C>, T);
