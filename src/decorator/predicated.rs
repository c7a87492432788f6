//! Predicate-validated view.

use std::marker::PhantomData;

use tracing::debug;

use super::{MutableCollection, Shared, forward_reads};
use crate::error::{CollectionError, Result};

/// A view that only admits elements satisfying a predicate.
///
/// The predicate runs before any mutation, so a rejected insertion leaves
/// the wrapped collection exactly as it was.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
///
/// use bagwise::decorator::{shared, PredicatedView};
///
/// let evens = shared(BTreeSet::new());
/// let mut view = PredicatedView::new(evens, |value: &u32| value % 2 == 0).unwrap();
///
/// assert_eq!(view.add(4), Ok(true));
/// assert_eq!(view.add(4), Ok(false));
/// assert!(view.add(5).is_err());
/// assert_eq!(view.len(), 1);
/// ```
pub struct PredicatedView<T, C, P> {
    collection: Shared<C>,
    predicate: P,
    element: PhantomData<fn(T)>,
}

impl<T, C, P> PredicatedView<T, C, P>
where
    C: MutableCollection<T>,
    P: Fn(&T) -> bool,
{
    /// Decorates `collection` with `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidElement`] if an element already in
    /// the collection fails the predicate.
    ///
    /// # Panics
    ///
    /// Panics if the collection is mutably borrowed elsewhere.
    pub fn new(collection: Shared<C>, predicate: P) -> Result<Self> {
        let all_valid = collection.borrow().iter().all(|element| predicate(element));
        if !all_valid {
            debug!("predicated view rejected existing contents");
            return Err(CollectionError::InvalidElement {
                operation: "PredicatedView::new",
            });
        }
        Ok(Self {
            collection,
            predicate,
            element: PhantomData,
        })
    }

    /// Inserts `element` if it satisfies the predicate.
    ///
    /// Returns whether the wrapped collection changed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidElement`] if the predicate rejects
    /// `element`; nothing is inserted.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn add(&mut self, element: T) -> Result<bool> {
        self.validate(&element, "PredicatedView::add")?;
        Ok(self.collection.borrow_mut().insert(element))
    }

    /// Inserts every element of `elements` if all of them satisfy the predicate.
    ///
    /// Returns how many insertions changed the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidElement`] if any element is
    /// rejected; nothing from the batch is inserted.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, elements: I) -> Result<usize> {
        let batch: Vec<T> = elements.into_iter().collect();
        for element in &batch {
            self.validate(element, "PredicatedView::add_all")?;
        }
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

    /// Returns `true` if `element` would be admitted.
    pub fn accepts(&self, element: &T) -> bool {
        (self.predicate)(element)
    }

    fn validate(&self, element: &T, operation: &'static str) -> Result<()> {
        if self.accepts(element) {
            Ok(())
        } else {
            debug!(operation, "predicated view rejected element");
            Err(CollectionError::InvalidElement { operation })
        }
    }
}

forward_reads!(PredicatedView<T, C, P>, T);
