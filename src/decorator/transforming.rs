//! Element-transforming view.

use std::marker::PhantomData;

use super::{MutableCollection, Shared, forward_reads};

/// A view that stores `transform(element)` for every element added.
///
/// Elements already in the collection when the view is created are left as
/// they are; see [`TransformingView::transformed`] for the retroactive form.
///
/// # Examples
///
/// ```rust
/// use bagwise::decorator::{shared, TransformingView};
///
/// let lengths = shared(vec![1usize]);
/// let mut view = TransformingView::new(lengths.clone(), |word: &str| word.len());
///
/// assert!(view.add("four"));
/// assert!(view.contains(&4));
/// assert_eq!(*lengths.borrow(), vec![1, 4]);
/// ```
pub struct TransformingView<I, O, C, F> {
    collection: Shared<C>,
    transform: F,
    types: PhantomData<fn(I) -> O>,
}

impl<I, O, C, F> TransformingView<I, O, C, F>
where
    C: MutableCollection<O>,
    F: Fn(I) -> O,
{
    /// Decorates `collection` with `transform`.
    #[must_use]
    pub const fn new(collection: Shared<C>, transform: F) -> Self {
        Self {
            collection,
            transform,
            types: PhantomData,
        }
    }

    /// Transforms `element` and inserts the result.
    ///
    /// Returns whether inserting the transformed value changed the collection.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn add(&mut self, element: I) -> bool {
        let transformed = (self.transform)(element);
        self.collection.borrow_mut().insert(transformed)
    }

    /// Transforms the whole batch, then inserts every result.
    ///
    /// Returns how many insertions changed the collection.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn add_all<E: IntoIterator<Item = I>>(&mut self, elements: E) -> usize {
        let batch: Vec<O> = elements.into_iter().map(&self.transform).collect();
        let mut collection = self.collection.borrow_mut();
        batch
            .into_iter()
            .map(|element| collection.insert(element))
            .filter(|&changed| changed)
            .count()
    }

    /// Removes one occurrence of an already-transformed `element`.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    pub fn remove(&mut self, element: &O) -> bool {
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

    /// Applies the transform without inserting.
    pub fn apply(&self, element: I) -> O {
        (self.transform)(element)
    }
}

impl<T, C, F> TransformingView<T, T, C, F>
where
    T: Clone,
    C: MutableCollection<T>,
    F: Fn(T) -> T,
{
    /// Decorates `collection` and transforms the elements it already holds.
    ///
    /// Existing elements are re-inserted in iteration order after being
    /// transformed, so a set-like collection may end up smaller.
    ///
    /// # Panics
    ///
    /// Panics if the collection is borrowed elsewhere.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bagwise::decorator::{shared, TransformingView};
    ///
    /// let numbers = shared(vec![1, 2, 3]);
    /// let view = TransformingView::transformed(numbers.clone(), |value: i32| value * 10);
    ///
    /// assert_eq!(*numbers.borrow(), vec![10, 20, 30]);
    /// assert_eq!(view.len(), 3);
    /// ```
    pub fn transformed(collection: Shared<C>, transform: F) -> Self {
        {
            let mut inner = collection.borrow_mut();
            let existing: Vec<T> = inner.iter().cloned().collect();
            inner.clear();
            for element in existing {
                inner.insert(transform(element));
            }
        }
        Self::new(collection, transform)
    }
}

forward_reads!(TransformingView<I, O, C, F>, O);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::shared;
    use std::collections::HashSet;

    #[test]
    fn test_decoration_is_not_retroactive() {
        let handle = shared(vec!["Keep".to_string()]);
        let mut view = TransformingView::new(handle.clone(), |text: &str| text.to_uppercase());
        view.add("new");
        assert_eq!(*handle.borrow(), vec!["Keep".to_string(), "NEW".to_string()]);
    }

    #[test]
    fn test_add_reports_insertion_of_transformed_value() {
        let handle = shared(HashSet::from([0]));
        let mut view = TransformingView::new(handle, |value: i32| value % 3);
        assert!(!view.add(3));
        assert!(view.add(4));
        assert_eq!(view.add_all([5, 6, 7]), 1);
        assert_eq!(view.len(), 3);
    }
}
