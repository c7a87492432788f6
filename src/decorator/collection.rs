//! The mutable-collection capability the decorators wrap.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A mutable collection that can be decorated.
///
/// `insert` reports whether the collection changed, so set-like collections
/// return `false` for a value they already hold.
pub trait MutableCollection<T> {
    /// Iterator over borrowed elements.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts `element`, returning `true` if the collection changed.
    fn insert(&mut self, element: T) -> bool;

    /// Removes one occurrence of `element`, returning `true` if one was present.
    fn remove(&mut self, element: &T) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the collection holds `element`.
    fn contains(&self, element: &T) -> bool;

    /// Iterates the elements in the collection's own order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Removes every element.
    fn clear(&mut self);
}

impl<T: PartialEq> MutableCollection<T> for Vec<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        T: 'a;

    fn insert(&mut self, element: T) -> bool {
        self.push(element);
        true
    }

    fn remove(&mut self, element: &T) -> bool {
        self.iter()
            .position(|candidate| candidate == element)
            .map(|position| Self::remove(self, position))
            .is_some()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        self.as_slice().contains(element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: PartialEq> MutableCollection<T> for VecDeque<T> {
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        T: 'a;

    fn insert(&mut self, element: T) -> bool {
        self.push_back(element);
        true
    }

    fn remove(&mut self, element: &T) -> bool {
        VecDeque::iter(self)
            .position(|candidate| candidate == element)
            .and_then(|position| Self::remove(self, position))
            .is_some()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Eq + Hash, S: BuildHasher> MutableCollection<T> for HashSet<T, S> {
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<T: Ord> MutableCollection<T> for BTreeSet<T> {
    type Iter<'a>
        = std::collections::btree_set::Iter<'a, T>
    where
        T: 'a;

    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    fn remove(&mut self, element: &T) -> bool {
        Self::remove(self, element)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}
