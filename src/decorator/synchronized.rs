//! Lock-guarded view for collections shared across threads.

use std::sync::Arc;

use parking_lot::Mutex;

use super::MutableCollection;

/// A view whose every operation runs under one lock.
///
/// Each method is atomic with respect to other methods on views sharing the
/// same handle. A sequence of calls is not: use [`SynchronizedView::with_lock`]
/// for read-then-write sequences.
///
/// # Examples
///
/// ```rust
/// use std::thread;
///
/// use bagwise::decorator::SynchronizedView;
///
/// let view = SynchronizedView::wrap(Vec::new());
/// let handles: Vec<_> = (0..4)
///     .map(|index| {
///         let view = view.clone();
///         thread::spawn(move || view.add(index))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(view.len(), 4);
/// ```
#[derive(Debug)]
pub struct SynchronizedView<C> {
    collection: Arc<Mutex<C>>,
}

impl<C> Clone for SynchronizedView<C> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
        }
    }
}

impl<C> SynchronizedView<C> {
    /// Decorates an existing thread-shared handle.
    #[must_use]
    pub const fn new(collection: Arc<Mutex<C>>) -> Self {
        Self { collection }
    }

    /// Moves `collection` behind a new lock.
    #[must_use]
    pub fn wrap(collection: C) -> Self {
        Self::new(Arc::new(Mutex::new(collection)))
    }

    /// Returns the shared handle this view decorates.
    #[must_use]
    pub const fn handle(&self) -> &Arc<Mutex<C>> {
        &self.collection
    }

    /// Runs `operation` with exclusive access, holding the lock throughout.
    pub fn with_lock<R>(&self, operation: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.collection.lock();
        operation(&mut *guard)
    }

    /// Inserts `element`, returning `true` if the collection changed.
    pub fn add<T>(&self, element: T) -> bool
    where
        C: MutableCollection<T>,
    {
        self.collection.lock().insert(element)
    }

    /// Removes one occurrence of `element`, returning `true` if one was present.
    pub fn remove<T>(&self, element: &T) -> bool
    where
        C: MutableCollection<T>,
    {
        self.collection.lock().remove(element)
    }

    /// Returns `true` if the collection holds `element`.
    #[must_use]
    pub fn contains<T>(&self, element: &T) -> bool
    where
        C: MutableCollection<T>,
    {
        self.collection.lock().contains(element)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len<T>(&self) -> usize
    where
        C: MutableCollection<T>,
    {
        self.collection.lock().len()
    }

    /// Returns `true` if the collection holds no elements.
    #[must_use]
    pub fn is_empty<T>(&self) -> bool
    where
        C: MutableCollection<T>,
    {
        self.collection.lock().is_empty()
    }

    /// Copies the elements out under a single lock acquisition.
    #[must_use]
    pub fn snapshot<T: Clone>(&self) -> Vec<T>
    where
        C: MutableCollection<T>,
    {
        self.collection.lock().iter().cloned().collect()
    }
}
