//! Decorators that intercept mutation of an existing collection.
//!
//! This module provides views over a collection the caller already holds:
//!
//! - [`BoundedView`]: caps the number of elements
//! - [`PredicatedView`]: rejects elements failing a validation predicate
//! - [`TransformingView`]: maps each inserted value before storing it
//! - [`SynchronizedView`]: serializes each operation behind a lock
//!   (requires the `sync` feature)
//!
//! # Shared Handles
//!
//! A view never owns the wrapped collection and never copies it. It holds a
//! [`Shared`] handle (`Rc<RefCell<C>>`) that the caller keeps a clone of, so
//! the collection outlives whichever holder is dropped last. Reads go
//! straight to the wrapped collection.
//!
//! A view's invariant covers only mutations routed through the view. Other
//! holders of the handle may still mutate the collection directly and can
//! break the bound or predicate; the view does not detect this.
//!
//! # Bulk Insertion
//!
//! Every `add_all` is all-or-nothing: the whole batch is checked before the
//! first element is inserted, and a rejected batch leaves the collection
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use bagwise::decorator::{shared, PredicatedView};
//! use bagwise::CollectionError;
//!
//! let numbers = shared(vec![2, 2, 2]);
//! let mut view = PredicatedView::new(numbers.clone(), |value: &i32| *value == 2).unwrap();
//!
//! assert_eq!(view.add(2), Ok(true));
//! assert!(matches!(view.add(3), Err(CollectionError::InvalidElement { .. })));
//! assert_eq!(*numbers.borrow(), vec![2, 2, 2, 2]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

mod bounded;
mod collection;
mod predicated;
#[cfg(feature = "sync")]
mod synchronized;
mod transforming;

pub use bounded::BoundedView;
pub use collection::MutableCollection;
pub use predicated::PredicatedView;
#[cfg(feature = "sync")]
pub use synchronized::SynchronizedView;
pub use transforming::TransformingView;

/// Shared, non-owning handle to a decorated collection.
pub type Shared<C> = Rc<RefCell<C>>;

/// Wraps `collection` in a [`Shared`] handle.
#[inline]
pub fn shared<C>(collection: C) -> Shared<C> {
    Rc::new(RefCell::new(collection))
}

/// Implements the read-only accessors every view forwards to its handle.
macro_rules! forward_reads {
    ($view:ident < $($param:ident),+ >, $element:ident) => {
        impl<$($param),+> $view<$($param),+>
        where
            C: $crate::decorator::MutableCollection<$element>,
        {
            /// Returns the number of elements in the wrapped collection.
            ///
            /// # Panics
            ///
            /// Panics if the collection is mutably borrowed elsewhere.
            #[must_use]
            pub fn len(&self) -> usize {
                self.collection.borrow().len()
            }

            /// Returns `true` if the wrapped collection is empty.
            ///
            /// # Panics
            ///
            /// Panics if the collection is mutably borrowed elsewhere.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.collection.borrow().is_empty()
            }

            /// Returns `true` if the wrapped collection holds `element`.
            ///
            /// # Panics
            ///
            /// Panics if the collection is mutably borrowed elsewhere.
            #[must_use]
            pub fn contains(&self, element: &$element) -> bool {
                self.collection.borrow().contains(element)
            }

            /// Borrows the wrapped collection without copying it.
            ///
            /// # Panics
            ///
            /// Panics if the collection is mutably borrowed elsewhere.
            pub fn borrow(&self) -> std::cell::Ref<'_, C> {
                self.collection.borrow()
            }

            /// Returns the shared handle this view decorates.
            #[must_use]
            pub const fn handle(&self) -> &$crate::decorator::Shared<C> {
                &self.collection
            }
        }
    };
}

pub(crate) use forward_reads;
