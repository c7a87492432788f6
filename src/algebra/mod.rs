//! Multiset collection algebra.
//!
//! This module provides operations that combine two sequences as
//! multisets, where each value carries an occurrence count:
//!
//! | Operation                   | Cardinality of `v` in the result      |
//! |-----------------------------|---------------------------------------|
//! | [`union`]                   | `max(card(a, v), card(b, v))`         |
//! | [`intersection`]            | `min(card(a, v), card(b, v))`         |
//! | [`disjunction`]             | `abs(card(a, v) - card(b, v))`        |
//! | [`subtract`]                | `max(card(a, v) - card(b, v), 0)`     |
//!
//! plus the predicates [`is_sub_collection`], [`is_proper_sub_collection`]
//! and [`is_equal_collection`], the membership filters [`retain_all`] and
//! [`remove_all`], the containment tests [`contains_any`] and
//! [`contains_all`], and the sorted merge [`collate`].
//!
//! Every operation has a `*_by` variant taking an explicit
//! [`Equator`](crate::equivalence::Equator); the plain variants use natural
//! equality.
//!
//! # Ordering
//!
//! Results keep the first operand's enumeration order for retained
//! elements, followed by elements contributed only by the second operand.
//! Nothing is sorted.
//!
//! # Absent operands
//!
//! Operands are [`Sequence`](crate::Sequence)s. An absent operand (`None`)
//! is reported as
//! [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument);
//! it is never treated as empty.
//!
//! ```rust
//! use bagwise::algebra::union;
//! use bagwise::CollectionError;
//!
//! let absent: Option<Vec<i32>> = None;
//! assert!(matches!(
//!     union(&absent, &[1, 2]),
//!     Err(CollectionError::InvalidArgument { argument: "a", .. })
//! ));
//! ```

mod cardinal;
mod collate;
mod membership;

pub use cardinal::disjunction;
pub use cardinal::disjunction_by;
pub use cardinal::intersection;
pub use cardinal::intersection_by;
pub use cardinal::is_equal_collection;
pub use cardinal::is_equal_collection_by;
pub use cardinal::is_proper_sub_collection;
pub use cardinal::is_proper_sub_collection_by;
pub use cardinal::is_sub_collection;
pub use cardinal::is_sub_collection_by;
pub use cardinal::subtract;
pub use cardinal::subtract_by;
pub use cardinal::subtract_matching;
pub use cardinal::subtract_matching_by;
pub use cardinal::union;
pub use cardinal::union_by;
pub use collate::collate;
pub use collate::collate_by;
pub use membership::contains_all;
pub use membership::contains_any;
pub use membership::remove_all;
pub use membership::remove_all_by;
pub use membership::retain_all;
pub use membership::retain_all_by;
