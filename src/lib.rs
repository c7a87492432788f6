//! # bagwise
//!
//! Multiset collection algebra, collection decorators, and lazy
//! permutations for Rust.
//!
//! ## Overview
//!
//! - **Multisets**: equivalence-aware occurrence counting ([`Multiset`])
//! - **Equivalence**: pluggable equality with a consistent hash ([`Equator`])
//! - **Set Algebra**: union, intersection, disjunction, subtract, and the
//!   sub-collection and equality predicates, all cardinality-exact
//! - **Permutations**: every ordering of a sequence, produced lazily
//! - **Decorators**: bounded, predicated, transforming, and synchronized
//!   views over a collection the caller keeps using
//!
//! ## Feature Flags
//!
//! - `algebra`: set algebra and positional access
//! - `decorators`: bounded, predicated, and transforming views
//! - `permutation`: the permutation generator
//! - `sync`: `SynchronizedView` backed by `parking_lot`
//! - `fxhash`: hash elements with `FxHasher` instead of `DefaultHasher`
//!
//! ## Example
//!
//! ```rust
//! use bagwise::prelude::*;
//!
//! let merged = union(&[1, 1, 5, 2], &[1, 2, 4]).unwrap();
//! assert_eq!(merged, vec![1, 1, 5, 2, 4]);
//!
//! let difference = subtract(&[1, 1, 2, 4], &[1, 5, 2]).unwrap();
//! assert_eq!(difference, vec![1, 4]);
//!
//! assert_eq!(is_proper_sub_collection(&[1, 2], &[1, 2, 3]), Ok(true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use bagwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::equivalence::{DefaultEquator, Equator, FnEquator, by_key};
    pub use crate::error::CollectionError;
    pub use crate::multiset::{Multiset, cardinality, cardinality_map};
    pub use crate::sequence::Sequence;

    #[cfg(feature = "algebra")]
    pub use crate::access::*;

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    #[cfg(feature = "decorators")]
    pub use crate::decorator::*;

    #[cfg(feature = "permutation")]
    pub use crate::permutation::*;
}

pub mod equivalence;
pub mod error;
pub mod multiset;
pub mod sequence;

#[cfg(feature = "algebra")]
pub mod access;

#[cfg(feature = "algebra")]
pub mod algebra;

#[cfg(feature = "decorators")]
pub mod decorator;

#[cfg(feature = "permutation")]
pub mod permutation;

pub use equivalence::Equator;
pub use error::{CollectionError, Result};
pub use multiset::Multiset;
pub use sequence::Sequence;
