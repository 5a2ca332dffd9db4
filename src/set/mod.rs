//! Hash-based set of unique elements.
//!
//! This module provides [`Set`], a mutable set backed by
//! [`std::collections::HashSet`], together with the set algebra
//! (union, intersection, difference, symmetric difference) and the
//! membership predicates (subset, superset, disjoint, equality).
//!
//! - [`Set`]: The set itself
//! - [`Values`] / [`IntoValues`]: Borrowing and owning iterators
//! - [`Canonical`]: Sorted view for deterministic display and serialization
//!
//! # Iteration Order
//!
//! Iteration order is unspecified and may differ between calls, between
//! program runs, and between equal sets. Use [`Set::canonical`] when a
//! stable order is needed.
//!
//! # Examples
//!
//! ```rust
//! use sets::set::Set;
//!
//! let a: Set<i32> = [1, 2].into_iter().collect();
//! let b: Set<i32> = [2, 3].into_iter().collect();
//!
//! assert_eq!(a.union(&b), Set::from([1, 2, 3]));
//! assert_eq!(a.intersection(&b), Set::from([2]));
//! assert_eq!(a.difference(&b), Set::from([1]));
//! assert_eq!(b.difference(&a), Set::from([3]));
//! assert_eq!(a.symmetric_difference(&b), Set::from([1, 3]));
//!
//! assert_eq!(a.union(&b).canonical().to_string(), "Set{1, 2, 3}");
//! ```
//!
//! # Hashing
//!
//! The hasher is chosen crate-wide at compile time:
//!
//! | Feature   | [`SetHasher`]                  |
//! |-----------|--------------------------------|
//! | (default) | `std::hash::RandomState`       |
//! | `fxhash`  | `rustc_hash::FxBuildHasher`    |
//! | `ahash`   | `ahash::RandomState`           |
//!
//! `fxhash` takes precedence when both `fxhash` and `ahash` are enabled.

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hasher builder used by every [`Set`].
#[cfg(feature = "fxhash")]
pub type SetHasher = rustc_hash::FxBuildHasher;

/// Hasher builder used by every [`Set`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SetHasher = ahash::RandomState;

/// Hasher builder used by every [`Set`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SetHasher = std::hash::RandomState;

mod canonical;
mod hashset;
mod iter;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "serde")]
mod serialization;

pub use canonical::Canonical;
pub use hashset::Set;
pub use iter::IntoValues;
pub use iter::Values;
#[cfg(feature = "json")]
pub use json::JsonError;

// =============================================================================
// Tests
// =============================================================================
