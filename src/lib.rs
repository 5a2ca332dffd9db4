//! # sets
//!
//! A generic, in-memory hash set with set algebra, membership predicates,
//! and sequence serialization.
//!
//! ## Overview
//!
//! - **Set**: [`Set`](set::Set), a mutable set of unique `Eq + Hash` elements
//! - **Algebra**: union, intersection, difference, symmetric difference
//!   (as methods and as the `|`, `&`, `-`, `^` operators on references)
//! - **Predicates**: subset, superset, disjoint, equality
//! - **Canonical output**: sorted display and serialization via
//!   [`Set::canonical`](set::Set::canonical)
//! - **Serialization**: serde support and a JSON convenience layer
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for sets (as sequences)
//! - `json`: `Set::to_json`, `Set::from_json` and [`JsonError`](set::JsonError)
//! - `fxhash`: hash with `rustc-hash`'s `FxBuildHasher`
//! - `ahash`: hash with `ahash`'s `RandomState`
//! - `tracing`: trace events from the decoding paths
//! - `full`: `serde`, `json` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use sets::prelude::*;
//!
//! let mut set = Set::new();
//! set.insert(1);
//! set.insert(2);
//!
//! let other = Set::from([2, 3]);
//! assert_eq!(&set | &other, Set::from([1, 2, 3]));
//! assert!(set.pop().is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use sets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn test_prelude_exposes_set() {
        let set: Set<u8> = Set::default();
        assert!(set.is_empty());
    }
}
