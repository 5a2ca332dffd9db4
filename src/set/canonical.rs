//! Sorted view of a [`Set`] for deterministic output.
//!
//! A [`Set`] never orders its elements. When output has to be stable
//! (snapshots, diagnostics, diffable serialized files), borrow a
//! [`Canonical`] view instead: it holds the elements sorted ascending and
//! renders and serializes them in that order.
//!
//! # Examples
//!
//! ```rust
//! use sets::set::Set;
//!
//! let set = Set::from([3, 1, 2]);
//! assert_eq!(set.canonical().to_string(), "Set{1, 2, 3}");
//! assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
//! ```

use std::fmt;

use super::Set;
use super::hashset::write_elements;

/// A borrowed view over a [`Set`] with its elements in ascending order.
///
/// Created by [`Set::canonical`].
#[derive(Clone)]
pub struct Canonical<'a, E> {
    elements: Vec<&'a E>,
}

impl<E: Ord> Set<E> {
    /// Returns a view of the set with its elements sorted ascending.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set = Set::from(["pear", "apple", "fig"]);
    /// let sorted: Vec<&&str> = set.canonical().iter().collect();
    /// assert_eq!(sorted, vec![&"apple", &"fig", &"pear"]);
    /// ```
    #[must_use]
    pub fn canonical(&self) -> Canonical<'_, E> {
        let mut elements: Vec<&E> = self.iter().collect();
        elements.sort_unstable();
        Canonical { elements }
    }

    /// Returns the elements of the set cloned into an ascending `Vec`.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.canonical().iter().cloned().collect()
    }
}

impl<'a, E> Canonical<'a, E> {
    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a E> + '_ {
        self.elements.iter().copied()
    }

    /// Returns the number of elements in the view.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the sorted elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[&'a E] {
        &self.elements
    }
}

impl<E: fmt::Display> fmt::Display for Canonical<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.elements.iter().copied())
    }
}

impl<E: fmt::Debug> fmt::Debug for Canonical<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}
