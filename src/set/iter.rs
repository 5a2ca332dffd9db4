//! Iterators over [`Set`](super::Set).

use std::collections::hash_set;
use std::iter::FusedIterator;

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over the elements of a [`Set`](super::Set).
///
/// Created by [`Set::iter`](super::Set::iter). Order is unspecified.
pub struct Values<'a, E> {
    inner: hash_set::Iter<'a, E>,
}

impl<'a, E> Values<'a, E> {
    pub(super) const fn new(inner: hash_set::Iter<'a, E>) -> Self {
        Self { inner }
    }
}

impl<'a, E> Iterator for Values<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for Values<'_, E> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Values<'_, E> {}

// Manual impl: cloning the iterator must not require `E: Clone`.
impl<E> Clone for Values<'_, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the elements of a [`Set`](super::Set).
///
/// Created by the [`IntoIterator`] implementation of `Set`.
pub struct IntoValues<E> {
    inner: hash_set::IntoIter<E>,
}

impl<E> IntoValues<E> {
    pub(super) const fn new(inner: hash_set::IntoIter<E>) -> Self {
        Self { inner }
    }
}

impl<E> Iterator for IntoValues<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for IntoValues<E> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for IntoValues<E> {}

#[cfg(test)]
mod tests {
    use super::super::Set;
    use rstest::rstest;

    #[rstest]
    fn test_values_yields_each_element_once() {
        let set: Set<i32> = (0..100).collect();
        let mut values: Vec<i32> = set.iter().copied().collect();
        values.sort_unstable();

        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_values_reports_exact_length() {
        let set = Set::from([1, 2, 3]);
        let mut values = set.iter();
        assert_eq!(values.len(), 3);
        values.next();
        assert_eq!(values.len(), 2);
    }

    #[rstest]
    fn test_values_stops_early() {
        let set: Set<i32> = (0..100).collect();
        let taken: Vec<&i32> = set.iter().take(5).collect();
        assert_eq!(taken.len(), 5);
    }

    #[rstest]
    fn test_values_restarts_with_full_enumeration() {
        let set: Set<i32> = (0..20).collect();
        let mut first = set.iter();
        first.next();
        drop(first);

        assert_eq!(set.iter().count(), 20);
    }

    #[rstest]
    fn test_into_values_moves_elements() {
        let set = Set::from(["a".to_string(), "b".to_string()]);
        let mut values: Vec<String> = set.into_iter().collect();
        values.sort();

        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    }
}
