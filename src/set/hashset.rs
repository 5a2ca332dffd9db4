//! Mutable hash set.
//!
//! This module provides [`Set`], a set of unique elements that wraps
//! [`std::collections::HashSet`] and adds the set algebra and predicates
//! as methods returning fresh sets.
//!
//! # Overview
//!
//! - O(1) average `contains`, `insert`, `remove`
//! - O(capacity) worst case `pop`; use `drain` to empty a set in bulk
//! - O(1) `len` and `is_empty`
//! - O(n) `clone`, `clear`, iteration
//!
//! Binary operations never modify either operand: each one allocates
//! and returns a new set that owns copies of the selected elements.
//!
//! # Examples
//!
//! ```rust
//! use sets::set::Set;
//!
//! let mut set = Set::new();
//! assert!(set.insert(1));
//! assert!(set.insert(2));
//! assert!(!set.insert(2)); // already present
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1));
//!
//! assert!(set.remove(&1));
//! assert!(!set.remove(&1)); // already absent
//! assert_eq!(set.len(), 1);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use sets::set::Set;
//!
//! let set_a = Set::from([1, 2, 3]);
//! let set_b = Set::from([2, 3, 4]);
//!
//! let union = set_a.union(&set_b);                           // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);             // {2, 3}
//! let difference = set_a.difference(&set_b);                 // {1}
//! let symmetric_difference = set_a.symmetric_difference(&set_b); // {1, 4}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! assert_eq!(symmetric_difference.len(), 2);
//!
//! // Operands are untouched
//! assert_eq!(set_a.len(), 3);
//! assert_eq!(set_b.len(), 3);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::SetHasher;
use super::iter::{IntoValues, Values};

// =============================================================================
// Set Definition
// =============================================================================

/// A set of unique elements backed by a hash table.
///
/// Elements must implement [`Eq`] and [`Hash`]. Iteration order is
/// unspecified and must not be relied upon.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `contains`             | O(1) average      |
/// | `insert`               | O(1) average      |
/// | `remove`               | O(1) average      |
/// | `pop`                  | O(capacity) worst case |
/// | `drain`                | O(capacity)       |
/// | `len`                  | O(1)              |
/// | `clear`                | O(n)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
/// | `is_subset`            | O(n)              |
/// | `is_superset`          | O(m)              |
/// | `is_disjoint`          | O(min(n, m))      |
///
/// # Examples
///
/// ```rust
/// use sets::set::Set;
///
/// let set: Set<&str> = ["red", "green", "red"].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("green"));
/// ```
#[derive(Clone)]
pub struct Set<E> {
    data: HashSet<E, SetHasher>,
}

impl<E> Set<E> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: HashSet::with_hasher(SetHasher::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: HashSet::with_capacity_and_hasher(capacity, SetHasher::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set = Set::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// Each element is produced exactly once, in an unspecified order.
    /// The iterator is lazy: dropping it early stops the enumeration, and
    /// calling `iter` again starts a fresh, complete one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    ///
    /// let mut sum = 0;
    /// for element in set.iter() {
    ///     sum += element;
    /// }
    /// assert_eq!(sum, 6);
    ///
    /// // Early termination
    /// assert!(set.iter().any(|element| *element == 2));
    /// ```
    #[inline]
    pub fn iter(&self) -> Values<'_, E> {
        Values::new(self.data.iter())
    }

    /// Removes and returns an arbitrary element of the set.
    ///
    /// Returns `None` if the set is empty. Which element is removed is
    /// unspecified and may change between runs.
    ///
    /// # Complexity
    ///
    /// O(capacity) worst case: the table is scanned from its first bucket
    /// on every call, so emptying a set with repeated `pop` is quadratic.
    /// Use [`drain`](Self::drain) to remove every element in one pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set = Set::from([42]);
    /// assert_eq!(set.pop(), Some(42));
    /// assert!(set.is_empty());
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<E> {
        // An unexhausted `ExtractIf` keeps every element it has not yielded.
        self.data.extract_if(|_| true).next()
    }

    /// Removes all elements from the set.
    ///
    /// The set is afterwards equal to a freshly constructed empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// set.clear();
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set, Set::new());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Removes every element from the set, returning them as an iterator.
    ///
    /// The set is empty once the iterator is dropped, even if it was not
    /// fully consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// let mut drained: Vec<i32> = set.drain().collect();
    /// drained.sort_unstable();
    ///
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> hash_set::Drain<'_, E> {
        self.data.drain()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set: Set<i32> = (1..=6).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set, Set::from([2, 4, 6]));
    /// ```
    #[inline]
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&E) -> bool,
    {
        self.data.retain(predicate);
    }
}

impl<E: Eq + Hash> Set<E> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set = Set::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.contains(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was newly inserted. Inserting an
    /// element that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(7));
    /// assert!(!set.insert(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, element: E) -> bool {
        self.data.insert(element)
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent
    /// element leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let mut set = Set::from([1, 2]);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set, Set::from([2]));
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.data.remove(element)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m)): the smaller set is walked and probed against the larger.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set_a = Set::from([1, 2]);
    /// let set_b = Set::from([3, 4]);
    /// let set_c = Set::from([2, 3]);
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        smaller.iter().all(|element| !larger.contains(element))
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let subset = Set::from([1, 2]);
    /// let superset = Set::from([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// assert!(Set::new().is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let superset = Set::from([1, 2, 3]);
    /// let subset = Set::from([1, 2]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<E: Eq + Hash + Clone> Set<E> {
    /// Returns a new set with every element that is in `self`, `other`, or both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let union = Set::from([1, 2]).union(&Set::from([2, 3]));
    /// assert_eq!(union, Set::from([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut result = larger.clone();
        result.extend(smaller.iter().cloned());
        result
    }

    /// Returns a new set with the elements present in both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let intersection = Set::from([1, 2, 3]).intersection(&Set::from([2, 3, 4]));
    /// assert_eq!(intersection, Set::from([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns a new set with the elements of `self` that are not in `other`.
    ///
    /// Unlike the other operations this one is not symmetric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let set_a = Set::from([1, 2]);
    /// let set_b = Set::from([2, 3]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from([1]));
    /// assert_eq!(set_b.difference(&set_a), Set::from([3]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns a new set with the elements that are in exactly one of
    /// `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sets::set::Set;
    ///
    /// let symmetric_difference = Set::from([1, 2]).symmetric_difference(&Set::from([2, 3]));
    /// assert_eq!(symmetric_difference, Set::from([1, 3]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        result.extend(
            other
                .iter()
                .filter(|element| !self.contains(*element))
                .cloned(),
        );
        result
    }
}

/// Orders two sets so that the one with fewer elements comes first.
#[inline]
fn smaller_first<'a, E>(left: &'a Set<E>, right: &'a Set<E>) -> (&'a Set<E>, &'a Set<E>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for Set<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Eq + Hash> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E: Eq + Hash, const N: usize> From<[E; N]> for Set<E> {
    fn from(array: [E; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.extend(array);
        set
    }
}

impl<E: Eq + Hash> Extend<E> for Set<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a, E: Eq + Hash + Copy + 'a> Extend<&'a E> for Set<E> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.data.extend(iter.into_iter().copied());
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = IntoValues<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoValues::new(self.data.into_iter())
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = Values<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Eq + Hash> PartialEq for Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<E: Eq + Hash> Eq for Set<E> {}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `Set{a, b, c}` in iteration order.
///
/// The order is unspecified; use [`Set::canonical`] for sorted output.
impl<E: fmt::Display> fmt::Display for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.iter())
    }
}

/// Writes `Set{...}` with the elements separated by `", "`.
pub(super) fn write_elements<'a, E, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    E: fmt::Display + 'a,
    I: IntoIterator<Item = &'a E>,
{
    formatter.write_str("Set{")?;
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{element}")?;
    }
    formatter.write_str("}")
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl<E: Eq + Hash + Clone> BitOr<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the union of `self` and `rhs` as a new set.
    fn bitor(self, rhs: &Set<E>) -> Set<E> {
        self.union(rhs)
    }
}

impl<E: Eq + Hash + Clone> BitAnd<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    fn bitand(self, rhs: &Set<E>) -> Set<E> {
        self.intersection(rhs)
    }
}

impl<E: Eq + Hash + Clone> Sub<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the difference of `self` and `rhs` as a new set.
    fn sub(self, rhs: &Set<E>) -> Set<E> {
        self.difference(rhs)
    }
}

impl<E: Eq + Hash + Clone> BitXor<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    /// Returns the symmetric difference of `self` and `rhs` as a new set.
    fn bitxor(self, rhs: &Set<E>) -> Set<E> {
        self.symmetric_difference(rhs)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "Set{}");
    }

    #[rstest]
    fn test_display_single_element_set() {
        let set = Set::from([42]);
        assert_eq!(format!("{set}"), "Set{42}");
    }

    #[rstest]
    fn test_display_multiple_elements_set() {
        let set = Set::from([1, 2, 3]);
        let display = format!("{set}");
        // Unordered, so only the frame and the members are checked
        assert!(display.starts_with("Set{"));
        assert!(display.ends_with('}'));
        assert!(display.contains('1'));
        assert!(display.contains('2'));
        assert!(display.contains('3'));
        assert_eq!(display.matches(", ").count(), 2);
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set = Set::from([7]);
        assert_eq!(format!("{set:?}"), "{7}");
    }

    // =========================================================================
    // Mutation Tests
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_insert_reports_novelty() {
        let mut set = Set::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut set = Set::from([1]);
        assert!(!set.remove(&2));
        assert_eq!(set, Set::from([1]));
    }

    #[rstest]
    fn test_pop_removes_exactly_one() {
        let mut set = Set::from([1, 2, 3]);
        let popped = set.pop().unwrap();

        assert_eq!(set.len(), 2);
        assert!(!set.contains(&popped));
        assert!([1, 2, 3].contains(&popped));
    }

    #[rstest]
    fn test_pop_drains_to_empty() {
        let mut set: Set<i32> = (0..10).collect();
        let mut popped = Vec::new();
        while let Some(element) = set.pop() {
            popped.push(element);
        }
        popped.sort_unstable();

        assert_eq!(popped, (0..10).collect::<Vec<_>>());
        assert!(set.is_empty());
        assert_eq!(set.pop(), None);
    }

    #[rstest]
    fn test_drain_removes_same_elements_as_repeated_pop() {
        let source: Set<i32> = (0..2_000).collect();

        let mut popped_set = source.clone();
        let mut popped = Vec::with_capacity(source.len());
        while let Some(element) = popped_set.pop() {
            popped.push(element);
        }
        popped.sort_unstable();

        let mut drained_set = source.clone();
        let capacity = drained_set.capacity();
        let mut drained: Vec<i32> = drained_set.drain().collect();
        drained.sort_unstable();

        assert_eq!(popped, drained);
        assert!(popped_set.is_empty());
        assert!(drained_set.is_empty());
        // Draining keeps the allocation for reuse
        assert_eq!(drained_set.capacity(), capacity);
    }

    #[rstest]
    fn test_clear_keeps_set_usable() {
        let mut set = Set::from([1, 2]);
        set.clear();
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert_eq!(set, Set::from([3]));
    }

    #[rstest]
    fn test_extend_with_references() {
        let mut set = Set::from([1]);
        set.extend(&[1, 2, 3]);
        assert_eq!(set, Set::from([1, 2, 3]));
    }

    // =========================================================================
    // Algebra Tests
    // =========================================================================

    #[rstest]
    fn test_union() {
        let union = Set::from([1, 2]).union(&Set::from([2, 3]));
        assert_eq!(union, Set::from([1, 2, 3]));
    }

    #[rstest]
    fn test_intersection() {
        let intersection = Set::from([1, 2, 3]).intersection(&Set::from([2, 3, 4]));
        assert_eq!(intersection, Set::from([2, 3]));
    }

    #[rstest]
    fn test_difference() {
        let difference = Set::from([1, 2, 3]).difference(&Set::from([2, 3, 4]));
        assert_eq!(difference, Set::from([1]));
    }

    #[rstest]
    fn test_symmetric_difference() {
        let symmetric_difference =
            Set::from([1, 2, 3]).symmetric_difference(&Set::from([2, 3, 4]));
        assert_eq!(symmetric_difference, Set::from([1, 4]));
    }

    #[rstest]
    fn test_operators_match_methods() {
        let set_a = Set::from([1, 2]);
        let set_b = Set::from([2, 3]);

        assert_eq!(&set_a | &set_b, set_a.union(&set_b));
        assert_eq!(&set_a & &set_b, set_a.intersection(&set_b));
        assert_eq!(&set_a - &set_b, set_a.difference(&set_b));
        assert_eq!(&set_a ^ &set_b, set_a.symmetric_difference(&set_b));
    }

    #[rstest]
    fn test_union_result_is_independent() {
        let set_a = Set::from([1]);
        let set_b = Set::from([2]);
        let mut union = set_a.union(&set_b);
        union.insert(3);

        assert_eq!(set_a, Set::from([1]));
        assert_eq!(set_b, Set::from([2]));
    }

    // =========================================================================
    // Predicate Tests
    // =========================================================================

    #[rstest]
    #[case(&[], &[1, 2], true)]
    #[case(&[1], &[1, 2], true)]
    #[case(&[1, 2], &[1, 2], true)]
    #[case(&[1, 3], &[1, 2], false)]
    #[case(&[1, 2, 3], &[1, 2], false)]
    fn test_is_subset(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
        let left: Set<i32> = left.iter().copied().collect();
        let right: Set<i32> = right.iter().copied().collect();
        assert_eq!(left.is_subset(&right), expected);
        assert_eq!(right.is_superset(&left), expected);
    }

    #[rstest]
    #[case(&[], &[], true)]
    #[case(&[1, 2], &[3, 4], true)]
    #[case(&[1, 2], &[2, 3, 4, 5], false)]
    #[case(&[1, 2, 3, 4, 5], &[5], false)]
    fn test_is_disjoint(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: bool) {
        let left: Set<i32> = left.iter().copied().collect();
        let right: Set<i32> = right.iter().copied().collect();
        assert_eq!(left.is_disjoint(&right), expected);
        assert_eq!(right.is_disjoint(&left), expected);
    }

    #[rstest]
    fn test_eq_ignores_insertion_order() {
        let mut set1 = Set::new();
        set1.insert(1);
        set1.insert(2);
        set1.insert(3);
        let set2: Set<i32> = [3, 1, 2].into_iter().collect();

        assert_eq!(set1, set2);
    }

    #[rstest]
    fn test_eq_differs_on_membership() {
        assert_ne!(Set::from([1, 2]), Set::from([1, 3]));
        assert_ne!(Set::from([1, 2]), Set::from([1]));
    }
}
