use super::{Cursor, InvariantViolation, Tree};
use std::borrow::Borrow;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

/// A sorted set of values backed by an AA-tree.
///
/// We aim for the API to be familiar to users of
/// [`std::collections::BTreeSet`], with C++-style positional queries on top:
/// [`begin`](AaSet::begin), [`end`](AaSet::end), [`find`](AaSet::find) and
/// [`lower_bound`](AaSet::lower_bound) return [`Cursor`]s that step through
/// the set in either direction.
///
/// [AA-trees](https://en.wikipedia.org/wiki/AA_tree) are a simplification of
/// red-black trees.  Every node carries a level instead of a color, and two
/// rotations (skew and split) keep the levels consistent after each update, so
/// insertion, removal and lookup take `O(log n)` time.
///
/// Elements are compared with [`Ord`] only; two elements are the same element
/// when they compare `Equal`.  Inserting an element equal to one already in
/// the set leaves the original in place.
///
/// Cloning a set copies every node; the copy shares nothing with the original.
pub struct AaSet<T> {
    tree: Tree<T>,
}

impl<T> AaSet<T> {
    /// Returns a new, empty set.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let s: AaSet<u32> = AaSet::new();
    /// assert!(s.is_empty());
    /// assert_eq!(s.begin(), s.end());
    /// ```
    pub fn new() -> Self {
        AaSet { tree: Tree::new() }
    }

    /// Returns the number of elements in self.
    pub fn len(&self) -> usize {
        self.tree.len
    }

    /// Returns true if self is the empty set, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.tree.len == 0
    }

    /// Removes all the elements from self.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns a cursor at the least element, or the end position if self is
    /// empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::at_or_end(&self.tree, self.tree.first)
    }

    /// Returns the one-past-the-last position.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(&self.tree)
    }

    /// Returns the least element in self.
    pub fn first(&self) -> Option<&T> {
        self.tree.first.map(|n| self.tree.value(n))
    }

    /// Returns the greatest element in self.
    pub fn last(&self) -> Option<&T> {
        self.tree.last.map(|n| self.tree.value(n))
    }

    /// Returns an iterator over self's elements in sorted order.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let s = AaSet::from([5, 3, 8, 1, 4]);
    /// assert!(s.iter().eq([1, 3, 4, 5, 8].iter()));
    /// assert!(s.iter().rev().eq([8, 5, 4, 3, 1].iter()));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.begin(),
            back: self.end(),
            len: self.len(),
        }
    }
}

impl<T: Ord> AaSet<T> {
    /// Inserts the given value and returns true if self did not already have
    /// the value and returns false otherwise.
    ///
    /// An equal element already in the set is kept, and value is dropped.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let mut s = AaSet::new();
    /// assert!(s.insert(10));
    /// assert!(!s.insert(10));
    /// assert_eq!(s.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Removes the given value from self returning true if the value was
    /// present and false otherwise.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let mut s = AaSet::from([10]);
    /// assert!(s.remove(&10));
    /// assert!(!s.remove(&10));
    /// assert!(s.is_empty());
    /// assert_eq!(s.begin(), s.end());
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value).is_some()
    }

    /// Removes and returns the set member that matches value.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value)
    }

    /// Removes and returns the least element in self.
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    /// Removes and returns the greatest element in self.
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    /// Tests if self contains the given value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(value).is_some()
    }

    /// Returns a reference to the element matching value, if it exists.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(value).map(|n| self.tree.value(n))
    }

    /// Returns a cursor at the element matching value, or the end position if
    /// there is none.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let s = AaSet::from([1, 4, 5, 8]);
    /// assert_eq!(s.find(&4).get(), Some(&4));
    /// assert_eq!(s.find(&3), s.end());
    /// ```
    pub fn find<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::at_or_end(&self.tree, self.tree.find(value))
    }

    /// Returns a cursor at the least element not less than value, or the end
    /// position if every element is less than value.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let s = AaSet::from([1, 4, 5, 8]);
    /// assert_eq!(s.lower_bound(&6).get(), Some(&8));
    /// assert_eq!(s.lower_bound(&5).get(), Some(&5));
    /// assert_eq!(s.lower_bound(&9), s.end());
    /// ```
    pub fn lower_bound<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::at_or_end(&self.tree, self.tree.lower_bound(value))
    }

    /// Returns a cursor at the least element greater than value, or the end
    /// position if there is none.
    pub fn upper_bound<Q>(&self, value: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::at_or_end(&self.tree, self.tree.upper_bound(value))
    }

    /// Returns a double-ended iterator over the elements of self within the
    /// given range.
    ///
    /// # Panics
    /// Panics if the start of the range is greater than its end, or if start
    /// and end are equal and both excluded.
    ///
    /// # Examples
    /// ```
    /// use aa_set::AaSet;
    ///
    /// let s = AaSet::from_iter(0..10);
    /// assert!(s.range(3..6).eq([3, 4, 5].iter()));
    /// assert!(s.range(..=2).rev().eq([2, 1, 0].iter()));
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
        R: RangeBounds<Q>,
    {
        use Bound::*;

        match (range.start_bound(), range.end_bound()) {
            (Excluded(s), Excluded(e)) if s == e => {
                panic!("range start and end are equal and excluded in AaSet")
            }
            (Included(s) | Excluded(s), Included(e) | Excluded(e)) if s > e => {
                panic!("range start is greater than range end in AaSet")
            }
            _ => (),
        }

        let front = match range.start_bound() {
            Unbounded => self.begin(),
            Included(s) => self.lower_bound(s),
            Excluded(s) => self.upper_bound(s),
        };

        let back = match range.end_bound() {
            Unbounded => self.end(),
            Included(e) => self.upper_bound(e),
            Excluded(e) => self.lower_bound(e),
        };

        Range { front, back }
    }

    /// Retain values for which f returns true and discard others.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let old = std::mem::take(self);
        self.extend(old.into_iter().filter(|v| f(v)));
    }

    /// Verifies the AA-tree invariants, the element order, the parent links
    /// and the cached length and extremes, and reports the first violation.
    ///
    /// Every operation of this crate maintains these; the check exists for
    /// tests and debugging.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        self.tree.check()
    }
}

impl<T: Clone> Clone for AaSet<T> {
    fn clone(&self) -> Self {
        AaSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T> Default for AaSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for AaSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for AaSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AaSet<T> {}

impl<T: PartialOrd> PartialOrd for AaSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for AaSet<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for AaSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T: Ord> Extend<T> for AaSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for AaSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord> FromIterator<T> for AaSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = AaSet::new();
        s.extend(iter);
        s
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AaSet<T> {
    fn from(vs: [T; N]) -> Self {
        AaSet::from_iter(vs)
    }
}

impl<'a, T> IntoIterator for &'a AaSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for AaSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.tree.into_sorted_vec().into_iter(),
        }
    }
}

/// An iterator over the elements of an [`AaSet`] in sorted order.
///
/// The iterator holds a cursor at each end and meets in the middle.
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let v = self.front.get();
        self.front.move_next();
        v
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        self.back.move_prev();
        self.back.get()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

/// An iterator over a sub-range of an [`AaSet`], created by
/// [`AaSet::range`].
pub struct Range<'a, T> {
    front: Cursor<'a, T>,
    // one past the last element of the range
    back: Cursor<'a, T>,
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let v = self.front.get();
        self.front.move_next();
        v
    }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back.move_prev();
        self.back.get()
    }
}

impl<'a, T> FusedIterator for Range<'a, T> {}

impl<'a, T> Clone for Range<'a, T> {
    fn clone(&self) -> Self {
        Range {
            front: self.front,
            back: self.back,
        }
    }
}

/// An owning iterator over the elements of an [`AaSet`] in sorted order.
pub struct IntoIter<T> {
    iter: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
