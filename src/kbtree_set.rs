use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::RangeBounds;

use alloc::vec;

use crate::error::Result;
use crate::order::Order;
use crate::position::{Position, Slot};
use crate::raw::RawKBTree;

/// An ordered set based on a B-tree whose order is chosen at construction.
///
/// Every node holds between [`Order::min_keys`] and [`Order::max_keys`] keys (the root may hold
/// fewer), so the height of the tree stays logarithmic in the number of elements. Besides the
/// usual set operations the set offers nearest-neighbour queries
/// ([`predecessor`](KBTreeSet::predecessor), [`successor`](KBTreeSet::successor)) and explicit
/// [`Position`] cursors that can be stepped in both directions.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set.
///
/// # Examples
///
/// ```
/// use kbtree::KBTreeSet;
///
/// let mut set = KBTreeSet::with_order(5).unwrap();
/// for value in [10, 20, 5, 6, 12, 30, 7, 17] {
///     set.insert(value);
/// }
///
/// assert!(set.contains(&6));
/// assert_eq!(set.predecessor(&11), Ok(&10));
/// assert_eq!(set.successor(&11), Ok(&12));
/// assert!(set.range(6..=17).copied().eq([6, 7, 10, 12, 17]));
///
/// set.remove(&10);
/// assert!(set.iter().copied().eq([5, 6, 7, 12, 17, 20, 30]));
/// ```
pub struct KBTreeSet<T> {
    raw: RawKBTree<T>,
}

/// An iterator over the items of a `KBTreeSet`.
///
/// This `struct` is created by the [`iter`] method on [`KBTreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use kbtree::KBTreeSet;
///
/// let set = KBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: KBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    raw: &'a RawKBTree<T>,
    front: Position,
    back: Position,
    remaining: usize,
}

/// An iterator over a sub-range of items in a `KBTreeSet`.
///
/// This `struct` is created by the [`range`] method on [`KBTreeSet`].
/// See its documentation for more.
///
/// [`range`]: KBTreeSet::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, T> {
    raw: &'a RawKBTree<T>,
    // Inclusive ends; `None` once the two ends have met.
    bounds: Option<(Slot, Slot)>,
}

/// An owning iterator over the items of a `KBTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`KBTreeSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: KBTreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> KBTreeSet<T> {
    /// Makes a new, empty `KBTreeSet` with [`Order::DEFAULT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::{KBTreeSet, Order};
    ///
    /// let mut set = KBTreeSet::new();
    /// set.insert(1);
    /// assert_eq!(set.order(), Order::DEFAULT);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn new() -> KBTreeSet<T> {
        KBTreeSet::with_validated_order(Order::DEFAULT)
    }

    /// Makes a new, empty `KBTreeSet` whose nodes have at most `order` children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderTooSmall`](crate::Error::OrderTooSmall) if `order < 3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::{Error, KBTreeSet};
    ///
    /// let set: KBTreeSet<i32> = KBTreeSet::with_order(4).unwrap();
    /// assert_eq!(set.order().get(), 4);
    ///
    /// assert_eq!(
    ///     KBTreeSet::<i32>::with_order(2).err(),
    ///     Some(Error::OrderTooSmall { order: 2, min: 3 })
    /// );
    /// ```
    pub fn with_order(order: usize) -> Result<KBTreeSet<T>> {
        Ok(KBTreeSet::with_validated_order(Order::new(order)?))
    }

    /// Makes a new, empty `KBTreeSet` from an already validated [`Order`].
    #[must_use]
    pub fn with_validated_order(order: Order) -> KBTreeSet<T> {
        KBTreeSet {
            raw: RawKBTree::new(order),
        }
    }

    /// Returns the order this set was created with.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.raw.order()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let mut a = KBTreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of node levels in the tree, or 0 for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let mut set = KBTreeSet::with_order(3).unwrap();
    /// assert_eq!(set.height(), 0);
    /// set.extend([1, 2]);
    /// assert_eq!(set.height(), 1);
    /// set.insert(3);
    /// assert_eq!(set.height(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Clears the set, removing all elements. The order is kept.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator that visits the elements in the set in ascending order.
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; each step is O(1) amortized and O(log n) worst case.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: &self.raw,
            front: self.raw.begin(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Returns the position of the minimum element, or [`Position::End`] if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn begin(&self) -> Position {
        self.raw.begin()
    }

    /// Returns the position of the maximum element, or [`Position::ReverseEnd`] if the set is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Position {
        self.raw.last()
    }

    /// Returns the past-the-maximum sentinel.
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::End
    }

    /// Returns the before-the-minimum sentinel.
    #[must_use]
    pub const fn reverse_end(&self) -> Position {
        Position::ReverseEnd
    }

    /// Returns the position following `position` in ascending order.
    ///
    /// Advancing the maximum yields [`Position::End`], advancing `End` yields `End` again, and
    /// advancing [`Position::ReverseEnd`] yields [`begin`](KBTreeSet::begin).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnElement`](crate::Error::NotAnElement) if `position` names a slot
    /// that no longer holds an element. A position invalidated by a mutation may instead land on
    /// a live slot and step from a different element.
    ///
    /// # Complexity
    ///
    /// O(1) amortized, O(log n) worst case.
    pub fn advance(&self, position: Position) -> Result<Position> {
        self.raw.advance(position)
    }

    /// Returns the position preceding `position` in ascending order.
    ///
    /// Retreating from the minimum yields [`Position::ReverseEnd`], retreating from `ReverseEnd`
    /// yields `ReverseEnd` again, and retreating from [`Position::End`] yields
    /// [`last`](KBTreeSet::last).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnElement`](crate::Error::NotAnElement) if `position` names a slot
    /// that no longer holds an element. A position invalidated by a mutation may instead land on
    /// a live slot and step from a different element.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::{KBTreeSet, Position};
    ///
    /// let set = KBTreeSet::from([1, 2, 3]);
    /// let mut position = set.end();
    /// let mut seen = Vec::new();
    /// loop {
    ///     position = set.retreat(position).unwrap();
    ///     if position == Position::ReverseEnd {
    ///         break;
    ///     }
    ///     seen.push(*set.get(position).unwrap());
    /// }
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    pub fn retreat(&self, position: Position) -> Result<Position> {
        self.raw.retreat(position)
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnElement`](crate::Error::NotAnElement) for the sentinels and for
    /// positions invalidated by a mutation when the stale slot is detectable. A stale position
    /// that still names a live slot may read a different element.
    pub fn get(&self, position: Position) -> Result<&T> {
        self.raw.get(position)
    }

    /// Returns the minimum element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`](crate::Error::Empty) if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::{Error, KBTreeSet};
    ///
    /// let mut set = KBTreeSet::new();
    /// assert_eq!(set.first_value(), Err(Error::Empty));
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.first_value(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn first_value(&self) -> Result<&T> {
        self.raw.min()
    }

    /// Returns the maximum element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`](crate::Error::Empty) if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let set = KBTreeSet::from([3, 9, 4]);
    /// assert_eq!(set.last_value(), Ok(&9));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn last_value(&self) -> Result<&T> {
        self.raw.max()
    }
}

impl<T: Ord> KBTreeSet<T> {
    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. If the set already contained an equal
    /// value, `false` is returned and the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let mut set = KBTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let mut set = KBTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value)
    }

    /// Returns `true` if the set contains a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let set = KBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(value)
    }

    /// Returns a reference to the value in the set, if any, that is equal to the given value.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get_value<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key(value)
    }

    /// Returns the greatest element less than or equal to `value`.
    ///
    /// If every element is greater than `value`, the minimum is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`](crate::Error::Empty) if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let set = KBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.predecessor(&20), Ok(&20));
    /// assert_eq!(set.predecessor(&25), Ok(&20));
    /// assert_eq!(set.predecessor(&5), Ok(&10));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn predecessor<Q>(&self, value: &Q) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.predecessor(value)
    }

    /// Returns the least element greater than or equal to `value`.
    ///
    /// If every element is less than `value`, the maximum is returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`](crate::Error::Empty) if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let set = KBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.successor(&20), Ok(&20));
    /// assert_eq!(set.successor(&25), Ok(&30));
    /// assert_eq!(set.successor(&35), Ok(&30));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn successor<Q>(&self, value: &Q) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.successor(value)
    }

    /// Constructs a double-ended iterator over a sub-range of elements in the set.
    ///
    /// `range(low..=high)` yields every element `e` with `low <= e <= high` in ascending order.
    /// Exclusive and unbounded ends work as with the standard collections. Unlike
    /// `std::collections::BTreeSet::range`, an inverted range is not an error: it yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::Bound::{Excluded, Included};
    /// use kbtree::KBTreeSet;
    ///
    /// let set = KBTreeSet::from([3, 5, 8]);
    /// assert!(set.range(4..=8).copied().eq([5, 8]));
    /// assert!(set.range((Excluded(3), Included(8))).copied().eq([5, 8]));
    /// assert_eq!(set.range(4..).next(), Some(&5));
    /// assert_eq!(set.range(9..1).next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the iterator; each step is O(1) amortized.
    pub fn range<Q, R>(&self, range: R) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        Range {
            raw: &self.raw,
            bounds: self.raw.range_positions::<Q, R>(&range),
        }
    }

    /// Removes and returns the minimum element, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let mut set = KBTreeSet::from([1, 2]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.pop_first()
    }

    /// Removes and returns the maximum element, if any.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.pop_last()
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let mut set: KBTreeSet<i32> = (0..8).collect();
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.into_iter().eq([0, 2, 4, 6]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for value in self.raw.drain_to_vec() {
            if f(&value) {
                self.raw.insert(value);
            }
        }
    }
}

impl<T: Hash> Hash for KBTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for KBTreeSet<T> {
    fn eq(&self, other: &KBTreeSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for KBTreeSet<T> {}

impl<T: PartialOrd> PartialOrd for KBTreeSet<T> {
    fn partial_cmp(&self, other: &KBTreeSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for KBTreeSet<T> {
    fn cmp(&self, other: &KBTreeSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for KBTreeSet<T> {
    fn clone(&self) -> Self {
        KBTreeSet { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for KBTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for KBTreeSet<T> {
    fn default() -> Self {
        KBTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for KBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = KBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for KBTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for KBTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for KBTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for KBTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `KBTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbtree::KBTreeSet;
    ///
    /// let set = KBTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a KBTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let Position::At(slot) = self.front else {
            return None;
        };
        self.remaining -= 1;
        self.front = self.raw.successor_of(slot);
        Some(self.raw.key(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let Position::At(slot) = self.back else {
            return None;
        };
        self.remaining -= 1;
        self.back = self.raw.predecessor_of(slot);
        Some(self.raw.key(slot))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (front, back) = self.bounds?;
        self.bounds = if front == back {
            None
        } else {
            self.raw.successor_of(front).slot().map(|next| (next, back))
        };
        Some(self.raw.key(front))
    }
}

impl<'a, T> DoubleEndedIterator for Range<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        let (front, back) = self.bounds?;
        self.bounds = if front == back {
            None
        } else {
            self.raw.predecessor_of(back).slot().map(|prev| (front, prev))
        };
        Some(self.raw.key(back))
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Range { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
