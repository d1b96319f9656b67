use core::borrow::Borrow;
use core::mem;

use smallvec::SmallVec;

use super::handle::Handle;
use crate::order::Order;

// Nodes of the default order, including the transient overflow key, never spill to the heap.
pub(crate) const INLINE_KEYS: usize = Order::DEFAULT.get();
pub(crate) const INLINE_CHILDREN: usize = INLINE_KEYS + 1;

pub(crate) type Keys<T> = SmallVec<[T; INLINE_KEYS]>;
pub(crate) type Children = SmallVec<[Handle; INLINE_CHILDREN]>;

/// A B-tree node.
///
/// The length of `keys` is the node's degree. A leaf has no children; an internal node always
/// has exactly one more child than it has keys. Between operations the degree stays below the
/// tree's order; it reaches the order only for the duration of a split.
#[derive(Clone)]
pub(crate) struct Node<T> {
    keys: Keys<T>,
    children: Children,
    // Non-owning link back to the parent; `None` for the root.
    parent: Option<Handle>,
    // Position of this node within `parent.children`.
    child_index: usize,
}

/// Result of searching for a key in a node.
pub(crate) enum SearchResult {
    /// Key was found at the given index.
    Found(usize),
    /// Key was not found; the index is the first key greater than it, which is also the child to
    /// descend into.
    NotFound(usize),
}

impl<T> Node<T> {
    /// Creates an empty root.
    pub(crate) fn new() -> Self {
        Self {
            keys: SmallVec::new(),
            children: SmallVec::new(),
            parent: None,
            child_index: 0,
        }
    }

    /// Creates a node holding the right half of a split.
    pub(crate) fn with_contents(keys: Keys<T>, children: Children, parent: Handle, child_index: usize) -> Self {
        Self {
            keys,
            children,
            parent: Some(parent),
            child_index,
        }
    }

    /// Returns the number of keys in this node.
    #[inline]
    pub(crate) fn degree(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn child_index(&self) -> usize {
        self.child_index
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>, child_index: usize) {
        self.parent = parent;
        self.child_index = child_index;
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &T {
        &self.keys[index]
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> &[T] {
        &self.keys
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> Handle {
        self.children[index]
    }

    /// Returns the child at `index`, or `None` for leaves and out-of-range indices.
    #[inline]
    pub(crate) fn try_child(&self, index: usize) -> Option<Handle> {
        self.children.get(index).copied()
    }

    #[cfg(test)]
    pub(crate) fn children(&self) -> &[Handle] {
        &self.children
    }

    /// Binary searches this node's keys.
    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> SearchResult
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.keys.binary_search_by(|k| k.borrow().cmp(key)) {
            Ok(idx) => SearchResult::Found(idx),
            Err(idx) => SearchResult::NotFound(idx),
        }
    }

    /// Shifts keys at and after `index` right by one and stores `key` at `index`.
    pub(crate) fn insert_key(&mut self, index: usize, key: T) {
        self.keys.insert(index, key);
    }

    /// Removes the key at `index`, shifting later keys left by one.
    pub(crate) fn remove_key(&mut self, index: usize) -> T {
        self.keys.remove(index)
    }

    /// Overwrites the key at `index` and returns the previous one.
    pub(crate) fn replace_key(&mut self, index: usize, key: T) -> T {
        mem::replace(&mut self.keys[index], key)
    }

    /// Shifts children at and after `index` right by one and stores `child` at `index`.
    ///
    /// The caller is responsible for updating the `child_index` of every shifted child.
    pub(crate) fn insert_child(&mut self, index: usize, child: Handle) {
        self.children.insert(index, child);
    }

    /// Removes the child at `index`, shifting later children left by one.
    pub(crate) fn remove_child(&mut self, index: usize) -> Handle {
        self.children.remove(index)
    }

    /// Prepends a key and, for internal nodes, the child to its left.
    pub(crate) fn push_front(&mut self, key: T, child: Option<Handle>) {
        self.keys.insert(0, key);
        if let Some(child) = child {
            self.children.insert(0, child);
        }
    }

    /// Appends a key and, for internal nodes, the child to its right.
    pub(crate) fn push_back(&mut self, key: T, child: Option<Handle>) {
        self.keys.push(key);
        if let Some(child) = child {
            self.children.push(child);
        }
    }

    /// Removes the first key together with the first child, if any.
    pub(crate) fn pop_front(&mut self) -> (T, Option<Handle>) {
        assert!(!self.keys.is_empty(), "`Node::pop_front()` - node has no keys!");
        let key = self.keys.remove(0);
        let child = if self.is_leaf() {
            None
        } else {
            Some(self.children.remove(0))
        };
        (key, child)
    }

    /// Removes the last key together with the last child, if any.
    pub(crate) fn pop_back(&mut self) -> (T, Option<Handle>) {
        let key = self.keys.pop().expect("`Node::pop_back()` - node has no keys!");
        (key, self.children.pop())
    }

    /// Splits this node around the key at `median`.
    ///
    /// This node keeps keys `[0, median)` and children `[0, median]`. The median key is returned
    /// together with keys `(median, degree)` and the remaining children, which belong to the new
    /// right sibling.
    pub(crate) fn split_off(&mut self, median: usize) -> (T, Keys<T>, Children) {
        let right_keys: Keys<T> = self.keys.drain(median + 1..).collect();
        let median_key = self.keys.pop().expect("`Node::split_off()` - `median` is out of range!");
        let right_children: Children = if self.is_leaf() {
            SmallVec::new()
        } else {
            self.children.drain(median + 1..).collect()
        };
        (median_key, right_keys, right_children)
    }

    /// Appends `separator` and then every key and child of `right`.
    ///
    /// The caller is responsible for reparenting the moved children.
    pub(crate) fn absorb(&mut self, separator: T, right: Node<T>) {
        self.keys.push(separator);
        self.keys.extend(right.keys);
        self.children.extend(right.children);
    }

    /// Consumes the node, returning its keys and children.
    pub(crate) fn into_contents(self) -> (Keys<T>, Children) {
        (self.keys, self.children)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn leaf(keys: &[i32]) -> Node<i32> {
        let mut node = Node::new();
        for (i, &k) in keys.iter().enumerate() {
            node.insert_key(i, k);
        }
        node
    }

    fn handles(range: core::ops::Range<usize>) -> Children {
        range.map(Handle::from_index).collect()
    }

    #[test]
    fn search_reports_insertion_point() {
        let node = leaf(&[10, 20, 30]);
        assert!(matches!(node.search(&20), SearchResult::Found(1)));
        assert!(matches!(node.search(&5), SearchResult::NotFound(0)));
        assert!(matches!(node.search(&25), SearchResult::NotFound(2)));
        assert!(matches!(node.search(&35), SearchResult::NotFound(3)));
    }

    #[test]
    fn insert_and_remove_shift_keys() {
        let mut node = leaf(&[10, 30]);
        node.insert_key(1, 20);
        assert_eq!(node.keys(), &[10, 20, 30]);
        assert_eq!(node.remove_key(0), 10);
        assert_eq!(node.keys(), &[20, 30]);
        assert_eq!(node.replace_key(1, 40), 30);
        assert_eq!(node.keys(), &[20, 40]);
        assert_eq!(node.degree(), 2);
    }

    #[test]
    fn split_off_leaf() {
        let mut node = leaf(&[1, 2, 3, 4, 5]);
        let (median, keys, children) = node.split_off(2);
        assert_eq!(median, 3);
        assert_eq!(node.keys(), &[1, 2]);
        assert_eq!(keys.as_slice(), &[4, 5]);
        assert!(children.is_empty());
    }

    #[test]
    fn split_off_internal_with_even_order() {
        // Order 4: four keys and five children at overflow, lower median at index 1.
        let mut node = Node::with_contents(
            [1, 2, 3, 4].into_iter().collect(),
            handles(0..5),
            Handle::from_index(9),
            0,
        );
        let (median, keys, children) = node.split_off(1);
        assert_eq!(median, 2);
        assert_eq!(node.keys(), &[1]);
        assert_eq!(node.children(), handles(0..2).as_slice());
        assert_eq!(keys.as_slice(), &[3, 4]);
        assert_eq!(children, handles(2..5));
    }

    #[test]
    fn push_and_pop_move_edge_children() {
        let mut node = Node::with_contents([10, 20].into_iter().collect(), handles(0..3), Handle::from_index(9), 1);
        let (key, child) = node.pop_front();
        assert_eq!((key, child), (10, Some(Handle::from_index(0))));
        let (key, child) = node.pop_back();
        assert_eq!((key, child), (20, Some(Handle::from_index(2))));
        assert_eq!(node.degree(), 0);
        assert_eq!(node.child_count(), 1);

        node.push_front(5, Some(Handle::from_index(7)));
        node.push_back(25, Some(Handle::from_index(8)));
        assert_eq!(node.keys(), &[5, 25]);
        assert_eq!(
            node.children(),
            &[Handle::from_index(7), Handle::from_index(1), Handle::from_index(8)]
        );
    }

    #[test]
    fn leaf_pops_have_no_children() {
        let mut node = leaf(&[1, 2, 3]);
        assert_eq!(node.pop_front(), (1, None));
        assert_eq!(node.pop_back(), (3, None));
        assert!(node.is_leaf());
    }

    #[test]
    #[should_panic(expected = "`Node::pop_back()` - node has no keys!")]
    fn pop_back_empty_panics() {
        let mut node: Node<i32> = Node::new();
        node.pop_back();
    }

    #[test]
    fn absorb_appends_separator_then_right() {
        let mut left = Node::with_contents([1].into_iter().collect(), handles(0..2), Handle::from_index(9), 0);
        let right = Node::with_contents([5, 6].into_iter().collect(), handles(2..5), Handle::from_index(9), 1);
        left.absorb(3, right);
        assert_eq!(left.keys(), &[1, 3, 5, 6]);
        assert_eq!(left.children(), handles(0..5).as_slice());
        assert_eq!(left.parent(), Some(Handle::from_index(9)));
        assert_eq!(left.child_index(), 0);
    }

    #[test]
    fn large_orders_spill_transparently() {
        let mut node = Node::new();
        for i in 0..(INLINE_KEYS * 4) {
            node.insert_key(i, i);
        }
        assert_eq!(node.degree(), INLINE_KEYS * 4);
        let (median, keys, _) = node.split_off(INLINE_KEYS * 2);
        assert_eq!(median, INLINE_KEYS * 2);
        assert_eq!(keys.len(), INLINE_KEYS * 2 - 1);
    }
}
