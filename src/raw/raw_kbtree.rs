use core::borrow::Borrow;
use core::ops::{Bound, RangeBounds};

use alloc::vec::Vec;
use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, SearchResult};
use crate::error::{Error, Result};
use crate::order::Order;
use crate::position::{Position, Slot};

/// The core B-tree implementation backing `KBTreeSet`.
#[derive(Clone)]
pub(crate) struct RawKBTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// The root always exists; an empty tree has an empty leaf root.
    root: Handle,
    /// Total number of keys across all nodes.
    len: usize,
    order: Order,
}

/// Where a key lives, or where it would be inserted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Located {
    /// The key is stored at this slot.
    Found(Slot),
    /// The key is absent. The slot is in a leaf and may equal the leaf's degree.
    Vacant(Slot),
}

impl<T> RawKBTree<T> {
    /// Creates a new, empty tree.
    pub(crate) fn new(order: Order) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new());
        Self {
            nodes,
            root,
            len: 0,
            order,
        }
    }

    pub(crate) const fn order(&self) -> Order {
        self.order
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.alloc(Node::new());
        self.len = 0;
    }

    /// Returns the number of levels, counting the root as one. An empty tree has height 0.
    pub(crate) fn height(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut height = 1;
        let mut current = self.root;
        while let Some(child) = self.nodes.get(current).try_child(0) {
            current = child;
            height += 1;
        }
        height
    }

    /// Returns the key at a slot produced by this tree since its last mutation.
    #[inline]
    pub(crate) fn key(&self, slot: Slot) -> &T {
        self.nodes.get(slot.node).key(slot.index)
    }

    /// Returns the key at `slot` if it still names a stored key.
    pub(crate) fn try_key(&self, slot: Slot) -> Option<&T> {
        let node = self.nodes.try_get(slot.node)?;
        (slot.index < node.degree()).then(|| node.key(slot.index))
    }

    /// Reads the element at `position`.
    pub(crate) fn get(&self, position: Position) -> Result<&T> {
        position
            .slot()
            .and_then(|slot| self.try_key(slot))
            .ok_or(Error::NotAnElement(position))
    }

    /// Returns the position of the minimum, or `End` for an empty tree.
    pub(crate) fn begin(&self) -> Position {
        if self.is_empty() {
            return Position::End;
        }
        let mut current = self.root;
        while let Some(child) = self.nodes.get(current).try_child(0) {
            current = child;
        }
        Position::At(Slot::new(current, 0))
    }

    /// Returns the position of the maximum, or `ReverseEnd` for an empty tree.
    pub(crate) fn last(&self) -> Position {
        if self.is_empty() {
            return Position::ReverseEnd;
        }
        Position::At(self.rightmost(self.root))
    }

    /// Descends rightmost children from `from` down to a leaf and returns its last slot.
    fn rightmost(&self, from: Handle) -> Slot {
        let mut current = from;
        loop {
            let node = self.nodes.get(current);
            match node.try_child(node.degree()) {
                Some(child) => current = child,
                None => return Slot::new(current, node.degree() - 1),
            }
        }
    }

    /// Returns the in-order successor of `slot`.
    ///
    /// `slot` may also be a vacant leaf slot equal to the leaf's degree, in which case the result
    /// is the first key after that leaf.
    pub(crate) fn successor_of(&self, slot: Slot) -> Position {
        let node = self.nodes.get(slot.node);

        if let Some(child) = node.try_child(slot.index + 1) {
            let mut current = child;
            while let Some(child) = self.nodes.get(current).try_child(0) {
                current = child;
            }
            return Position::At(Slot::new(current, 0));
        }

        if slot.index + 1 < node.degree() {
            return Position::At(Slot::new(slot.node, slot.index + 1));
        }

        // Climb while we are the last child of our parent.
        let mut current = slot.node;
        loop {
            let node = self.nodes.get(current);
            let Some(parent) = node.parent() else {
                return Position::End;
            };
            if node.child_index() < self.nodes.get(parent).degree() {
                return Position::At(Slot::new(parent, node.child_index()));
            }
            current = parent;
        }
    }

    /// Returns the in-order predecessor of `slot`.
    ///
    /// `slot` may also be a vacant leaf slot, in which case the result is the greatest key less
    /// than whatever would be inserted there.
    pub(crate) fn predecessor_of(&self, slot: Slot) -> Position {
        let node = self.nodes.get(slot.node);

        if let Some(child) = node.try_child(slot.index) {
            return Position::At(self.rightmost(child));
        }

        if slot.index > 0 {
            return Position::At(Slot::new(slot.node, slot.index - 1));
        }

        // Climb while we are the first child of our parent.
        let mut current = slot.node;
        loop {
            let node = self.nodes.get(current);
            let Some(parent) = node.parent() else {
                return Position::ReverseEnd;
            };
            if node.child_index() > 0 {
                return Position::At(Slot::new(parent, node.child_index() - 1));
            }
            current = parent;
        }
    }

    /// Steps `position` forward. `ReverseEnd` steps to the minimum and `End` stays put.
    pub(crate) fn advance(&self, position: Position) -> Result<Position> {
        match position {
            Position::At(slot) if self.try_key(slot).is_some() => Ok(self.successor_of(slot)),
            Position::At(_) => Err(Error::NotAnElement(position)),
            Position::End => Ok(Position::End),
            Position::ReverseEnd => Ok(self.begin()),
        }
    }

    /// Steps `position` backward. `End` steps to the maximum and `ReverseEnd` stays put.
    pub(crate) fn retreat(&self, position: Position) -> Result<Position> {
        match position {
            Position::At(slot) if self.try_key(slot).is_some() => Ok(self.predecessor_of(slot)),
            Position::At(_) => Err(Error::NotAnElement(position)),
            Position::End => Ok(self.last()),
            Position::ReverseEnd => Ok(Position::ReverseEnd),
        }
    }

    pub(crate) fn min(&self) -> Result<&T> {
        match self.begin() {
            Position::At(slot) => Ok(self.key(slot)),
            Position::End | Position::ReverseEnd => Err(Error::Empty),
        }
    }

    pub(crate) fn max(&self) -> Result<&T> {
        match self.last() {
            Position::At(slot) => Ok(self.key(slot)),
            Position::End | Position::ReverseEnd => Err(Error::Empty),
        }
    }

    /// Resolves a vacant slot to the first stored key at or after it.
    fn at_or_after(&self, slot: Slot) -> Position {
        if slot.index < self.nodes.get(slot.node).degree() {
            Position::At(slot)
        } else {
            self.successor_of(slot)
        }
    }

    /// Reassigns `parent` and `child_index` of every child of `node` from index `from` onward.
    fn reindex_children(&mut self, node: Handle, from: usize) {
        for index in from..self.nodes.get(node).child_count() {
            let child = self.nodes.get(node).child(index);
            self.nodes.get_mut(child).set_parent(Some(node), index);
        }
    }

    /// Moves every key out of the tree in ascending order and leaves the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len);
        let root = self.root;
        self.drain_subtree(root, &mut result);
        self.clear();
        result
    }

    fn drain_subtree(&mut self, handle: Handle, out: &mut Vec<T>) {
        let (keys, children) = self.nodes.take(handle).into_contents();
        if children.is_empty() {
            out.extend(keys);
            return;
        }
        for (&child, key) in children.iter().zip(keys) {
            self.drain_subtree(child, out);
            out.push(key);
        }
        self.drain_subtree(children[children.len() - 1], out);
    }
}

impl<T: Ord> RawKBTree<T> {
    /// Walks from the root to the slot holding `key`, or to the leaf slot where it belongs.
    pub(crate) fn locate<Q>(&self, key: &Q) -> Located
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        loop {
            let node = self.nodes.get(current);
            match node.search(key) {
                SearchResult::Found(idx) => return Located::Found(Slot::new(current, idx)),
                SearchResult::NotFound(idx) => match node.try_child(idx) {
                    Some(child) => current = child,
                    None => return Located::Vacant(Slot::new(current, idx)),
                },
            }
        }
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        matches!(self.locate(key), Located::Found(_))
    }

    pub(crate) fn get_key<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(key) {
            Located::Found(slot) => Some(self.key(slot)),
            Located::Vacant(_) => None,
        }
    }

    /// Returns `key` itself if stored, otherwise the greatest smaller key, otherwise the minimum.
    pub(crate) fn predecessor<Q>(&self, key: &Q) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let candidate = match self.locate(key) {
            Located::Found(slot) => return Ok(self.key(slot)),
            Located::Vacant(slot) => self.predecessor_of(slot),
        };
        match candidate {
            Position::At(slot) => Ok(self.key(slot)),
            Position::End | Position::ReverseEnd => self.min(),
        }
    }

    /// Returns `key` itself if stored, otherwise the least greater key, otherwise the maximum.
    pub(crate) fn successor<Q>(&self, key: &Q) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let candidate = match self.locate(key) {
            Located::Found(slot) => return Ok(self.key(slot)),
            Located::Vacant(slot) => self.at_or_after(slot),
        };
        match candidate {
            Position::At(slot) => Ok(self.key(slot)),
            Position::End | Position::ReverseEnd => self.max(),
        }
    }

    /// Position of the first key `>= key`, or `End`.
    fn first_at_least<Q>(&self, key: &Q) -> Position
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(key) {
            Located::Found(slot) => Position::At(slot),
            Located::Vacant(slot) => self.at_or_after(slot),
        }
    }

    /// Position of the first key `> key`, or `End`.
    fn first_above<Q>(&self, key: &Q) -> Position
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(key) {
            Located::Found(slot) => self.successor_of(slot),
            Located::Vacant(slot) => self.at_or_after(slot),
        }
    }

    /// Position of the last key `<= key`, or `ReverseEnd`.
    fn last_at_most<Q>(&self, key: &Q) -> Position
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(key) {
            Located::Found(slot) => Position::At(slot),
            Located::Vacant(slot) => self.predecessor_of(slot),
        }
    }

    /// Position of the last key `< key`, or `ReverseEnd`.
    fn last_below<Q>(&self, key: &Q) -> Position
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.locate(key) {
            Located::Found(slot) | Located::Vacant(slot) => self.predecessor_of(slot),
        }
    }

    /// Returns the first and last positions inside `range`.
    ///
    /// Returns `None` when no stored key falls inside the range, including inverted ranges.
    pub(crate) fn range_positions<Q, R>(&self, range: &R) -> Option<(Slot, Slot)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
        R: RangeBounds<Q>,
    {
        let front = match range.start_bound() {
            Bound::Included(key) => self.first_at_least(key),
            Bound::Excluded(key) => self.first_above(key),
            Bound::Unbounded => self.begin(),
        };
        let back = match range.end_bound() {
            Bound::Included(key) => self.last_at_most(key),
            Bound::Excluded(key) => self.last_below(key),
            Bound::Unbounded => self.last(),
        };
        match (front, back) {
            (Position::At(front), Position::At(back)) if self.key(front) <= self.key(back) => Some((front, back)),
            _ => None,
        }
    }

    /// Inserts `value` unless an equal key is already stored. Returns whether it was inserted.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let slot = match self.locate(&value) {
            Located::Found(_) => return false,
            Located::Vacant(slot) => slot,
        };

        self.nodes.get_mut(slot.node).insert_key(slot.index, value);
        self.len += 1;

        let mut current = slot.node;
        while self.nodes.get(current).degree() == self.order.get() {
            current = self.split(current);
        }
        true
    }

    /// Splits an overflowing node around its lower median and returns the parent, which has
    /// gained one key and may now overflow in turn.
    ///
    /// The node keeps the left half in place so that only the right half's children need new
    /// parent links.
    fn split(&mut self, node: Handle) -> Handle {
        let median = (self.nodes.get(node).degree() - 1) / 2;
        let parent = match self.nodes.get(node).parent() {
            Some(parent) => parent,
            None => self.grow_root(node),
        };
        let index = self.nodes.get(node).child_index();

        let (median_key, keys, children) = self.nodes.get_mut(node).split_off(median);
        let right = self.nodes.alloc(Node::with_contents(keys, children, parent, index + 1));
        self.reindex_children(right, 0);

        let parent_node = self.nodes.get_mut(parent);
        parent_node.insert_child(index + 1, right);
        parent_node.insert_key(index, median_key);
        self.reindex_children(parent, index + 2);

        trace!(
            node = node.to_index(),
            right = right.to_index(),
            parent = parent.to_index(),
            median,
            "split node"
        );
        parent
    }

    /// Installs a new, empty root above the current root and returns it.
    fn grow_root(&mut self, old_root: Handle) -> Handle {
        let mut root = Node::new();
        root.insert_child(0, old_root);
        let root = self.nodes.alloc(root);
        self.nodes.get_mut(old_root).set_parent(Some(root), 0);
        self.root = root;
        trace!(root = root.to_index(), child = old_root.to_index(), "grew root");
        root
    }

    /// Removes the stored key equal to `key`, if any.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Located::Found(slot) = self.locate(key) else {
            return None;
        };
        Some(self.remove_at(slot))
    }

    pub(crate) fn pop_first(&mut self) -> Option<T> {
        let slot = self.begin().slot()?;
        Some(self.remove_at(slot))
    }

    pub(crate) fn pop_last(&mut self) -> Option<T> {
        let slot = self.last().slot()?;
        Some(self.remove_at(slot))
    }

    /// Removes the key at `slot`, which must hold a key.
    ///
    /// A key in an internal node is replaced by its in-order neighbour from a leaf, so the
    /// physical removal always happens in a leaf.
    fn remove_at(&mut self, slot: Slot) -> T {
        self.len -= 1;

        let (leaf, removed) = if self.nodes.get(slot.node).is_leaf() {
            (slot.node, self.nodes.get_mut(slot.node).remove_key(slot.index))
        } else {
            let neighbour = self.predecessor_of(slot).slot().or_else(|| self.successor_of(slot).slot());
            let Some(source) = neighbour else {
                unreachable!("internal node without an in-order neighbour");
            };
            let moved = self.nodes.get_mut(source.node).remove_key(source.index);
            (source.node, self.nodes.get_mut(slot.node).replace_key(slot.index, moved))
        };

        if self.nodes.get(leaf).degree() < self.order.min_keys() {
            self.rebalance(leaf);
        }
        removed
    }

    /// Restores the minimum fill of `node` by rotating a key in from a sibling, or by merging
    /// with a sibling and repeating one level up.
    fn rebalance(&mut self, mut node: Handle) {
        let min_keys = self.order.min_keys();
        loop {
            let current = self.nodes.get(node);
            let Some(parent) = current.parent() else {
                return;
            };
            let index = current.child_index();
            let parent_node = self.nodes.get(parent);

            if index > 0 && self.nodes.get(parent_node.child(index - 1)).degree() > min_keys {
                self.rotate_right(parent, index);
                return;
            }

            if index < parent_node.degree() && self.nodes.get(parent_node.child(index + 1)).degree() > min_keys {
                self.rotate_left(parent, index);
                return;
            }

            let separator = if index > 0 { index - 1 } else { index };
            self.merge(parent, separator);

            let parent_node = self.nodes.get(parent);
            if parent_node.parent().is_none() {
                if parent_node.degree() == 0 {
                    self.collapse_root();
                }
                return;
            }
            if parent_node.degree() >= min_keys {
                return;
            }
            node = parent;
        }
    }

    /// Moves the left sibling's last key up into the parent and the parent's separator down
    /// into the front of the child at `index`.
    fn rotate_right(&mut self, parent: Handle, index: usize) {
        let node = self.nodes.get(parent).child(index);
        let left = self.nodes.get(parent).child(index - 1);

        let (key, moved) = self.nodes.get_mut(left).pop_back();
        let separator = self.nodes.get_mut(parent).replace_key(index - 1, key);
        self.nodes.get_mut(node).push_front(separator, moved);
        if moved.is_some() {
            self.reindex_children(node, 0);
        }

        trace!(node = node.to_index(), sibling = left.to_index(), "rotated right");
    }

    /// Moves the right sibling's first key up into the parent and the parent's separator down
    /// onto the end of the child at `index`.
    fn rotate_left(&mut self, parent: Handle, index: usize) {
        let node = self.nodes.get(parent).child(index);
        let right = self.nodes.get(parent).child(index + 1);

        let (key, moved) = self.nodes.get_mut(right).pop_front();
        let separator = self.nodes.get_mut(parent).replace_key(index, key);
        let target = self.nodes.get_mut(node);
        target.push_back(separator, moved);
        if let Some(child) = moved {
            let position = target.child_count() - 1;
            self.nodes.get_mut(child).set_parent(Some(node), position);
            self.reindex_children(right, 0);
        }

        trace!(node = node.to_index(), sibling = right.to_index(), "rotated left");
    }

    /// Merges the children on either side of the parent key at `separator` into the left one,
    /// pulling the separator down between them. The right child is freed.
    fn merge(&mut self, parent: Handle, separator: usize) {
        let left = self.nodes.get(parent).child(separator);
        let right = self.nodes.get(parent).child(separator + 1);

        let parent_node = self.nodes.get_mut(parent);
        let key = parent_node.remove_key(separator);
        parent_node.remove_child(separator + 1);
        self.reindex_children(parent, separator + 1);

        let right_node = self.nodes.take(right);
        let left_node = self.nodes.get_mut(left);
        let offset = left_node.child_count();
        left_node.absorb(key, right_node);
        self.reindex_children(left, offset);

        trace!(left = left.to_index(), right = right.to_index(), parent = parent.to_index(), "merged nodes");
    }

    /// Replaces a keyless root by its only child. An empty leaf root is kept.
    fn collapse_root(&mut self) {
        let old_root = self.root;
        let Some(child) = self.nodes.get(old_root).try_child(0) else {
            return;
        };
        self.nodes.free(old_root);
        self.nodes.get_mut(child).set_parent(None, 0);
        self.root = child;
        trace!(root = child.to_index(), "collapsed root");
    }
}
