use crate::raw::Handle;

/// A cursor into a [`KBTreeSet`](crate::KBTreeSet).
///
/// A position either names a stored element ([`Position::At`]) or is one of the two sentinels
/// that bracket the sorted sequence. Positions are plain values: they do not borrow the set, and
/// any insertion or removal invalidates every position previously obtained from it. Reading
/// through an invalidated position reports [`Error::NotAnElement`](crate::Error::NotAnElement)
/// when the stale slot is detectable, but may also observe a different element.
///
/// # Examples
///
/// ```
/// use kbtree::{KBTreeSet, Position};
///
/// let set = KBTreeSet::from([1, 2, 3]);
/// let mut position = set.begin();
/// let mut seen = Vec::new();
/// while position != Position::End {
///     seen.push(*set.get(position).unwrap());
///     position = set.advance(position).unwrap();
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Position {
    /// A slot holding an element.
    At(Slot),
    /// One past the maximum element.
    End,
    /// One before the minimum element.
    ReverseEnd,
}

/// A (node, key index) pair inside the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Slot {
    pub(crate) node: Handle,
    pub(crate) index: usize,
}

impl Slot {
    pub(crate) const fn new(node: Handle, index: usize) -> Self {
        Self { node, index }
    }

    /// Returns the key index of this slot within its node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl Position {
    /// Returns `true` for [`Position::End`] and [`Position::ReverseEnd`].
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        !matches!(self, Position::At(_))
    }

    /// Returns the slot of a non-sentinel position.
    #[must_use]
    pub const fn slot(self) -> Option<Slot> {
        match self {
            Position::At(slot) => Some(slot),
            Position::End | Position::ReverseEnd => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_distinct() {
        let at = Position::At(Slot::new(Handle::from_index(0), 0));
        assert_ne!(Position::End, Position::ReverseEnd);
        assert_ne!(at, Position::End);
        assert!(Position::End.is_sentinel());
        assert!(Position::ReverseEnd.is_sentinel());
        assert!(!at.is_sentinel());
        assert_eq!(at.slot().map(Slot::index), Some(0));
        assert_eq!(Position::End.slot(), None);
    }
}
