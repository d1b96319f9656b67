use crate::error::{Error, Result};

/// The branching factor of a [`KBTreeSet`](crate::KBTreeSet): the maximum number of children
/// any node may have.
///
/// A node holds at most `order - 1` keys. Every node other than the root must keep at least
/// [`min_keys`](Order::min_keys) keys, which is the same as `ceil(order / 2)` children for
/// internal nodes.
///
/// # Examples
///
/// ```
/// use kbtree::Order;
///
/// let order = Order::new(5).unwrap();
/// assert_eq!(order.max_keys(), 4);
/// assert_eq!(order.min_keys(), 2);
/// assert_eq!(order.min_children(), 3);
///
/// assert!(Order::new(2).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Order(usize);

impl Order {
    /// The smallest supported order. With order 2 an internal node could be left without keys.
    pub const MIN: usize = 3;

    /// The order used by [`KBTreeSet::new`](crate::KBTreeSet::new).
    pub const DEFAULT: Order = Order(16);

    /// Validates `order` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderTooSmall`] if `order < Order::MIN`.
    pub const fn new(order: usize) -> Result<Self> {
        if order < Self::MIN {
            return Err(Error::OrderTooSmall { order, min: Self::MIN });
        }
        Ok(Self(order))
    }

    /// Returns the maximum number of children per node.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the maximum number of keys a node holds between operations.
    #[must_use]
    pub const fn max_keys(self) -> usize {
        self.0 - 1
    }

    /// Returns the minimum number of keys a non-root node must hold.
    #[must_use]
    pub const fn min_keys(self) -> usize {
        (self.0 - 1) / 2
    }

    /// Returns the minimum number of children a non-root internal node must have.
    #[must_use]
    pub const fn min_children(self) -> usize {
        self.0.div_ceil(2)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Order {
    type Error = Error;

    fn try_from(order: usize) -> Result<Self> {
        Self::new(order)
    }
}
