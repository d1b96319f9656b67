//! Error types for `kbtree`.

use crate::position::Position;

/// Convenient Result type alias.
pub type Result<T> = core::result::Result<T, Error>;

/// All errors reported by this crate.
///
/// Inserting a value that is already present and removing a value that is absent are not
/// errors; those operations report `false` instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested branching factor cannot form a valid B-tree.
    #[error("order {order} is too small, the minimum is {min}")]
    OrderTooSmall {
        /// The rejected order.
        order: usize,
        /// The smallest accepted order.
        min: usize,
    },

    /// An element was requested from an empty set.
    #[error("the set is empty")]
    Empty,

    /// A position does not refer to a stored element.
    ///
    /// This is returned for the [`Position::End`] and [`Position::ReverseEnd`] sentinels and for
    /// positions that a later mutation invalidated.
    #[error("position {0:?} does not refer to an element")]
    NotAnElement(Position),
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn error_display() {
        let err = Error::OrderTooSmall { order: 2, min: 3 };
        assert_eq!(err.to_string(), "order 2 is too small, the minimum is 3");

        assert_eq!(Error::Empty.to_string(), "the set is empty");
        assert_eq!(
            Error::NotAnElement(Position::End).to_string(),
            "position End does not refer to an element"
        );
    }

    #[test]
    fn result_type_alias() {
        fn might_fail(fail: bool) -> Result<u32> {
            if fail { Err(Error::Empty) } else { Ok(42) }
        }

        assert_eq!(might_fail(false), Ok(42));
        assert_eq!(might_fail(true), Err(Error::Empty));
    }
}
