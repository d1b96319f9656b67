//! A keys-only B-tree ordered set for Rust.
//!
//! This crate provides [`KBTreeSet`], an ordered set of unique keys stored in a B-tree whose
//! order (the maximum number of children per node) is chosen when the set is created. On top of
//! the usual set operations it offers:
//!
//! - [`predecessor`](KBTreeSet::predecessor) / [`successor`](KBTreeSet::successor) - Nearest
//!   stored key at or below / at or above a probe
//! - [`range`](KBTreeSet::range) - Double-ended iteration over an inclusive or exclusive key range
//! - [`Position`] cursors - Step through the set in either direction, bracketed by the
//!   [`Position::End`] and [`Position::ReverseEnd`] sentinels
//!
//! # Example
//!
//! ```
//! use kbtree::{KBTreeSet, Position};
//!
//! let mut set = KBTreeSet::with_order(5).unwrap();
//! set.extend([10, 20, 5, 6, 12, 30, 7, 17]);
//!
//! assert_eq!(set.len(), 8);
//! assert_eq!(set.height(), 2);
//! assert_eq!(set.successor(&8), Ok(&10));
//!
//! // Walk backwards from the past-the-end sentinel.
//! let position = set.retreat(Position::End).unwrap();
//! assert_eq!(set.get(position), Ok(&30));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Configurable order** - Any order of at least 3, validated by [`Order`]
//! - **Familiar API** - Mirrors `std::collections::BTreeSet` where the semantics coincide
//!
//! # Implementation
//!
//! Keys live in every node, not only in leaves. Nodes are kept in an arena and refer to their
//! parent and children by handle, which lets cursors climb towards the root without borrowing
//! the whole path. Inserts split a full node around its lower median; removals borrow from a
//! sibling when it can spare a key and merge with one otherwise.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order;
mod position;
mod raw;

pub mod kbtree_set;

pub use error::{Error, Result};
pub use kbtree_set::KBTreeSet;
pub use order::Order;
pub use position::{Position, Slot};
