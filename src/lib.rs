//! Doubly linked list containers over slab-backed nodes.
//!
//! This crate provides two list variants sharing one linkage core:
//!
//! ```text
//! BasicList<T>      - free insertion at either end, insertion order kept
//! SortedList<T, C>  - comparator-ordered insertion, ascending order kept
//! ```
//!
//! # Design
//!
//! Nodes do not point at each other; they live in a `slab::Slab` arena and
//! link through stable indices with a sentinel for "no node". The arena is
//! the single owner of every node, so removing one splices its neighbors
//! together and frees exactly one slot — no dangling backward reference
//! can survive a removal.
//!
//! The two variants are distinct types over the same internal chain
//! instead of one type with overridable insertion: which insertion
//! operations a list supports is visible in its type (and reported by
//! [`InsertMode`]). [`SortedList`] still carries end-insertion methods for
//! surface parity, but they reject every call with
//! [`UnsupportedInsert`], handing the value back.
//!
//! # Quick Start
//!
//! ```
//! use dlink::{BasicList, SortedList};
//!
//! let mut queue = BasicList::new();
//! queue.push_back(50);
//! queue.push_back(60);
//! assert_eq!(queue.pop_front(), Some(50));
//! assert_eq!(queue.front(), Some(&60));
//!
//! let mut ranked = SortedList::new(i32::cmp);
//! ranked.insert(30);
//! ranked.insert(10);
//! ranked.insert(20);
//! assert_eq!(ranked.to_vec(), vec![10, 20, 30]);
//! ```
//!
//! # Traversal
//!
//! Both variants expose a plain forward iterator ([`Iter`], double-ended)
//! and a stateful bidirectional [`Cursor`] that can change direction
//! mid-walk. The cursor observes the live chain through a shared borrow:
//! mutating a list while one of its cursors is alive is a compile error,
//! which is the single-writer discipline these containers require.
//!
//! ```
//! use dlink::BasicList;
//!
//! let mut list = BasicList::new();
//! list.push_back(1);
//! list.push_back(2);
//!
//! let mut cursor = list.cursor();
//! assert_eq!(cursor.next(), Ok(&1));
//! assert_eq!(cursor.next(), Ok(&2));
//! assert_eq!(cursor.previous(), Ok(&2));
//! ```
//!
//! # Error Model
//!
//! - Removing or peeking on an empty list returns `None`; it is a signal,
//!   not a failure.
//! - Cursor traversal past either end returns [`Exhausted`].
//! - Contract violations fail deterministically: end insertion on a
//!   sorted list ([`UnsupportedInsert`]) and structural mutation through
//!   a cursor ([`NotSupported`]) reject every call.
//!
//! No operation is blocking or fallible in any other way; everything runs
//! synchronously in O(1) or O(n) of the list length.

#![warn(missing_docs)]

mod chain;
mod slot;

pub mod cursor;
pub mod list;
pub mod sorted;

pub use chain::Iter;
pub use cursor::{Cursor, Exhausted, NotSupported};
pub use list::{BasicList, IntoIter};
pub use sorted::{SortedList, UnsupportedInsert};

/// How a list accepts new elements, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// Insertion at either end; traversal order is insertion history.
    Free,
    /// Comparator-driven insertion; traversal order is ascending.
    Ordered,
}
