//! Node linkage over slab storage.
//!
//! Nodes live in a `slab::Slab`, addressed by stable [`Slot`] indices. The
//! chain manages the prev/next links, head/tail, and length; removal from
//! the middle splices neighbors together and frees exactly one slot, so no
//! stale backward link can outlive its node.
//!
//! This module is the shared core of [`BasicList`](crate::BasicList) and
//! [`SortedList`](crate::SortedList); it is not exposed directly.

use slab::Slab;

use crate::slot::Slot;

/// A node in the chain: one value plus its two adjacency links.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Slot,
    pub(crate) next: Slot,
}

/// Doubly linked chain of slab-backed nodes.
///
/// # Invariants
///
/// - `head` is `NONE` iff `tail` is `NONE` iff `len == 0`.
/// - For every node `n` with `n.next` live, that node's `prev` is `n`;
///   symmetric for `prev`.
/// - `head`'s `prev` and `tail`'s `next` are `NONE` whenever live.
/// - `len` equals the number of nodes reachable from `head` via `next`.
#[derive(Debug)]
pub(crate) struct Chain<T> {
    nodes: Slab<Node<T>>,
    head: Slot,
    tail: Slot,
    len: usize,
}

impl<T> Chain<T> {
    /// Creates an empty chain.
    pub(crate) fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: Slot::NONE,
            tail: Slot::NONE,
            len: 0,
        }
    }

    /// Returns the number of nodes in the chain.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain has no nodes.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head slot, or `NONE` if empty.
    #[inline]
    pub(crate) fn head(&self) -> Slot {
        self.head
    }

    /// Returns the slot following `slot`, or `NONE` at the tail.
    #[inline]
    pub(crate) fn next(&self, slot: Slot) -> Slot {
        self.nodes[slot.index()].next
    }

    /// Returns the slot preceding `slot`, or `NONE` at the head.
    #[inline]
    pub(crate) fn prev(&self, slot: Slot) -> Slot {
        self.nodes[slot.index()].prev
    }

    /// Returns a reference to the value stored at `slot`.
    #[inline]
    pub(crate) fn value(&self, slot: Slot) -> &T {
        &self.nodes[slot.index()].value
    }

    /// Links a new node holding `value` before the current head.
    pub(crate) fn push_front(&mut self, value: T) -> Slot {
        let slot = Slot::new(self.nodes.insert(Node {
            value,
            prev: Slot::NONE,
            next: self.head,
        }));

        if self.head.is_some() {
            self.nodes[self.head.index()].prev = slot;
        } else {
            self.tail = slot;
        }

        self.head = slot;
        self.len += 1;
        slot
    }

    /// Links a new node holding `value` after the current tail.
    pub(crate) fn push_back(&mut self, value: T) -> Slot {
        let slot = Slot::new(self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: Slot::NONE,
        }));

        if self.tail.is_some() {
            self.nodes[self.tail.index()].next = slot;
        } else {
            self.head = slot;
        }

        self.tail = slot;
        self.len += 1;
        slot
    }

    /// Links a new node holding `value` immediately before `before`.
    ///
    /// `before` must be live. Becomes the new head when `before` was the
    /// head.
    pub(crate) fn insert_before(&mut self, before: Slot, value: T) -> Slot {
        let prev = self.nodes[before.index()].prev;
        let slot = Slot::new(self.nodes.insert(Node {
            value,
            prev,
            next: before,
        }));

        self.nodes[before.index()].prev = slot;
        if prev.is_some() {
            self.nodes[prev.index()].next = slot;
        } else {
            self.head = slot;
        }

        self.len += 1;
        slot
    }

    /// Unlinks and frees the node at `slot`, returning its value.
    ///
    /// Handles head, tail, and interior positions uniformly: the neighbors
    /// are spliced together and the slot is returned to the arena.
    pub(crate) fn remove(&mut self, slot: Slot) -> T {
        let node = self.nodes.remove(slot.index());

        if node.prev.is_some() {
            self.nodes[node.prev.index()].next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            self.nodes[node.next.index()].prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        self.len -= 1;
        node.value
    }

    /// Removes and returns the front value, or `None` if empty.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        Some(self.remove(self.head))
    }

    /// Removes and returns the back value, or `None` if empty.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        Some(self.remove(self.tail))
    }

    /// Returns a reference to the front value, or `None` if empty.
    #[inline]
    pub(crate) fn front(&self) -> Option<&T> {
        if self.head.is_none() {
            None
        } else {
            Some(&self.nodes[self.head.index()].value)
        }
    }

    /// Returns a reference to the back value, or `None` if empty.
    #[inline]
    pub(crate) fn back(&self) -> Option<&T> {
        if self.tail.is_none() {
            None
        } else {
            Some(&self.nodes[self.tail.index()].value)
        }
    }

    /// Returns an iterator over references to values, front to back.
    #[inline]
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
        }
    }
}

/// Iterator over references to list elements, front to back.
///
/// Also walks back to front through [`DoubleEndedIterator`]. Obtained from
/// [`BasicList::iter`](crate::BasicList::iter) or
/// [`SortedList::iter`](crate::SortedList::iter).
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Slot,
    back: Slot,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front.is_none() {
            return None;
        }

        let node = &self.nodes[self.front.index()];

        // The ends collapse when they meet in the middle.
        if self.front == self.back {
            self.front = Slot::NONE;
            self.back = Slot::NONE;
        } else {
            self.front = node.next;
        }

        Some(&node.value)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back.is_none() {
            return None;
        }

        let node = &self.nodes[self.back.index()];

        if self.front == self.back {
            self.front = Slot::NONE;
            self.back = Slot::NONE;
        } else {
            self.back = node.prev;
        }

        Some(&node.value)
    }
}
