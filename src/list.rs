//! Unordered doubly linked list with insertion at both ends.

use core::cmp::Ordering;
use core::fmt;

use crate::chain::{Chain, Iter};
use crate::cursor::Cursor;
use crate::InsertMode;

/// A doubly linked list with free insertion at either end.
///
/// Elements keep their insertion order. Removal from either end and the
/// peeks return `None` on an empty list rather than failing. The list owns
/// its nodes; they are never exposed.
///
/// # Example
///
/// ```
/// use dlink::BasicList;
///
/// let mut list = BasicList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.push_front(1);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.pop_back(), Some(3));
/// assert_eq!(list.to_vec(), vec![1, 2]);
/// ```
pub struct BasicList<T> {
    chain: Chain<T>,
}

impl<T> BasicList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Reports how this list accepts new elements: [`InsertMode::Free`].
    #[inline]
    pub fn insert_mode(&self) -> InsertMode {
        InsertMode::Free
    }

    /// Adds an element to the front of the list.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.chain.push_front(value);
    }

    /// Adds an element to the end of the list.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.chain.push_back(value);
    }

    /// Removes and returns the first element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.chain.pop_back()
    }

    /// Returns a reference to the first element without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns a reference to the last element without removing it.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.chain.back()
    }

    /// Removes the first element that compares equal to `target`.
    ///
    /// Scans from the head and unlinks the first node where
    /// `compare(element, target)` is [`Ordering::Equal`], whether it sits
    /// at the head, the tail, or in the interior. Returns the removed
    /// value, or `None` when nothing matched (a no-op, not an error).
    ///
    /// # Example
    ///
    /// ```
    /// use dlink::BasicList;
    ///
    /// let mut list = BasicList::new();
    /// list.push_back(130);
    /// list.push_back(140);
    ///
    /// assert_eq!(list.remove_matching(&130, i32::cmp), Some(130));
    /// assert_eq!(list.to_vec(), vec![140]);
    /// ```
    pub fn remove_matching<F>(&mut self, target: &T, mut compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        remove_matching(&mut self.chain, target, &mut compare)
    }

    /// Returns a snapshot of all elements, head to tail.
    ///
    /// The snapshot is independent of the list: mutating the list
    /// afterwards does not affect it.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Returns a bidirectional read-only cursor positioned at the front.
    ///
    /// See [`Cursor`] for the traversal contract. The cursor borrows the
    /// list, so the list cannot be mutated while the cursor is alive.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.chain)
    }
}

/// Shared scan-and-unlink used by both list variants.
pub(crate) fn remove_matching<T, F>(chain: &mut Chain<T>, target: &T, compare: &mut F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut slot = chain.head();
    while slot.is_some() {
        if compare(chain.value(slot), target) == Ordering::Equal {
            return Some(chain.remove(slot));
        }
        slot = chain.next(slot);
    }
    None
}

impl<T> Default for BasicList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BasicList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for BasicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a BasicList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consuming iterator over list elements, front to back.
pub struct IntoIter<T> {
    list: BasicList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> IntoIterator for BasicList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
