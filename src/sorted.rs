//! Sorted doubly linked list with comparator-driven insertion.

use core::cmp::Ordering;
use core::fmt;

use crate::chain::{Chain, Iter};
use crate::cursor::Cursor;
use crate::list::remove_matching;
use crate::InsertMode;

/// Error returned when end-insertion is attempted on a [`SortedList`].
///
/// End insertion would bypass the ordering invariant, so `push_front` and
/// `push_back` reject every call and hand the value back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedInsert<T>(pub T);

impl<T> UnsupportedInsert<T> {
    /// Returns the value that was not inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for UnsupportedInsert<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "end insertion is not supported on a sorted list; use `insert`"
        )
    }
}

impl<T: fmt::Debug> std::error::Error for UnsupportedInsert<T> {}

/// A doubly linked list that keeps its elements in ascending order.
///
/// The ordering is fixed at construction by a comparison function returning
/// [`Ordering`]. Every [`insert`](SortedList::insert) scans for the correct
/// position; the end-insertion operations of [`BasicList`](crate::BasicList)
/// exist here only to fail, so a caller holding either variant sees the
/// same surface.
///
/// Sortedness is an insertion-time guarantee: removals, peeks, and
/// traversal behave exactly as on the unordered list and never re-validate
/// the order.
///
/// # Example
///
/// ```
/// use dlink::SortedList;
///
/// let mut list = SortedList::new(i32::cmp);
/// list.insert(30);
/// list.insert(10);
/// list.insert(20);
///
/// assert_eq!(list.to_vec(), vec![10, 20, 30]);
/// assert!(list.push_front(5).is_err());
/// ```
pub struct SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    chain: Chain<T>,
    compare: C,
}

impl<T, C> SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty sorted list ordered by `compare`.
    pub fn new(compare: C) -> Self {
        Self {
            chain: Chain::new(),
            compare,
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

    /// Reports how this list accepts new elements: [`InsertMode::Ordered`].
    #[inline]
    pub fn insert_mode(&self) -> InsertMode {
        InsertMode::Ordered
    }

    /// Inserts `value` at its position in ascending order.
    ///
    /// Scans from the head past every element strictly less than `value`
    /// and links the new node before the first element that is not less.
    /// An element equal to existing ones is therefore placed before them.
    /// The new node lands at the head when `value` is smallest (or the
    /// list is empty), at the tail when the scan exhausts, or between two
    /// interior neighbors otherwise.
    pub fn insert(&mut self, value: T) {
        let mut slot = self.chain.head();
        while slot.is_some() && (self.compare)(self.chain.value(slot), &value) == Ordering::Less {
            slot = self.chain.next(slot);
        }

        if slot.is_some() {
            self.chain.insert_before(slot, value);
        } else {
            self.chain.push_back(value);
        }
    }

    /// Rejects front insertion; a sorted list chooses its own positions.
    ///
    /// Always returns [`UnsupportedInsert`] carrying `value` back, for any
    /// input and any list state. Use [`insert`](SortedList::insert).
    pub fn push_front(&mut self, value: T) -> Result<(), UnsupportedInsert<T>> {
        Err(UnsupportedInsert(value))
    }

    /// Rejects end insertion; a sorted list chooses its own positions.
    ///
    /// Always returns [`UnsupportedInsert`] carrying `value` back, for any
    /// input and any list state. Use [`insert`](SortedList::insert).
    pub fn push_back(&mut self, value: T) -> Result<(), UnsupportedInsert<T>> {
        Err(UnsupportedInsert(value))
    }

    /// Removes and returns the smallest element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// Removes and returns the largest element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.chain.pop_back()
    }

    /// Returns a reference to the smallest element without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.chain.front()
    }

    /// Returns a reference to the largest element without removing it.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.chain.back()
    }

    /// Removes the first element that compares equal to `target`.
    ///
    /// Same contract as [`BasicList::remove_matching`]: linear scan from
    /// the head with a per-call comparison, `None` when nothing matched.
    ///
    /// [`BasicList::remove_matching`]: crate::BasicList::remove_matching
    pub fn remove_matching<F>(&mut self, target: &T, mut compare: F) -> Option<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        remove_matching(&mut self.chain, target, &mut compare)
    }

    /// Returns a snapshot of all elements in ascending order.
    ///
    /// The snapshot is independent of the list after creation.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over references to elements in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    /// Returns a bidirectional read-only cursor positioned at the front.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.chain)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a SortedList<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
