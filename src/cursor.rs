//! Bidirectional read-only traversal cursor.

use core::fmt;

use crate::chain::Chain;
use crate::slot::Slot;

/// Error returned by [`Cursor::next`] and [`Cursor::previous`] when no
/// element exists in the requested direction.
///
/// Callers are expected to check [`Cursor::has_next`] /
/// [`Cursor::has_previous`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor is exhausted in that direction")
    }
}

impl std::error::Error for Exhausted {}

/// Error returned by the cursor's structural-mutation operations.
///
/// The cursor is read-only by design; these operations fail on every call
/// regardless of cursor position. This is a programming-contract
/// violation, not a transient condition, and must not be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSupported {
    op: &'static str,
}

impl NotSupported {
    /// Returns the name of the rejected operation.
    pub fn operation(&self) -> &'static str {
        self.op
    }
}

impl fmt::Display for NotSupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not supported by a read-only cursor", self.op)
    }
}

impl std::error::Error for NotSupported {}

/// A stateful forward/backward traversal bound to one list.
///
/// The cursor walks the live node chain, not a snapshot: it holds a shared
/// borrow of the list for its whole lifetime, so the borrow checker
/// rejects any mutation of the list while a cursor is open. Traversal is
/// read-only; the structural-mutation operations exist only to fail with
/// [`NotSupported`].
///
/// Backward movement steps through the nodes most recently passed:
/// immediately after a full forward walk, the first
/// [`previous`](Cursor::previous) re-returns the last element.
///
/// # Example
///
/// ```
/// use dlink::BasicList;
///
/// let mut list = BasicList::new();
/// list.push_back(90);
/// list.push_back(100);
///
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.next(), Ok(&90));
/// assert_eq!(cursor.next(), Ok(&100));
/// assert!(!cursor.has_next());
/// assert!(cursor.next().is_err());
///
/// assert!(cursor.has_previous());
/// assert_eq!(cursor.previous(), Ok(&100));
/// ```
pub struct Cursor<'a, T> {
    chain: &'a Chain<T>,
    /// Forward position: the node `next` will return.
    current: Slot,
    /// The node most recently returned, anchor for backward movement.
    returned: Slot,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(chain: &'a Chain<T>) -> Self {
        Self {
            chain,
            current: chain.head(),
            returned: Slot::NONE,
        }
    }

    /// Returns `true` if a forward element is available.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the element at the forward position and advances.
    ///
    /// # Errors
    ///
    /// Returns [`Exhausted`] when the cursor has passed the tail.
    pub fn next(&mut self) -> Result<&'a T, Exhausted> {
        if self.current.is_none() {
            return Err(Exhausted);
        }

        let chain = self.chain;
        self.returned = self.current;
        let value = chain.value(self.current);
        self.current = chain.next(self.current);
        Ok(value)
    }

    /// Returns `true` if a backward element is available.
    ///
    /// True only once an element has been returned and that element has a
    /// predecessor.
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.returned.is_some() && self.chain.prev(self.returned).is_some()
    }

    /// Steps backward and returns the element landed on.
    ///
    /// When the forward position is past the tail this re-enters the chain
    /// at the last-returned node; otherwise it moves one node toward the
    /// head.
    ///
    /// # Errors
    ///
    /// Returns [`Exhausted`] when [`has_previous`](Cursor::has_previous)
    /// is false.
    pub fn previous(&mut self) -> Result<&'a T, Exhausted> {
        if !self.has_previous() {
            return Err(Exhausted);
        }

        let chain = self.chain;
        self.current = if self.current.is_none() {
            self.returned
        } else {
            chain.prev(self.current)
        };
        self.returned = self.current;
        Ok(chain.value(self.current))
    }

    /// Structural removal through the cursor; always fails.
    pub fn remove(&mut self) -> Result<(), NotSupported> {
        Err(NotSupported { op: "remove" })
    }

    /// Replacing the current element through the cursor; always fails.
    ///
    /// The value is handed back inside the error.
    pub fn set(&mut self, value: T) -> Result<(), (T, NotSupported)> {
        Err((value, NotSupported { op: "set" }))
    }

    /// Inserting through the cursor; always fails.
    ///
    /// The value is handed back inside the error.
    pub fn insert(&mut self, value: T) -> Result<(), (T, NotSupported)> {
        Err((value, NotSupported { op: "insert" }))
    }

    /// Index of the forward position; index queries are not supported.
    pub fn next_index(&self) -> Result<usize, NotSupported> {
        Err(NotSupported { op: "next_index" })
    }

    /// Index of the backward position; index queries are not supported.
    pub fn previous_index(&self) -> Result<usize, NotSupported> {
        Err(NotSupported {
            op: "previous_index",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::BasicList;

    #[test]
    fn forward_walk_and_exhaustion() {
        let list: BasicList<i32> = [90, 100].into_iter().collect();

        let mut cursor = list.cursor();
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(&90));
        assert_eq!(cursor.next(), Ok(&100));
        assert!(!cursor.has_next());
        assert!(cursor.next().is_err());
        // Still exhausted on repeat calls.
        assert!(cursor.next().is_err());
    }

    #[test]
    fn empty_list_cursor() {
        let list: BasicList<i32> = BasicList::new();

        let mut cursor = list.cursor();
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());
        assert!(cursor.next().is_err());
        assert!(cursor.previous().is_err());
    }

    #[test]
    fn previous_reenters_at_last_returned() {
        let list: BasicList<i32> = [110, 120].into_iter().collect();

        let mut cursor = list.cursor();
        cursor.next().unwrap();
        cursor.next().unwrap();

        assert!(cursor.has_previous());
        // Forward position is past the tail, so the first step back lands
        // on the element returned last.
        assert_eq!(cursor.previous(), Ok(&120));
        assert_eq!(cursor.previous(), Ok(&110));
        assert!(!cursor.has_previous());
        assert!(cursor.previous().is_err());
    }

    #[test]
    fn previous_mid_walk_steps_toward_head() {
        let list: BasicList<i32> = [1, 2, 3].into_iter().collect();

        let mut cursor = list.cursor();
        cursor.next().unwrap(); // returned 1
        cursor.next().unwrap(); // returned 2, forward position on 3

        assert_eq!(cursor.previous(), Ok(&2));
        assert_eq!(cursor.previous(), Ok(&1));
        assert!(!cursor.has_previous());
    }

    #[test]
    fn no_previous_after_single_next() {
        let list: BasicList<i32> = [1, 2].into_iter().collect();

        let mut cursor = list.cursor();
        cursor.next().unwrap();
        // The returned node is the head; it has no predecessor.
        assert!(!cursor.has_previous());
        assert!(cursor.previous().is_err());
    }

    #[test]
    fn forward_backward_forward() {
        let list: BasicList<i32> = [1, 2, 3].into_iter().collect();

        let mut cursor = list.cursor();
        assert_eq!(cursor.next(), Ok(&1));
        assert_eq!(cursor.next(), Ok(&2));
        assert_eq!(cursor.previous(), Ok(&2));
        assert_eq!(cursor.next(), Ok(&2));
        assert_eq!(cursor.next(), Ok(&3));
    }

    #[test]
    fn structural_mutation_always_fails() {
        let list: BasicList<i32> = [1, 2].into_iter().collect();

        let mut cursor = list.cursor();
        assert!(cursor.remove().is_err());
        assert!(cursor.next_index().is_err());
        assert!(cursor.previous_index().is_err());

        let (value, err) = cursor.set(9).unwrap_err();
        assert_eq!(value, 9);
        assert_eq!(err.operation(), "set");

        let (value, _) = cursor.insert(7).unwrap_err();
        assert_eq!(value, 7);

        // Position does not matter.
        cursor.next().unwrap();
        assert!(cursor.remove().is_err());

        // The list is untouched.
        drop(cursor);
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn error_messages() {
        let list: BasicList<i32> = BasicList::new();
        let mut cursor = list.cursor();

        let err = cursor.next().unwrap_err();
        assert_eq!(err.to_string(), "cursor is exhausted in that direction");

        let err = cursor.remove().unwrap_err();
        assert_eq!(
            err.to_string(),
            "`remove` is not supported by a read-only cursor"
        );
    }
}
