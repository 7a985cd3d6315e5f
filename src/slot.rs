//! Sentinel-based node handles.
//!
//! Links between nodes are arena indices rather than pointers. A reserved
//! sentinel value (`usize::MAX`) stands in for "no node", which keeps a
//! link the size of a single word instead of `Option<usize>`.

/// Handle to a node slot in a list's arena.
///
/// `usize::MAX` is the sentinel and is never a valid arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Slot(usize);

impl Slot {
    /// Sentinel value representing "no node" / null link.
    pub(crate) const NONE: Slot = Slot(usize::MAX);

    /// Wraps a raw arena index.
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index != usize::MAX, "index collides with sentinel");
        Slot(index)
    }

    /// Returns the raw arena index.
    ///
    /// Must not be called on the sentinel.
    #[inline]
    pub(crate) fn index(self) -> usize {
        debug_assert!(self.is_some(), "dereferenced the sentinel slot");
        self.0
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub(crate) fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    pub(crate) fn is_some(self) -> bool {
        !self.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(Slot::NONE.is_none());
        assert!(!Slot::NONE.is_some());
    }

    #[test]
    fn live_slot() {
        let slot = Slot::new(0);
        assert!(slot.is_some());
        assert_eq!(slot.index(), 0);

        let slot = Slot::new(41);
        assert_eq!(slot.index(), 41);
    }
}
