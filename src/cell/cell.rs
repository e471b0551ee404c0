//! Cell: A single fillable display/focus target.
//!
//! Cells are handles, not owners. The element behind a handle may be torn
//! down by the host at any time between handler invocations, so every
//! operation on a [`Cell`] must tolerate a target that no longer exists.

/// A single-character display target that can take input focus.
///
/// Implementations wrap whatever the host renders: a DOM `<input>`, an
/// element of the in-memory [`Document`](crate::registry::Document), or a
/// recording double in tests.
pub trait Cell {
    /// Show `value` in the cell, or clear it when `None`.
    fn display(&self, value: Option<char>);

    /// Move input focus to this cell.
    fn focus(&self);
}

impl<C: Cell + ?Sized> Cell for &C {
    fn display(&self, value: Option<char>) {
        (**self).display(value);
    }

    fn focus(&self) {
        (**self).focus();
    }
}

/// An ordered set of cells, indexed `0..len`.
///
/// Position `i` in the set corresponds to slot `i` of the letter buffer.
/// A set is never patched in place: hosts rebuild it through
/// [`CellRegistry::discover`](crate::registry::CellRegistry::discover).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet<C> {
    cells: Vec<C>,
}

impl<C> CellSet<C> {
    /// Create a set from cells in display order.
    pub const fn new(cells: Vec<C>) -> Self {
        Self { cells }
    }

    /// An empty set (nothing discovered yet).
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the set has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&C> {
        self.cells.get(index)
    }

    /// Iterate over cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cells.iter()
    }
}

impl<C> Default for CellSet<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C> FromIterator<C> for CellSet<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, C> IntoIterator for &'a CellSet<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Probe {
        shown: RefCell<Option<char>>,
    }

    impl Cell for Probe {
        fn display(&self, value: Option<char>) {
            *self.shown.borrow_mut() = value;
        }

        fn focus(&self) {}
    }

    #[test]
    fn test_cell_set_order() {
        let set: CellSet<u8> = (0..5).collect();
        assert_eq!(set.len(), 5);
        assert_eq!(set.get(0), Some(&0));
        assert_eq!(set.get(4), Some(&4));
        assert_eq!(set.get(5), None);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_cell_set_empty() {
        let set: CellSet<u8> = CellSet::default();
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_cell_through_reference() {
        let probe = Probe::default();
        let by_ref = &probe;
        Cell::display(&by_ref, Some('q'));
        assert_eq!(*probe.shown.borrow(), Some('q'));
    }
}
