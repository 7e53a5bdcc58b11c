use ndarray::Array2;

use crate::board::Position;

/// Cells committed to the path currently being explored.
///
/// Owned by a single traversal; every mark is undone by the matching
/// unmark when the search backs out of that cell.
#[derive(Debug, Clone)]
pub struct VisitMask {
    cells: Array2<bool>,
    marked: usize,
}

impl VisitMask {
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), false),
            marked: 0,
        }
    }

    pub fn is_marked(&self, pos: Position) -> bool {
        self.cells[[pos.row, pos.col]]
    }

    pub fn mark(&mut self, pos: Position) {
        let cell = &mut self.cells[[pos.row, pos.col]];
        debug_assert!(!*cell, "cell {} is already on the path", pos);
        *cell = true;
        self.marked += 1;
    }

    pub fn unmark(&mut self, pos: Position) {
        let cell = &mut self.cells[[pos.row, pos.col]];
        debug_assert!(*cell, "cell {} is not on the path", pos);
        *cell = false;
        self.marked -= 1;
    }

    /// Number of cells currently marked
    pub fn len(&self) -> usize {
        self.marked
    }

    pub fn is_empty(&self) -> bool {
        self.marked == 0
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.marked = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_unmark() {
        let mut mask = VisitMask::new(3);
        let p = Position::new(1, 2);
        assert!(!mask.is_marked(p));
        mask.mark(p);
        assert!(mask.is_marked(p));
        assert_eq!(mask.len(), 1);
        mask.unmark(p);
        assert!(!mask.is_marked(p));
        assert!(mask.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut mask = VisitMask::new(2);
        mask.mark(Position::new(0, 0));
        mask.mark(Position::new(1, 1));
        mask.clear();
        assert!(mask.is_empty());
        assert!(!mask.is_marked(Position::new(1, 1)));
    }
}
