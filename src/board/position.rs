#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts the row/col to a 1d row-major index on a board of side `size`
    pub fn as_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Checks whether two positions touch, diagonals included
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returns the (up to 8) positions touching `pos` on a `size` x `size` board.
///
/// Order is fixed: rows top to bottom, and left to right within a row. Path
/// lookup depends on this order to pick between equally valid placements.
pub fn neighbors(pos: Position, size: usize) -> impl Iterator<Item = Position> {
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| !(dr == 0 && dc == 0))
        .filter_map(move |(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            if row < size && col < size {
                Some(Position { row, col })
            } else {
                None
            }
        })
}
