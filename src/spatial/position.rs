//! Grid coordinates shared by orientation offsets and board cells

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate, either on the board or relative to a piece origin
///
/// Offsets may be negative (border cells left of or above a piece body),
/// so both axes are signed. Ordering is by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Row index, growing downwards
    pub row: i32,
    /// Column index, growing rightwards
    pub col: i32,
}

impl Position {
    /// Create a position from row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The board origin (top-left cell)
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The four edge-adjacent neighbours, in row-major order
    pub const fn neighbours(self) -> [Self; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
        ]
    }

    /// Grid index for this position if it lies inside a `rows` x `cols` grid
    pub fn index_within(self, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < rows && col < cols).then_some((row, col))
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
