//! Ordered candidate cells for the next placement
//!
//! Entries are never removed when their cell gets filled. Consumers skip
//! filled entries when they look for the next seed, so stale entries are
//! expected and harmless. Along one search path the frontier behaves like a
//! stack: a placement appends its border cells and its undo truncates back to
//! the length recorded before the placement.

use crate::spatial::board::Board;
use crate::spatial::position::Position;

/// Candidate cells in the order they were discovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    cells: Vec<Position>,
}

impl Frontier {
    /// Frontier holding a single starting cell
    pub fn seeded(start: Position) -> Self {
        Self { cells: vec![start] }
    }

    /// Frontier holding the given cells in order
    pub const fn from_cells(cells: Vec<Position>) -> Self {
        Self { cells }
    }

    /// All entries, including stale ones
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of entries, including stale ones
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the frontier holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First entry at or after `from` whose cell is still empty on `board`
    ///
    /// Returns the entry index together with the cell.
    pub fn next_empty(&self, from: usize, board: &Board) -> Option<(usize, Position)> {
        self.cells
            .get(from..)?
            .iter()
            .position(|&cell| board.is_empty_at(cell))
            .and_then(|offset| {
                let index = from + offset;
                self.cells.get(index).map(|&cell| (index, cell))
            })
    }

    /// Current length, to be handed back to `truncate` on undo
    pub fn mark(&self) -> usize {
        self.cells.len()
    }

    /// Append newly exposed cells
    pub fn extend(&mut self, cells: impl IntoIterator<Item = Position>) {
        self.cells.extend(cells);
    }

    /// Drop every entry appended after `mark`
    pub fn truncate(&mut self, mark: usize) {
        self.cells.truncate(mark);
    }

    /// Independent copy of the entries from `from` onwards
    #[must_use]
    pub fn snapshot(&self, from: usize) -> Self {
        Self {
            cells: self.cells.get(from..).map(<[Position]>::to_vec).unwrap_or_default(),
        }
    }
}
