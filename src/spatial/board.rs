//! Board state owned by one search branch
//!
//! Holds the occupancy grid, the set of piece kinds already placed and the
//! placement depth. Placement and removal are strictly paired: every
//! successful `try_place` must be undone by exactly one `unplace` with the
//! same arguments, innermost first. Cloning copies everything, which is how
//! a forked branch gets its own state.

use crate::algorithm::bitset::PieceSet;
use crate::algorithm::symmetry::{CornerRule, Corners};
use crate::spatial::orientation::Orientation;
use crate::spatial::pieces::PieceId;
use crate::spatial::position::Position;
use ndarray::Array2;
use std::slice;

/// Occupancy grid plus per-branch piece usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Array2<PieceId>,
    used: PieceSet,
    depth: usize,
}

impl Board {
    /// Create an empty board for a set of `piece_count` piece kinds
    pub fn new(rows: usize, cols: usize, piece_count: usize) -> Self {
        Self {
            grid: Array2::zeros((rows, cols)),
            used: PieceSet::new(piece_count),
            depth: 0,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    /// Number of pieces currently placed
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Cell occupancy (0 = empty)
    pub const fn grid(&self) -> &Array2<PieceId> {
        &self.grid
    }

    /// Occupant of a cell, or `None` outside the board
    pub fn get(&self, cell: Position) -> Option<PieceId> {
        let index = cell.index_within(self.rows(), self.cols())?;
        self.grid.get(index).copied()
    }

    /// Whether a cell is on the board and empty
    pub fn is_empty_at(&self, cell: Position) -> bool {
        self.get(cell) == Some(0)
    }

    /// Whether a piece kind is placed on this board
    pub fn is_used(&self, piece: PieceId) -> bool {
        self.used.contains(piece)
    }

    /// Piece kinds currently placed
    pub const fn used(&self) -> &PieceSet {
        &self.used
    }

    /// Whether no cell is empty
    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|&id| id != 0)
    }

    /// Place an orientation with its bounding box origin at `anchor`
    ///
    /// Fails without touching the board if the bounding box leaves the board
    /// or any body cell is occupied. On success every body cell holds `piece`,
    /// the piece is marked used and the depth grows by one. The returned
    /// iterator yields the border cells that lie on the board; they are
    /// frontier candidates and may already be occupied.
    pub fn try_place<'o>(
        &mut self,
        anchor: Position,
        orientation: &'o Orientation,
        piece: PieceId,
    ) -> Option<FrontierCells<'o>> {
        let (rows, cols) = (self.rows() as i32, self.cols() as i32);
        if anchor.row < 0
            || anchor.col < 0
            || anchor.row + orientation.height() as i32 > rows
            || anchor.col + orientation.width() as i32 > cols
        {
            return None;
        }

        let occupied = orientation
            .body()
            .iter()
            .any(|&offset| !self.is_empty_at(anchor + offset));
        if occupied {
            return None;
        }

        self.write_body(anchor, orientation, piece);
        self.used.insert(piece);
        self.depth += 1;

        Some(FrontierCells {
            border: orientation.border().iter(),
            anchor,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Undo a successful `try_place` with the same anchor and orientation
    pub fn unplace(&mut self, anchor: Position, orientation: &Orientation) {
        let piece = orientation
            .body()
            .first()
            .and_then(|&offset| self.get(anchor + offset))
            .unwrap_or(0);
        self.write_body(anchor, orientation, 0);
        self.used.remove(piece);
        self.depth = self.depth.saturating_sub(1);
    }

    /// Occupants of the four corners
    pub fn corners(&self) -> Corners {
        Corners::of(&self.grid.view())
    }

    /// Whether the corner ordering still admits this board
    pub fn symmetry_ok(&self, rule: &CornerRule) -> bool {
        rule.admits(self.corners())
    }

    fn write_body(&mut self, anchor: Position, orientation: &Orientation, value: PieceId) {
        for &offset in orientation.body() {
            if let Some(index) = (anchor + offset).index_within(self.rows(), self.cols())
                && let Some(cell) = self.grid.get_mut(index)
            {
                *cell = value;
            }
        }
    }
}

/// Border cells of a fresh placement that lie on the board
#[derive(Debug, Clone)]
pub struct FrontierCells<'o> {
    border: slice::Iter<'o, Position>,
    anchor: Position,
    rows: usize,
    cols: usize,
}

impl Iterator for FrontierCells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let (anchor, rows, cols) = (self.anchor, self.rows, self.cols);
        self.border
            .by_ref()
            .map(|&offset| anchor + offset)
            .find(|cell| cell.index_within(rows, cols).is_some())
    }
}
