//! Oriented piece bodies and their border cells
//!
//! An orientation is one rigid placement pattern of a piece: the body cells it
//! covers relative to its bounding box origin, and the border cells around the
//! body that seed later frontier growth. Both lists are kept sorted so that
//! equality is a plain sequence comparison.

use crate::spatial::position::Position;
use std::collections::BTreeSet;

/// One rotation or mirror image of a piece
///
/// Two orientations are equal when their dimensions and body sequences match
/// exactly. Borders are derived from the body and take no part in equality.
#[derive(Debug, Clone)]
pub struct Orientation {
    height: usize,
    width: usize,
    body: Vec<Position>,
    border: Vec<Position>,
}

impl Orientation {
    /// Build an orientation from body cells inside a `height` x `width` box
    ///
    /// Body cells are sorted and deduplicated; the border is computed from them.
    pub fn from_body(height: usize, width: usize, cells: impl IntoIterator<Item = Position>) -> Self {
        let body: BTreeSet<Position> = cells.into_iter().collect();
        let border = border_of(&body);

        Self {
            height,
            width,
            body: body.into_iter().collect(),
            border,
        }
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Body cell offsets, sorted by row then column
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Border cell offsets, sorted by row then column
    ///
    /// Offsets may be negative or reach one past the bounding box.
    pub fn border(&self) -> &[Position] {
        &self.border
    }

    /// Number of body cells
    pub fn cell_count(&self) -> usize {
        self.body.len()
    }

    /// Rotate a quarter turn
    ///
    /// A body cell `(r, c)` moves to `(w - 1 - c, r)` and the bounding box
    /// swaps its dimensions. The border is recomputed from the new body.
    #[must_use]
    pub fn rotate(&self) -> Self {
        let last_col = self.width as i32 - 1;
        Self::from_body(
            self.width,
            self.height,
            self.body
                .iter()
                .map(|cell| Position::new(last_col - cell.col, cell.row)),
        )
    }

    /// Mirror across the main diagonal
    ///
    /// A body cell `(r, c)` moves to `(c, r)` and the bounding box swaps its
    /// dimensions. The border is recomputed from the new body.
    #[must_use]
    pub fn mirror(&self) -> Self {
        Self::from_body(
            self.width,
            self.height,
            self.body.iter().map(|cell| Position::new(cell.col, cell.row)),
        )
    }
}

impl PartialEq for Orientation {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height && self.width == other.width && self.body == other.body
    }
}

impl Eq for Orientation {}

// 4-neighbourhood of the body minus the body itself, sorted
fn border_of(body: &BTreeSet<Position>) -> Vec<Position> {
    let border: BTreeSet<Position> = body
        .iter()
        .flat_map(|cell| cell.neighbours())
        .filter(|cell| !body.contains(cell))
        .collect();
    border.into_iter().collect()
}
