//! Corner ordering rule that keeps one solution per board symmetry class
//!
//! Rotating or reflecting a tiling moves its corner pieces between corners.
//! Requiring a fixed order on the four corner ids picks exactly one image of
//! every class, and because corner cells only ever go from empty to filled the
//! rule can be checked after each placement to cut whole subtrees early.
//!
//! When one piece can reach two corners the order has to tolerate ties, and
//! several images of a class may pass it. Finished boards under that rule are
//! kept only if no other admitted image is lexicographically smaller.

use crate::spatial::pieces::PieceId;
use ndarray::{Array2, ArrayView2, s};

/// Occupant ids of the four board corners (0 = empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Corners {
    /// Cell (0, 0)
    pub top_left: PieceId,
    /// Cell (0, W-1)
    pub top_right: PieceId,
    /// Cell (H-1, 0)
    pub bottom_left: PieceId,
    /// Cell (H-1, W-1)
    pub bottom_right: PieceId,
}

/// Which symmetries the rule has to break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerRule {
    /// Keep every solution
    Disabled,
    /// Square board whose four corners always hold four different pieces
    ///
    /// Top-left is the smallest corner id, top-right is below bottom-left.
    Dihedral {
        /// Number of piece kinds
        piece_count: usize,
    },
    /// Non-square board whose four corners always hold four different pieces
    ///
    /// Only half turns and axis flips map the board onto itself, so top-left
    /// being the smallest corner id already picks one image.
    Rectangular {
        /// Number of piece kinds
        piece_count: usize,
    },
    /// Some piece can cover two corners at once
    ///
    /// Same ordering as the stricter variants with ties allowed and no
    /// upper bounds, so boards with a shared corner piece are never lost.
    /// Finished boards also go through [`CornerRule::keeps`].
    Relaxed {
        /// Whether the board is square
        square: bool,
    },
}

impl Corners {
    /// Corner occupants of a grid; an empty grid has only empty corners
    pub fn of(grid: &ArrayView2<'_, PieceId>) -> Self {
        let (rows, cols) = grid.dim();
        let (last_row, last_col) = (rows.saturating_sub(1), cols.saturating_sub(1));
        let at = |row: usize, col: usize| grid.get((row, col)).copied().unwrap_or(0);
        Self {
            top_left: at(0, 0),
            top_right: at(0, last_col),
            bottom_left: at(last_row, 0),
            bottom_right: at(last_row, last_col),
        }
    }
}

impl CornerRule {
    /// Pick the rule for a board and piece set
    pub const fn for_board(rows: usize, cols: usize, piece_count: usize, max_extent: usize) -> Self {
        let square = rows == cols;
        let shortest = if rows < cols { rows } else { cols };
        if max_extent >= shortest {
            Self::Relaxed { square }
        } else if square {
            Self::Dihedral { piece_count }
        } else {
            Self::Rectangular { piece_count }
        }
    }

    /// Whether a (possibly partial) board may still be the kept image
    pub const fn admits(&self, corners: Corners) -> bool {
        let Corners {
            top_left: tl,
            top_right: tr,
            bottom_left: bl,
            bottom_right: br,
        } = corners;

        match *self {
            Self::Disabled => true,
            Self::Dihedral { piece_count } => {
                (tl as usize) + 2 < piece_count
                    && (tr as usize) < piece_count
                    && (tr == 0 || tr > tl)
                    && (bl == 0 || bl > tr)
                    && (br == 0 || br > tl)
            }
            Self::Rectangular { piece_count } => {
                (tl as usize) + 2 < piece_count
                    && (tr == 0 || tr > tl)
                    && (bl == 0 || bl > tl)
                    && (br == 0 || br > tl)
            }
            Self::Relaxed { square } => {
                let ordered = (tr == 0 || tr >= tl) && (br == 0 || br >= tl);
                if square {
                    ordered && (bl == 0 || bl >= tr)
                } else {
                    ordered && (bl == 0 || bl >= tl)
                }
            }
        }
    }

    /// Whether a finished board is the one image of its class to report
    ///
    /// Only the relaxed rule can admit several images of one tiling. Those
    /// boards are kept when they are the smallest admitted image in row-major
    /// order.
    pub fn keeps(&self, grid: &Array2<PieceId>) -> bool {
        let Self::Relaxed { square } = *self else {
            return true;
        };
        images(grid, square)
            .iter()
            .filter(|image| self.admits(Corners::of(image)))
            .all(|image| grid.iter().le(image.iter()))
    }
}

/// Every image of `grid` under the board's symmetries, itself excluded
///
/// Rectangles map onto themselves by the two flips and the half turn; squares
/// add the four images through the transpose.
fn images(grid: &Array2<PieceId>, square: bool) -> Vec<ArrayView2<'_, PieceId>> {
    let mut images = vec![
        grid.slice(s![..;-1, ..]),
        grid.slice(s![.., ..;-1]),
        grid.slice(s![..;-1, ..;-1]),
    ];
    if square {
        let transposed = grid.t();
        images.extend([
            transposed,
            transposed.slice_move(s![..;-1, ..]),
            transposed.slice_move(s![.., ..;-1]),
            transposed.slice_move(s![..;-1, ..;-1]),
        ]);
    }
    images
}
