//! PNG export of finished boards, one colored square per cell

use crate::io::configuration::{EMPTY_CELL_COLOR, PIECE_PALETTE, PNG_FILE_PREFIX};
use crate::io::error::{Result, SolverError};
use crate::spatial::pieces::PieceId;
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Fill color for a piece id, cycling through the palette
pub fn piece_color(id: PieceId) -> [u8; 4] {
    if id == 0 {
        return EMPTY_CELL_COLOR;
    }
    let index = (id as usize - 1) % PIECE_PALETTE.len();
    PIECE_PALETTE.get(index).copied().unwrap_or(EMPTY_CELL_COLOR)
}

/// Draw a grid with `cell_size` pixels per cell
///
/// Cells of different pieces are separated by a one-pixel dark seam so that
/// neighbouring pieces stay distinguishable even when their colors repeat.
pub fn grid_to_image(grid: &Array2<PieceId>, cell_size: u32) -> RgbaImage {
    let cell_size = cell_size.max(1);
    let width = grid.ncols() as u32 * cell_size;
    let height = grid.nrows() as u32 * cell_size;
    let seam = Rgba([32, 32, 32, 255]);

    ImageBuffer::from_fn(width, height, |x, y| {
        let (row, col) = ((y / cell_size) as usize, (x / cell_size) as usize);
        let id = grid.get((row, col)).copied().unwrap_or(0);

        let on_right_edge = x % cell_size == cell_size - 1;
        let on_bottom_edge = y % cell_size == cell_size - 1;
        let differs_right = grid.get((row, col + 1)).is_some_and(|&next| next != id);
        let differs_below = grid.get((row + 1, col)).is_some_and(|&next| next != id);

        if (on_right_edge && differs_right) || (on_bottom_edge && differs_below) {
            seam
        } else {
            Rgba(piece_color(id))
        }
    })
}

/// File path for the `index`-th solution inside `dir`
pub fn solution_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{PNG_FILE_PREFIX}_{index:05}.png"))
}

/// Save a grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Array2<PieceId>, cell_size: u32, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    grid_to_image(grid, cell_size)
        .save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
