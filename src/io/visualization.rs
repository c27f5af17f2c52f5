//! Text rendering of finished boards and piece orientations
//!
//! Pure formatting: every function takes finished data and returns a string,
//! nothing here touches the search.

use crate::spatial::orientation::Orientation;
use crate::spatial::pieces::{PieceCatalog, PieceId};
use clap::ValueEnum;
use ndarray::Array2;

/// How board cells are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderStyle {
    /// One letter per piece id (`A` for piece 1)
    #[default]
    Letters,
    /// Box-drawing glyphs joining cells of the same piece
    Outline,
}

/// Render a grid in the given style
pub fn render(grid: &Array2<PieceId>, style: RenderStyle) -> String {
    match style {
        RenderStyle::Letters => render_letters(grid),
        RenderStyle::Outline => render_outline(grid),
    }
}

/// Letter naming a piece id (`A` for 1); empty cells map to a space
pub fn piece_letter(id: PieceId) -> char {
    if id == 0 {
        return ' ';
    }
    char::from_u32(u32::from('A') + u32::from(id) - 1).unwrap_or('?')
}

/// Two columns per cell: the piece letter and a space
pub fn render_letters(grid: &Array2<PieceId>) -> String {
    let mut out = String::with_capacity(grid.len() * 2 + grid.nrows());
    for row in grid.rows() {
        for &id in row {
            out.push(piece_letter(id));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Each cell drawn as a glyph whose arms point at same-piece neighbours
pub fn render_outline(grid: &Array2<PieceId>) -> String {
    let mut out = String::with_capacity(grid.len() * 2 + grid.nrows());
    for ((row, col), &id) in grid.indexed_iter() {
        if col == 0 && row > 0 {
            out.push('\n');
        }
        out.push(outline_glyph(grid, row, col, id));
        out.push(' ');
    }
    if !grid.is_empty() {
        out.push('\n');
    }
    out
}

fn outline_glyph(grid: &Array2<PieceId>, row: usize, col: usize, id: PieceId) -> char {
    if id == 0 {
        return ' ';
    }
    let same = |r: Option<usize>, c: Option<usize>| match (r, c) {
        (Some(r), Some(c)) => grid.get((r, c)) == Some(&id),
        _ => false,
    };
    let up = same(row.checked_sub(1), Some(col));
    let right = same(Some(row), col.checked_add(1));
    let down = same(row.checked_add(1), Some(col));
    let left = same(Some(row), col.checked_sub(1));

    match (up, right, down, left) {
        (true, false, false, false) => '╹',
        (false, true, false, false) => '╺',
        (false, false, true, false) => '╻',
        (false, false, false, true) => '╸',
        (true, true, false, false) => '┗',
        (true, false, true, false) => '┃',
        (true, false, false, true) => '┛',
        (false, true, true, false) => '┏',
        (false, true, false, true) => '━',
        (false, false, true, true) => '┓',
        (true, true, true, false) => '┣',
        (true, true, false, true) => '┻',
        (true, false, true, true) => '┫',
        (false, true, true, true) => '┳',
        (true, true, true, true) => '╋',
        (false, false, false, false) => '■',
    }
}

/// Body cells as `●` and border cells as `○`, inside a one-cell margin
pub fn render_orientation(orientation: &Orientation) -> String {
    let rows = orientation.height() + 2;
    let cols = orientation.width() + 2;
    let mut canvas = Array2::from_elem((rows, cols), ' ');

    let mut paint = |row: i32, col: i32, glyph: char| {
        let index = (usize::try_from(row + 1), usize::try_from(col + 1));
        if let (Ok(r), Ok(c)) = index
            && let Some(cell) = canvas.get_mut((r, c))
        {
            *cell = glyph;
        }
    };
    for cell in orientation.border() {
        paint(cell.row, cell.col, '○');
    }
    for cell in orientation.body() {
        paint(cell.row, cell.col, '●');
    }

    let mut out = String::new();
    for row in canvas.rows() {
        let line: String = row.iter().flat_map(|&glyph| [glyph, ' ']).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Every piece with all of its distinct orientations
pub fn render_catalog(catalog: &PieceCatalog) -> String {
    let mut out = String::new();
    for piece in catalog {
        out.push_str(&format!(
            "Piece {} ({}): {} orientations\n",
            piece.id(),
            piece_letter(piece.id()),
            piece.orientations().len()
        ));
        for orientation in piece.orientations() {
            out.push_str(&render_orientation(orientation));
            out.push('\n');
        }
    }
    out
}
