//! Piece shapes, orientation lists and the piece catalog
//!
//! Shapes are fixed startup data. Each shape expands once into its distinct
//! orientations (at most eight), which stay read-only for the whole run and are
//! shared by every search branch.

use crate::io::configuration::{MAX_PIECE_COUNT, MAX_PIECE_SIZE, OCTOGRAM_PIECE_COUNT};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::spatial::orientation::Orientation;
use crate::spatial::position::Position;
use ndarray::Array2;

/// Piece identity as stored in board cells (0 marks an empty cell)
pub type PieceId = u8;

/// The thirteen octogram pieces: twelve pentominoes and the square tetromino
///
/// Rows use `#` for body cells and `.` for gaps; short rows are padded.
pub const OCTOGRAM_SHAPES: [&[&str]; OCTOGRAM_PIECE_COUNT] = [
    &["#####"],
    &["####", "#"],
    &["###", "#", "#"],
    &["####", ".#"],
    &["##", ".##", ".#"],
    &[".#", "###", ".#"],
    &["###", "##"],
    &["#", "###", "#"],
    &[".##", "##", "#"],
    &["##", "#", "##"],
    &[".###", "##"],
    &[".##", ".#", "##"],
    &["##", "##"],
];

/// Immutable boolean mask describing one piece's initial body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceShape {
    mask: Array2<bool>,
}

impl PieceShape {
    /// Wrap a boolean mask
    pub const fn from_mask(mask: Array2<bool>) -> Self {
        Self { mask }
    }

    /// Parse rows of `#` (body) and `.` or space (gap)
    ///
    /// Rows may differ in length; missing cells are gaps.
    ///
    /// # Errors
    ///
    /// Returns an error if a row contains any other character
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut mask = Array2::from_elem((height, width), false);

        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let filled = match ch {
                    '#' => true,
                    '.' | ' ' => false,
                    _ => {
                        return Err(invalid_parameter(
                            "shape",
                            row,
                            &format!("unexpected character '{ch}'"),
                        ));
                    }
                };
                if let Some(cell) = mask.get_mut((r, c)) {
                    *cell = filled;
                }
            }
        }

        Ok(Self { mask })
    }

    /// The stock octogram shapes
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in shape table is malformed
    pub fn octogram() -> Result<Vec<Self>> {
        OCTOGRAM_SHAPES.iter().map(|rows| Self::parse(rows)).collect()
    }

    /// Body cells, normalised so the topmost and leftmost cells sit on row and column 0
    pub fn cells(&self) -> Vec<Position> {
        let raw: Vec<Position> = self
            .mask
            .indexed_iter()
            .filter(|(_, filled)| **filled)
            .map(|((r, c), _)| Position::new(r as i32, c as i32))
            .collect();

        let min_row = raw.iter().map(|p| p.row).min().unwrap_or(0);
        let min_col = raw.iter().map(|p| p.col).min().unwrap_or(0);
        raw.into_iter()
            .map(|p| Position::new(p.row - min_row, p.col - min_col))
            .collect()
    }

    /// Bounding box of the body cells (rows, cols)
    pub fn extent(&self) -> (usize, usize) {
        let cells = self.cells();
        let rows = cells.iter().map(|p| p.row + 1).max().unwrap_or(0);
        let cols = cells.iter().map(|p| p.col + 1).max().unwrap_or(0);
        (rows as usize, cols as usize)
    }

    /// Number of body cells
    pub fn cell_count(&self) -> usize {
        self.mask.iter().filter(|filled| **filled).count()
    }

    /// Orientation of the shape as given, without any transformation
    pub fn base_orientation(&self) -> Orientation {
        let (height, width) = self.extent();
        Orientation::from_body(height, width, self.cells())
    }
}

/// Compute the distinct orientations of a shape
///
/// Candidates are generated in a fixed order: the base form, three successive
/// quarter turns, then the mirror of the last turn followed by three more
/// quarter turns. A candidate is kept only if no earlier entry is equal, so
/// symmetric shapes collapse to their true orientation count.
pub fn build_orientations(shape: &PieceShape) -> Vec<Orientation> {
    let mut orientations: Vec<Orientation> = Vec::with_capacity(8);
    let mut current = shape.base_orientation();
    orientations.push(current.clone());

    for step in 1..8 {
        current = if step == 4 {
            current.mirror()
        } else {
            current.rotate()
        };
        if !orientations.contains(&current) {
            orientations.push(current.clone());
        }
    }

    orientations
}

/// One piece kind with its distinct orientations
#[derive(Debug, Clone)]
pub struct Piece {
    id: PieceId,
    orientations: Vec<Orientation>,
}

impl Piece {
    /// Expand a shape into a piece with the given id
    pub fn new(id: PieceId, shape: &PieceShape) -> Self {
        Self {
            id,
            orientations: build_orientations(shape),
        }
    }

    /// Piece identity (1-based)
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Distinct orientations in generation order
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Number of body cells
    pub fn cell_count(&self) -> usize {
        self.orientations
            .first()
            .map_or(0, Orientation::cell_count)
    }

    /// Longest side of the bounding box over all orientations
    pub fn max_extent(&self) -> usize {
        self.orientations
            .iter()
            .map(|o| o.height().max(o.width()))
            .max()
            .unwrap_or(0)
    }

    /// Whether some orientation fits inside a `rows` x `cols` board
    pub fn fits_within(&self, rows: usize, cols: usize) -> bool {
        self.orientations
            .iter()
            .any(|o| o.height() <= rows && o.width() <= cols)
    }
}

/// The validated piece set of one run, ids 1..=N in input order
#[derive(Debug, Clone)]
pub struct PieceCatalog {
    pieces: Vec<Piece>,
}

impl PieceCatalog {
    /// Validate shapes and expand them into pieces
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No shapes or more than `MAX_PIECE_COUNT` shapes are supplied
    /// - A shape has no body cells
    /// - A shape is taller or wider than `MAX_PIECE_SIZE`
    pub fn new(shapes: &[PieceShape]) -> Result<Self> {
        if shapes.is_empty() || shapes.len() > MAX_PIECE_COUNT {
            return Err(SolverError::TooManyPieces {
                count: shapes.len(),
                max: MAX_PIECE_COUNT,
            });
        }

        let mut pieces = Vec::with_capacity(shapes.len());
        for (index, shape) in shapes.iter().enumerate() {
            if shape.cell_count() == 0 {
                return Err(SolverError::InvalidPieceShape {
                    piece: index,
                    reason: "shape has no body cells".to_string(),
                });
            }
            let (rows, cols) = shape.extent();
            if rows > MAX_PIECE_SIZE || cols > MAX_PIECE_SIZE {
                return Err(SolverError::InvalidPieceShape {
                    piece: index,
                    reason: format!(
                        "extent {rows}x{cols} exceeds {MAX_PIECE_SIZE}x{MAX_PIECE_SIZE}"
                    ),
                });
            }
            let id = PieceId::try_from(index + 1)
                .ok()
                .ok_or(SolverError::TooManyPieces {
                    count: shapes.len(),
                    max: MAX_PIECE_COUNT,
                })?;
            pieces.push(Piece::new(id, shape));
        }

        Ok(Self { pieces })
    }

    /// Catalog of the stock octogram pieces
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in shape table is malformed
    pub fn octogram() -> Result<Self> {
        Self::new(&PieceShape::octogram()?)
    }

    /// Number of piece kinds
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the catalog holds no pieces (never true after validation)
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Pieces in id order
    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    /// Piece at a zero-based index
    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    /// Piece with the given 1-based id
    pub fn by_id(&self, id: PieceId) -> Option<&Piece> {
        (id as usize).checked_sub(1).and_then(|index| self.get(index))
    }

    /// Total number of body cells over all pieces
    pub fn cell_count(&self) -> usize {
        self.pieces.iter().map(Piece::cell_count).sum()
    }

    /// Longest bounding box side over all pieces
    pub fn max_extent(&self) -> usize {
        self.pieces.iter().map(Piece::max_extent).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a PieceCatalog {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
