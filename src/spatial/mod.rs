//! Spatial data structures for the tiling search
//!
//! This module contains:
//! - Board and offset coordinates
//! - Piece orientations with their border cells
//! - Piece shapes, the stock piece set and per-piece orientation lists
//! - Board state with placement, undo and the corner symmetry check

/// Board state with placement and undo
pub mod board;
/// Oriented piece bodies and borders
pub mod orientation;
/// Piece shapes, pieces and piece catalogs
pub mod pieces;
/// Grid coordinates and offsets
pub mod position;

pub use board::Board;
pub use orientation::Orientation;
pub use pieces::{Piece, PieceCatalog, PieceId, PieceShape};
pub use position::Position;
