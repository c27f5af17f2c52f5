//! Exhaustive polyomino tiling search for fixed rectangular boards
//!
//! Every piece of a fixed set is used exactly once, in any rotation or mirror
//! image. The search fills the board from a frontier of candidate cells,
//! discards solutions related by board symmetry through a corner ordering rule,
//! and can fork independent sub-searches onto a worker pool at a chosen depth.

#![deny(unsafe_code)]

/// Search engine: frontier, corner pruning, recursive fill, parallel fan-out and solution hand-off
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Piece geometry, orientations and board state
pub mod spatial;

pub use algorithm::executor::{SearchConfig, Solver};
pub use algorithm::sink::{SearchEvent, Solution, SolutionStream};
pub use io::error::{Result, SolverError};
