//! Error types for startup validation and output failures
//!
//! A placement that does not fit is an ordinary search outcome and never an
//! error. Everything here is either rejected before the search begins or
//! raised by the output layer around it.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// A piece shape violates the supported shape limits
    InvalidPieceShape {
        /// Zero-based index of the offending shape
        piece: usize,
        /// Description of what's wrong with the shape
        reason: String,
    },

    /// Some piece cannot fit on the board in any orientation
    BoardTooSmall {
        /// Board dimensions (rows, cols)
        board: (usize, usize),
        /// Zero-based index of the piece that does not fit
        piece: usize,
        /// Bounding box of that piece (rows, cols)
        extent: (usize, usize),
    },

    /// Board dimensions are zero or exceed the supported maximum
    InvalidBoard {
        /// Requested board dimensions (rows, cols)
        board: (usize, usize),
        /// Explanation of why the board was rejected
        reason: String,
    },

    /// More piece kinds than a grid cell can name
    TooManyPieces {
        /// Number of shapes supplied
        count: usize,
        /// Maximum number of shapes supported
        max: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The worker pool could not be started
    ThreadPool {
        /// Underlying pool construction error
        source: rayon::ThreadPoolBuildError,
    },

    /// Failed to save a rendered solution to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing solutions to standard output failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPieceShape { piece, reason } => {
                write!(f, "Invalid shape for piece {}: {reason}", piece + 1)
            }
            Self::BoardTooSmall {
                board,
                piece,
                extent,
            } => {
                write!(
                    f,
                    "Piece {} ({}x{}) does not fit on a {}x{} board",
                    piece + 1,
                    extent.0,
                    extent.1,
                    board.0,
                    board.1
                )
            }
            Self::InvalidBoard { board, reason } => {
                write!(f, "Invalid board {}x{}: {reason}", board.0, board.1)
            }
            Self::TooManyPieces { count, max } => {
                write!(f, "{count} piece kinds supplied (max: {max})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ThreadPool { source } => {
                write!(f, "Failed to start worker pool: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { source } => {
                write!(f, "Failed to write solution output: {source}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ThreadPool { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<rayon::ThreadPoolBuildError> for SolverError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool { source: err }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
