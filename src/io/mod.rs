/// Command-line interface and the solution draining loop
pub mod cli;
/// Board constants, limits and runtime defaults
pub mod configuration;
/// Error types for validation and output failures
pub mod error;
/// PNG export of finished boards
pub mod image;
/// Progress spinner for long searches
pub mod progress;
/// Text rendering of boards and orientations
pub mod visualization;
