/// Compact piece-usage set
pub mod bitset;
/// Fork scheduling and outstanding-work tracking
pub mod dispatcher;
/// Solver setup, validation and search launch
pub mod executor;
/// Recursive frontier-driven backtracking
pub mod fill;
/// Ordered candidate cells with lazy skipping of filled entries
pub mod frontier;
/// Solution hand-off between workers and the consumer
pub mod sink;
/// Corner ordering rule for symmetry breaking
pub mod symmetry;
