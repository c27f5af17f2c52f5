//! Board constants, limits and runtime defaults

// Stock puzzle dimensions
/// Number of rows on the stock board
pub const BOARD_HEIGHT: usize = 8;
/// Number of columns on the stock board
pub const BOARD_WIDTH: usize = 8;
/// Number of pieces in the stock set
pub const OCTOGRAM_PIECE_COUNT: usize = 13;

// Validation limits applied once before any search starts
/// Largest supported piece extent in either direction
pub const MAX_PIECE_SIZE: usize = 5;
/// Largest supported number of piece kinds (ids must fit in a grid cell)
pub const MAX_PIECE_COUNT: usize = 255;
/// Largest supported board extent in either direction
pub const MAX_BOARD_DIMENSION: usize = 64;

// Default values for configurable parameters
/// Fork depth used when none is given (negative disables forking)
pub const DEFAULT_FORK_DEPTH: i32 = -1;
/// Solution cap used when none is given (0 drains every solution)
pub const DEFAULT_SOLUTION_CAP: usize = 0;

// Producers block once this many solutions wait unread
/// Capacity of the solution hand-off channel
pub const SOLUTION_CHANNEL_CAPACITY: usize = 16;

// Output settings
/// Edge length of one board cell in exported PNG files
pub const PNG_CELL_SIZE: u32 = 24;
/// Filename prefix for exported solutions
pub const PNG_FILE_PREFIX: &str = "solution";
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

/// Fill colors for the stock piece ids, reused cyclically for larger sets
pub const PIECE_PALETTE: [[u8; 4]; OCTOGRAM_PIECE_COUNT] = [
    [230, 25, 75, 255],
    [60, 180, 75, 255],
    [255, 225, 25, 255],
    [0, 130, 200, 255],
    [245, 130, 48, 255],
    [145, 30, 180, 255],
    [70, 240, 240, 255],
    [240, 50, 230, 255],
    [210, 245, 60, 255],
    [250, 190, 212, 255],
    [0, 128, 128, 255],
    [170, 110, 40, 255],
    [128, 128, 128, 255],
];

/// Color of cells no piece covers
pub const EMPTY_CELL_COLOR: [u8; 4] = [0, 0, 0, 0];
