use crate::algorithm::dispatcher::{Dispatcher, spawn_root};
use crate::algorithm::fill::SearchContext;
use crate::algorithm::sink::{SolutionSink, SolutionStream};
use crate::algorithm::symmetry::CornerRule;
use crate::io::configuration::{MAX_BOARD_DIMENSION, SOLUTION_CHANNEL_CAPACITY};
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::spatial::pieces::{PieceCatalog, PieceId};
use log::warn;
use std::sync::Arc;

/// Search parameters supplied by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth (pieces placed) at which branches fork onto the pool; `None` searches one branch
    pub fork_depth: Option<usize>,
    /// Worker threads in the pool
    pub workers: usize,
    /// Solutions that may wait unread before workers block
    pub channel_capacity: usize,
    /// Whether to keep only one solution per board symmetry class
    pub prune_symmetry: bool,
    /// Only piece allowed to cover the top-left cell, if restricted
    pub root_piece: Option<PieceId>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fork_depth: None,
            workers: num_cpus::get(),
            channel_capacity: SOLUTION_CHANNEL_CAPACITY,
            prune_symmetry: true,
            root_piece: None,
        }
    }
}

impl SearchConfig {
    /// Set the fork depth from a signed value; negative values disable forking
    #[must_use]
    pub fn with_fork_depth(mut self, depth: i32) -> Self {
        self.fork_depth = usize::try_from(depth).ok();
        self
    }

    /// Set the number of worker threads
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// A validated puzzle ready to be searched
///
/// All startup checks happen in `new`; `solve` can then run any number of
/// independent searches over the same pieces and board.
#[derive(Debug, Clone)]
pub struct Solver {
    catalog: PieceCatalog,
    rows: usize,
    cols: usize,
    config: SearchConfig,
    corner_rule: CornerRule,
}

impl Solver {
    /// Validate the board against the pieces and the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A board dimension is zero or exceeds `MAX_BOARD_DIMENSION`
    /// - Some piece does not fit on the board in any orientation
    /// - The worker count is zero
    /// - The root piece id names no piece
    pub fn new(catalog: PieceCatalog, rows: usize, cols: usize, config: SearchConfig) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SolverError::InvalidBoard {
                board: (rows, cols),
                reason: "board must have at least one cell".to_string(),
            });
        }
        if rows > MAX_BOARD_DIMENSION || cols > MAX_BOARD_DIMENSION {
            return Err(SolverError::InvalidBoard {
                board: (rows, cols),
                reason: format!("dimensions are limited to {MAX_BOARD_DIMENSION}"),
            });
        }

        for (index, piece) in catalog.iter().enumerate() {
            if !piece.fits_within(rows, cols) {
                let extent = piece
                    .orientations()
                    .first()
                    .map_or((0, 0), |o| (o.height(), o.width()));
                return Err(SolverError::BoardTooSmall {
                    board: (rows, cols),
                    piece: index,
                    extent,
                });
            }
        }

        if config.workers == 0 {
            return Err(invalid_parameter(
                "workers",
                &config.workers,
                &"at least one worker is required",
            ));
        }
        if let Some(root) = config.root_piece
            && catalog.by_id(root).is_none()
        {
            return Err(invalid_parameter(
                "root_piece",
                &root,
                &format!("piece ids run from 1 to {}", catalog.len()),
            ));
        }

        let area = rows * cols;
        if catalog.cell_count() != area {
            warn!(
                "Pieces cover {} cells but the board has {area}; no tiling exists",
                catalog.cell_count()
            );
        }

        let corner_rule = if config.prune_symmetry {
            CornerRule::for_board(rows, cols, catalog.len(), catalog.max_extent())
        } else {
            CornerRule::Disabled
        };

        Ok(Self {
            catalog,
            rows,
            cols,
            config,
            corner_rule,
        })
    }

    /// The stock puzzle: octogram pieces on the standard board
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn octogram(config: SearchConfig) -> Result<Self> {
        use crate::io::configuration::{BOARD_HEIGHT, BOARD_WIDTH};
        Self::new(PieceCatalog::octogram()?, BOARD_HEIGHT, BOARD_WIDTH, config)
    }

    /// Pieces of this puzzle
    pub const fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    /// Board dimensions (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Search parameters
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Symmetry rule applied during the search
    pub const fn corner_rule(&self) -> CornerRule {
        self.corner_rule
    }

    /// Start a search and return the stream its solutions arrive on
    ///
    /// The search runs on its own worker pool. The stream ends with the
    /// end-of-stream marker once every branch has finished; dropping it
    /// earlier stops the remaining branches.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be started
    pub fn solve(&self) -> Result<SolutionStream> {
        let dispatcher = Dispatcher::new(self.config.workers)?;
        let (sink, receiver) = SolutionSink::new(self.config.channel_capacity);
        let stream = sink.stream(receiver);

        let ctx = Arc::new(SearchContext {
            catalog: self.catalog.clone(),
            rows: self.rows,
            cols: self.cols,
            fork_depth: self.config.fork_depth,
            root_piece: self.config.root_piece,
            corner_rule: self.corner_rule,
            sink,
            dispatcher,
        });
        spawn_root(&ctx);

        Ok(stream)
    }
}
