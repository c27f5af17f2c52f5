//! Recursive frontier-driven backtracking
//!
//! One step takes the first frontier entry that is still empty (the seed) and
//! tries every unused piece in every orientation at every anchor that puts one
//! of its body cells on the seed. Each successful placement is checked against
//! the corner rule, then either emitted as a solution (last piece, if the rule
//! keeps the finished board) or explored one level deeper. The placement guard undoes the placement on every exit
//! path of that step.

use crate::algorithm::dispatcher::{Dispatcher, fork};
use crate::algorithm::frontier::Frontier;
use crate::algorithm::sink::SolutionSink;
use crate::algorithm::symmetry::CornerRule;
use crate::spatial::board::Board;
use crate::spatial::orientation::Orientation;
use crate::spatial::pieces::{Piece, PieceCatalog, PieceId};
use crate::spatial::position::Position;
use log::trace;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Read-only state shared by every branch of one search, plus the shared channels
#[derive(Debug)]
pub struct SearchContext {
    /// Pieces with their orientations
    pub catalog: PieceCatalog,
    /// Board rows
    pub rows: usize,
    /// Board columns
    pub cols: usize,
    /// Depth (pieces placed) at which branches fork, `None` for a single branch
    pub fork_depth: Option<usize>,
    /// Only piece tried at depth 0, if restricted
    pub root_piece: Option<PieceId>,
    /// Symmetry breaking rule checked after every placement
    pub corner_rule: CornerRule,
    /// Where solutions go
    pub sink: SolutionSink,
    /// Worker pool and outstanding-work counter
    pub dispatcher: Dispatcher,
}

impl SearchContext {
    /// Whether a branch at `depth` hands its piece choices to new workers
    pub fn forks_at(&self, depth: usize) -> bool {
        self.fork_depth == Some(depth)
    }

    fn allows_at_root(&self, depth: usize, piece: PieceId) -> bool {
        depth != 0 || self.root_piece.is_none_or(|root| root == piece)
    }
}

/// Mutable state of one search branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    board: Board,
    frontier: Frontier,
}

impl Branch {
    /// Empty board whose frontier holds the top-left cell
    pub fn root(rows: usize, cols: usize, piece_count: usize) -> Self {
        Self {
            board: Board::new(rows, cols, piece_count),
            frontier: Frontier::seeded(Position::origin()),
        }
    }

    /// Assemble a branch from existing parts
    pub const fn from_parts(board: Board, frontier: Frontier) -> Self {
        Self { board, frontier }
    }

    /// Board of this branch
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Frontier of this branch
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Independent copy for a new worker: full board, frontier from `from` onwards
    #[must_use]
    pub fn fork(&self, from: usize) -> Self {
        Self {
            board: self.board.clone(),
            frontier: self.frontier.snapshot(from),
        }
    }

    /// Place a piece and extend the frontier; the guard undoes both when dropped
    pub fn place<'a>(
        &'a mut self,
        anchor: Position,
        orientation: &'a Orientation,
        piece: PieceId,
    ) -> Option<PlacementGuard<'a>> {
        let mark = self.frontier.mark();
        let exposed = self.board.try_place(anchor, orientation, piece)?;
        self.frontier.extend(exposed);
        Some(PlacementGuard {
            branch: self,
            anchor,
            orientation,
            mark,
        })
    }
}

/// A live placement on a branch
///
/// Dereferences to the branch so the search can descend through it.
#[derive(Debug)]
pub struct PlacementGuard<'a> {
    branch: &'a mut Branch,
    anchor: Position,
    orientation: &'a Orientation,
    mark: usize,
}

impl Deref for PlacementGuard<'_> {
    type Target = Branch;

    fn deref(&self) -> &Branch {
        self.branch
    }
}

impl DerefMut for PlacementGuard<'_> {
    fn deref_mut(&mut self) -> &mut Branch {
        self.branch
    }
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        self.branch.frontier.truncate(self.mark);
        self.branch.board.unplace(self.anchor, self.orientation);
    }
}

/// Runs the backtracking search for branches on one worker
#[derive(Debug)]
pub struct Engine {
    ctx: Arc<SearchContext>,
    placements: u64,
}

impl Engine {
    /// Engine bound to a search context
    pub const fn new(ctx: Arc<SearchContext>) -> Self {
        Self { ctx, placements: 0 }
    }

    /// The shared search context
    pub const fn context(&self) -> &Arc<SearchContext> {
        &self.ctx
    }

    /// Placement attempts made by this engine so far
    pub const fn placements(&self) -> u64 {
        self.placements
    }

    /// Fill the board starting from the first empty frontier entry at or after `cursor`
    pub fn fill_positions(&mut self, branch: &mut Branch, cursor: usize) {
        if self.ctx.sink.is_cancelled() {
            return;
        }

        let Some((index, seed)) = branch.frontier.next_empty(cursor, &branch.board) else {
            trace!(
                "Frontier exhausted at depth {} with no empty seed",
                branch.board.depth()
            );
            return;
        };
        let rest = index + 1;

        let ctx = Arc::clone(&self.ctx);
        let depth = branch.board.depth();
        for (piece_index, piece) in ctx.catalog.iter().enumerate() {
            if branch.board.is_used(piece.id()) || !ctx.allows_at_root(depth, piece.id()) {
                continue;
            }
            if ctx.forks_at(depth) {
                fork(&ctx, branch, seed, piece_index, rest);
            } else {
                self.fill_with_piece(branch, seed, piece, rest);
            }
        }
    }

    /// Try every placement of `piece` that covers `seed`
    ///
    /// `rest` is the frontier index where the search continues after this placement.
    pub fn fill_with_piece(&mut self, branch: &mut Branch, seed: Position, piece: &Piece, rest: usize) {
        let piece_count = self.ctx.catalog.len();
        let rule = self.ctx.corner_rule;

        for orientation in piece.orientations() {
            for &offset in orientation.body() {
                self.placements += 1;
                let Some(mut placed) = branch.place(seed - offset, orientation, piece.id()) else {
                    continue;
                };
                if !placed.board.symmetry_ok(&rule) {
                    continue;
                }
                if placed.board.depth() == piece_count {
                    // Pieces covering less than the board leave holes
                    if placed.board.is_full() && rule.keeps(placed.board.grid()) {
                        self.ctx.sink.emit(&placed.board);
                    }
                } else {
                    self.fill_positions(&mut placed, rest);
                }
            }
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.ctx.sink.stats().add_placements(self.placements);
    }
}
