//! Solution hand-off from search workers to a single consumer
//!
//! Workers push completed boards into a bounded channel and block when the
//! consumer falls behind. Once every unit of work has finished, exactly one
//! `SearchEvent::Done` follows the last solution. Solutions from different
//! workers arrive in no particular order.
//!
//! Dropping the consuming `SolutionStream` cancels the search. The stream
//! raises the stop flag it shares with the sink, any send still blocked on a
//! full channel fails, and branches stop at their next recursion entry.

use crate::io::visualization::render_letters;
use crate::spatial::board::Board;
use crate::spatial::pieces::PieceId;
use crossbeam_channel::{Receiver, Sender, bounded};
use log::debug;
use ndarray::Array2;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// A completely filled board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    grid: Array2<PieceId>,
}

impl Solution {
    /// Wrap a finished grid
    pub const fn new(grid: Array2<PieceId>) -> Self {
        Self { grid }
    }

    /// Piece id per cell
    pub const fn grid(&self) -> &Array2<PieceId> {
        &self.grid
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.grid.ncols()
    }

    /// Take ownership of the grid
    pub fn into_grid(self) -> Array2<PieceId> {
        self.grid
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_letters(&self.grid))
    }
}

/// Message seen by the consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// One completed board
    Solution(Solution),
    /// Every branch, forked or not, has finished; nothing follows
    Done,
}

/// Counters shared by every branch of one search
#[derive(Debug, Default)]
pub struct SearchStats {
    forks: AtomicUsize,
    solutions: AtomicUsize,
    placements: AtomicU64,
}

impl SearchStats {
    /// Number of branches handed to the worker pool (root excluded)
    pub fn forks(&self) -> usize {
        self.forks.load(Ordering::Relaxed)
    }

    /// Number of solutions handed to the consumer
    pub fn solutions(&self) -> usize {
        self.solutions.load(Ordering::Relaxed)
    }

    /// Number of placement attempts, flushed as each branch finishes
    pub fn placements(&self) -> u64 {
        self.placements.load(Ordering::Relaxed)
    }

    /// Count one forked branch
    pub fn record_fork(&self) {
        self.forks.fetch_add(1, Ordering::Relaxed);
    }

    /// Add placement attempts made by one branch
    pub fn add_placements(&self, count: u64) {
        self.placements.fetch_add(count, Ordering::Relaxed);
    }

    fn record_solution(&self) {
        self.solutions.fetch_add(1, Ordering::Relaxed);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} solutions, {} forks, {} placements tried",
            self.solutions(),
            self.forks(),
            self.placements()
        )
    }
}

/// Producer side, shared by every worker of one search
#[derive(Debug)]
pub struct SolutionSink {
    sender: Sender<SearchEvent>,
    cancelled: Arc<AtomicBool>,
    stats: Arc<SearchStats>,
}

impl SolutionSink {
    /// Create a sink and the receiver its events arrive on
    ///
    /// A capacity of 0 makes every send a rendezvous with the consumer.
    pub fn new(capacity: usize) -> (Self, Receiver<SearchEvent>) {
        let (sender, receiver) = bounded(capacity);
        let sink = Self {
            sender,
            cancelled: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(SearchStats::default()),
        };
        (sink, receiver)
    }

    /// Consumer for `receiver` whose drop cancels this sink's search
    pub fn stream(&self, receiver: Receiver<SearchEvent>) -> SolutionStream {
        SolutionStream {
            receiver,
            stats: self.stats_handle(),
            cancelled: Arc::clone(&self.cancelled),
            finished: false,
        }
    }

    /// Hand a copy of a completed board to the consumer
    ///
    /// Blocks while the channel is full. Returns `false` once the consumer is
    /// gone, after which the search counts as cancelled.
    pub fn emit(&self, board: &Board) -> bool {
        if self.is_cancelled() {
            return false;
        }
        let solution = Solution::new(board.grid().clone());
        if self.sender.send(SearchEvent::Solution(solution)).is_ok() {
            self.stats.record_solution();
            true
        } else {
            debug!("Consumer disconnected, cancelling search");
            self.cancelled.store(true, Ordering::Release);
            false
        }
    }

    /// Send the end-of-stream marker
    pub fn finish(&self) {
        if self.sender.send(SearchEvent::Done).is_err() {
            debug!("Consumer disconnected before end of stream");
        }
    }

    /// Whether the consumer has gone away
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Counters for this search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Shared handle to the counters
    pub fn stats_handle(&self) -> Arc<SearchStats> {
        Arc::clone(&self.stats)
    }
}

/// Consumer side of one search
///
/// Iterating yields solutions until the end-of-stream marker. Dropping the
/// stream early stops the remaining workers.
#[derive(Debug)]
pub struct SolutionStream {
    receiver: Receiver<SearchEvent>,
    stats: Arc<SearchStats>,
    cancelled: Arc<AtomicBool>,
    finished: bool,
}

impl SolutionStream {
    /// Wrap a bare receiver; dropping it only disconnects the channel
    pub fn new(receiver: Receiver<SearchEvent>, stats: Arc<SearchStats>) -> Self {
        Self {
            receiver,
            stats,
            cancelled: Arc::new(AtomicBool::new(false)),
            finished: false,
        }
    }

    /// Block for the next raw event
    ///
    /// Returns `None` once every producer is gone and the channel is drained.
    pub fn next_event(&mut self) -> Option<SearchEvent> {
        let event = self.receiver.recv().ok()?;
        if event == SearchEvent::Done {
            self.finished = true;
        }
        Some(event)
    }

    /// Whether the end-of-stream marker has been received
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Counters of the running search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Shared handle to the counters that outlives the stream
    pub fn stats_handle(&self) -> Arc<SearchStats> {
        Arc::clone(&self.stats)
    }
}

impl Iterator for SolutionStream {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        if self.finished {
            return None;
        }
        match self.next_event()? {
            SearchEvent::Solution(solution) => Some(solution),
            SearchEvent::Done => None,
        }
    }
}

impl Drop for SolutionStream {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
