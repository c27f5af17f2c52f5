//! Parallel fan-out of search branches
//!
//! At the fork depth a branch stops descending into its piece choices itself.
//! Each choice gets a deep copy of the board and a snapshot of the remaining
//! frontier, and runs as an independent job on the worker pool while the
//! parent moves on to its next choice. Nothing mutable is shared between a
//! parent and its forks except the solution sink and the outstanding-work
//! counter.
//!
//! Every job, the root included, is registered before it is scheduled and
//! deregisters when it finishes (also on unwind). The job that brings the
//! counter back to zero sends the end-of-stream marker, so it is sent exactly
//! once and only after every solution.

use crate::algorithm::fill::{Branch, Engine, SearchContext};
use crate::io::error::Result;
use crate::spatial::position::Position;
use log::{debug, error, info};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Worker pool plus the count of registered, unfinished jobs
#[derive(Debug)]
pub struct Dispatcher {
    pool: ThreadPool,
    outstanding: AtomicUsize,
}

impl Dispatcher {
    /// Start a pool with `workers` threads
    ///
    /// # Errors
    ///
    /// Returns an error if the thread pool cannot be created
    pub fn new(workers: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("octotile-worker-{index}"))
            .panic_handler(|_| error!("Search worker panicked; its branch is abandoned"))
            .build()?;

        Ok(Self {
            pool,
            outstanding: AtomicUsize::new(0),
        })
    }

    /// Number of jobs registered and not yet finished
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Number of threads in the pool
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

/// Registration of one job; dropping it deregisters the job
struct WorkUnit {
    ctx: Arc<SearchContext>,
}

impl WorkUnit {
    fn register(ctx: &Arc<SearchContext>) -> Self {
        ctx.dispatcher.outstanding.fetch_add(1, Ordering::AcqRel);
        Self {
            ctx: Arc::clone(ctx),
        }
    }
}

impl Drop for WorkUnit {
    fn drop(&mut self) {
        if self.ctx.dispatcher.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            info!("Search finished: {}", self.ctx.sink.stats());
            self.ctx.sink.finish();
        }
    }
}

/// Register a job and schedule it on the pool
///
/// The job receives a fresh engine bound to `ctx`. The caller does not wait.
pub fn spawn<F>(ctx: &Arc<SearchContext>, job: F)
where
    F: FnOnce(&mut Engine) + Send + 'static,
{
    let unit = WorkUnit::register(ctx);
    ctx.dispatcher.pool.spawn(move || {
        // Engine flushes its counters before the unit can report completion
        let unit = unit;
        let mut engine = Engine::new(Arc::clone(&unit.ctx));
        job(&mut engine);
    });
}

/// Start the root branch: empty board, frontier holding the top-left cell
pub fn spawn_root(ctx: &Arc<SearchContext>) {
    debug!(
        "Starting search on a {}x{} board with {} pieces, fork depth {:?}",
        ctx.rows,
        ctx.cols,
        ctx.catalog.len(),
        ctx.fork_depth
    );
    spawn(ctx, |engine| {
        let ctx = Arc::clone(engine.context());
        let mut branch = Branch::root(ctx.rows, ctx.cols, ctx.catalog.len());
        engine.fill_positions(&mut branch, 0);
    });
}

/// Continue `branch` with piece `piece_index` on seed `seed` as an independent job
///
/// The fork copies the board and the frontier from `rest` onwards, so it
/// resumes from frontier index 0.
pub fn fork(ctx: &Arc<SearchContext>, branch: &Branch, seed: Position, piece_index: usize, rest: usize) {
    let mut forked = branch.fork(rest);
    ctx.sink.stats().record_fork();
    debug!(
        "Forking piece {} at seed {seed}, depth {}",
        piece_index + 1,
        branch.board().depth()
    );

    spawn(ctx, move |engine| {
        let ctx = Arc::clone(engine.context());
        if let Some(piece) = ctx.catalog.get(piece_index) {
            engine.fill_with_piece(&mut forked, seed, piece, 0);
        }
    });
}
