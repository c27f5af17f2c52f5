//! Command-line interface for enumerating octogram tilings

use crate::algorithm::executor::{SearchConfig, Solver};
use crate::algorithm::sink::Solution;
use crate::io::configuration::{DEFAULT_FORK_DEPTH, DEFAULT_SOLUTION_CAP, PNG_CELL_SIZE};
use crate::io::error::Result;
use crate::io::image::{export_grid_as_png, solution_path};
use crate::io::progress::SolutionProgress;
use crate::io::visualization::{RenderStyle, render, render_catalog};
use crate::spatial::pieces::{PieceCatalog, PieceId};
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "octotile")]
#[command(
    author,
    version,
    about = "Enumerate every tiling of the 8x8 octogram board"
)]
/// Command-line arguments for the tiling search
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Depth at which branches fork onto worker threads (negative: no forking)
    #[arg(short, long, default_value_t = DEFAULT_FORK_DEPTH, allow_negative_numbers = true)]
    pub depth: i32,

    /// Stop after this many solutions (0: no limit)
    #[arg(short, long, default_value_t = DEFAULT_SOLUTION_CAP)]
    pub count: usize,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Print only the final solution count
    #[arg(long)]
    pub count_only: bool,

    /// How solutions are drawn
    #[arg(short, long, value_enum, default_value_t = RenderStyle::default())]
    pub style: RenderStyle,

    /// Directory to write one PNG per solution into
    #[arg(long, value_name = "DIR")]
    pub png_dir: Option<PathBuf>,

    /// Print every piece with its orientations and exit
    #[arg(long)]
    pub list_pieces: bool,

    /// Keep solutions that are rotations or mirror images of each other
    #[arg(long)]
    pub all_symmetries: bool,

    /// Only let this piece id cover the top-left cell
    #[arg(long, value_name = "ID")]
    pub root_piece: Option<PieceId>,
}

impl Cli {
    /// Search parameters described by the flags
    pub fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default().with_fork_depth(self.depth);
        if let Some(jobs) = self.jobs {
            config = config.with_workers(jobs);
        }
        config.prune_symmetry = !self.all_symmetries;
        config.root_piece = self.root_piece;
        config
    }

    /// Solution cap, `None` when unlimited
    pub const fn solution_cap(&self) -> Option<usize> {
        if self.count == 0 { None } else { Some(self.count) }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one search and writes its solutions to stdout
pub struct SolveRunner {
    cli: Cli,
    progress: SolutionProgress,
}

impl SolveRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() && !cli.list_pieces {
            SolutionProgress::new()
        } else {
            SolutionProgress::hidden()
        };
        Self { cli, progress }
    }

    /// Run the search and report every solution; returns how many were reported
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The search configuration is invalid
    /// - The worker pool cannot be started
    /// - Writing to stdout or exporting a PNG fails
    pub fn run(&self) -> Result<usize> {
        if self.cli.list_pieces {
            let catalog = PieceCatalog::octogram()?;
            std::io::stdout()
                .lock()
                .write_all(render_catalog(&catalog).as_bytes())?;
            return Ok(0);
        }

        let solver = Solver::octogram(self.cli.search_config())?;
        let start = Instant::now();
        let mut stream = solver.solve()?;

        let mut found = 0;
        for solution in stream.by_ref() {
            found += 1;
            self.report(found, &solution)?;
            if self.cli.solution_cap().is_some_and(|cap| found >= cap) {
                info!("Solution cap of {found} reached, stopping search");
                break;
            }
        }
        let summary = stream.stats().to_string();
        drop(stream);

        self.progress.finish(found);
        info!("{summary}");
        writeln!(
            std::io::stdout().lock(),
            "Found {found} solutions in {:.2?}",
            start.elapsed()
        )?;
        Ok(found)
    }

    fn report(&self, index: usize, solution: &Solution) -> Result<()> {
        if let Some(dir) = &self.cli.png_dir {
            export_grid_as_png(solution.grid(), PNG_CELL_SIZE, &solution_path(dir, index))?;
        }
        self.progress.record(index);
        if self.cli.count_only {
            return Ok(());
        }

        let text = render(solution.grid(), self.cli.style);
        self.progress.suspend(|| {
            let mut out = std::io::stdout().lock();
            writeln!(out, "Solution {index}")?;
            writeln!(out, "{text}")
        })?;
        Ok(())
    }
}
