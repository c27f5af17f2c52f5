//! CLI entry point for the polyomino tiling search

use clap::Parser;
use octotile::io::cli::{Cli, SolveRunner};

fn main() -> octotile::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    SolveRunner::new(cli).run().map(|_| ())
}
