//! Tests for argument parsing and the solution draining loop

#[cfg(test)]
mod tests {
    use clap::Parser;
    use octotile::io::cli::{Cli, SolveRunner};
    use octotile::io::error::SolverError;
    use octotile::io::visualization::RenderStyle;
    use std::path::PathBuf;

    // Tests default values when no flags are given
    // Verified by defaulting the fork depth to zero
    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["octotile"]).unwrap();
        assert_eq!(cli.depth, -1);
        assert_eq!(cli.count, 0);
        assert_eq!(cli.jobs, None);
        assert_eq!(cli.style, RenderStyle::Letters);
        assert!(cli.should_show_progress());
        assert_eq!(cli.solution_cap(), None);

        let config = cli.search_config();
        assert_eq!(config.fork_depth, None);
        assert!(config.prune_symmetry);
    }

    // Tests that a negative depth parses as a value, not a flag
    // Verified by removing negative number support from the depth flag
    #[test]
    fn test_negative_depth() {
        let cli = Cli::try_parse_from(["octotile", "--depth", "-3"]).unwrap();
        assert_eq!(cli.depth, -3);
        assert_eq!(cli.search_config().fork_depth, None);
    }

    // Tests that every flag reaches the search configuration
    // Verified by ignoring the jobs flag
    #[test]
    fn test_flags_to_config() {
        let cli = Cli::try_parse_from([
            "octotile",
            "-d",
            "2",
            "-j",
            "3",
            "-c",
            "5",
            "-q",
            "--all-symmetries",
            "--root-piece",
            "10",
            "--style",
            "outline",
            "--png-dir",
            "out",
        ])
        .unwrap();

        let config = cli.search_config();
        assert_eq!(config.fork_depth, Some(2));
        assert_eq!(config.workers, 3);
        assert!(!config.prune_symmetry);
        assert_eq!(config.root_piece, Some(10));
        assert_eq!(cli.solution_cap(), Some(5));
        assert!(!cli.should_show_progress());
        assert_eq!(cli.style, RenderStyle::Outline);
        assert_eq!(cli.png_dir, Some(PathBuf::from("out")));
    }

    // Tests rejection of malformed values
    // Verified by accepting any string for the count
    #[test]
    fn test_invalid_values() {
        assert!(Cli::try_parse_from(["octotile", "--count", "many"]).is_err());
        assert!(Cli::try_parse_from(["octotile", "--root-piece", "300"]).is_err());
        assert!(Cli::try_parse_from(["octotile", "--style", "fancy"]).is_err());
    }

    // Tests that listing pieces runs no search
    // Verified by running the search after listing
    #[test]
    fn test_list_pieces() {
        let cli = Cli::try_parse_from(["octotile", "--list-pieces", "-q"]).unwrap();
        assert_eq!(SolveRunner::new(cli).run().unwrap(), 0);
    }

    // Tests that configuration errors surface from the runner
    // Verified by falling back to one worker when zero are requested
    #[test]
    fn test_invalid_configuration() {
        let cli = Cli::try_parse_from(["octotile", "-q", "--jobs", "0"]).unwrap();
        assert!(matches!(
            SolveRunner::new(cli).run(),
            Err(SolverError::InvalidParameter { parameter: "workers", .. })
        ));
    }

    // Tests that the cap stops the search and exports each solution
    // Verified by checking the cap before counting the solution
    #[test]
    fn test_capped_run_exports_png() {
        let dir = tempfile::tempdir().unwrap();
        let png_dir = dir.path().join("solutions");
        let cli = Cli::try_parse_from([
            "octotile",
            "-q",
            "--count-only",
            "--count",
            "1",
            "--jobs",
            "1",
            "--png-dir",
            png_dir.to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(SolveRunner::new(cli).run().unwrap(), 1);
        assert!(png_dir.join("solution_00001.png").exists());
        assert!(!png_dir.join("solution_00002.png").exists());
    }
}
