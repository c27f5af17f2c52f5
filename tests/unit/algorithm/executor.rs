//! Tests for search configuration, startup validation and search launch

#[cfg(test)]
mod tests {
    use octotile::algorithm::executor::{SearchConfig, Solver};
    use octotile::algorithm::symmetry::CornerRule;
    use octotile::io::configuration::SOLUTION_CHANNEL_CAPACITY;
    use octotile::io::error::SolverError;
    use octotile::spatial::pieces::{PieceCatalog, PieceShape};

    fn catalog(shapes: &[&[&str]]) -> PieceCatalog {
        let shapes: Vec<PieceShape> = shapes
            .iter()
            .map(|rows| PieceShape::parse(rows).unwrap())
            .collect();
        PieceCatalog::new(&shapes).unwrap()
    }

    fn single_worker() -> SearchConfig {
        SearchConfig::default().with_workers(1)
    }

    // Tests default search parameters
    // Verified by disabling symmetry pruning by default
    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.fork_depth, None);
        assert!(config.workers >= 1);
        assert_eq!(config.channel_capacity, SOLUTION_CHANNEL_CAPACITY);
        assert!(config.prune_symmetry);
        assert_eq!(config.root_piece, None);
    }

    // Tests that negative fork depths disable forking
    // Verified by clamping negative depths to zero
    #[test]
    fn test_with_fork_depth() {
        assert_eq!(SearchConfig::default().with_fork_depth(-1).fork_depth, None);
        assert_eq!(SearchConfig::default().with_fork_depth(0).fork_depth, Some(0));
        assert_eq!(SearchConfig::default().with_fork_depth(3).fork_depth, Some(3));
    }

    // Tests rejection of empty and oversized boards
    // Verified by removing the dimension checks
    #[test]
    fn test_invalid_board() {
        let pieces = catalog(&[&["#"]]);
        for (rows, cols) in [(0, 4), (4, 0), (65, 1)] {
            let result = Solver::new(pieces.clone(), rows, cols, single_worker());
            assert!(matches!(result, Err(SolverError::InvalidBoard { .. })));
        }
    }

    // Tests rejection of pieces that fit in no orientation
    // Verified by checking only the first orientation
    #[test]
    fn test_board_too_small() {
        let result = Solver::new(catalog(&[&["##"], &["#####"]]), 4, 4, single_worker());
        let Err(SolverError::BoardTooSmall { piece, extent, .. }) = result else {
            unreachable!("five-long piece cannot fit on a 4x4 board");
        };
        assert_eq!(piece, 1);
        assert_eq!(extent, (1, 5));

        assert!(Solver::new(catalog(&[&["###"]]), 1, 3, single_worker()).is_ok());
        assert!(Solver::new(catalog(&[&["###"]]), 3, 1, single_worker()).is_ok());
    }

    // Tests rejection of a zero worker count
    // Verified by clamping the worker count to one
    #[test]
    fn test_zero_workers() {
        let result = Solver::new(catalog(&[&["#"]]), 1, 1, SearchConfig::default().with_workers(0));
        assert!(matches!(
            result,
            Err(SolverError::InvalidParameter { parameter: "workers", .. })
        ));
    }

    // Tests rejection of a root piece outside the catalog
    // Verified by accepting any non-zero root id
    #[test]
    fn test_unknown_root_piece() {
        let mut config = single_worker();
        config.root_piece = Some(3);
        let result = Solver::new(catalog(&[&["#"], &["#"]]), 1, 2, config);
        assert!(matches!(
            result,
            Err(SolverError::InvalidParameter { parameter: "root_piece", .. })
        ));

        config.root_piece = Some(2);
        assert!(Solver::new(catalog(&[&["#"], &["#"]]), 1, 2, config).is_ok());
    }

    // Tests that an area mismatch is accepted and simply finds nothing
    // Verified by rejecting mismatched areas during validation
    #[test]
    fn test_area_mismatch_yields_nothing() {
        let solver = Solver::new(catalog(&[&["##"]]), 2, 2, single_worker()).unwrap();
        assert_eq!(solver.solve().unwrap().count(), 0);
    }

    // Tests corner rule selection for pruning on and off
    // Verified by ignoring the pruning flag
    #[test]
    fn test_corner_rule_selection() {
        let solver = Solver::octogram(single_worker()).unwrap();
        assert_eq!(solver.corner_rule(), CornerRule::Dihedral { piece_count: 13 });
        assert_eq!(solver.dimensions(), (8, 8));
        assert_eq!(solver.catalog().len(), 13);

        let mut config = single_worker();
        config.prune_symmetry = false;
        let solver = Solver::octogram(config).unwrap();
        assert_eq!(solver.corner_rule(), CornerRule::Disabled);
        assert!(!solver.config().prune_symmetry);
    }

    // Tests a complete search on a trivial board
    // Verified by skipping the solution check on the last placement
    #[test]
    fn test_solve_single_square() {
        let solver = Solver::new(catalog(&[&["##", "##"]]), 2, 2, single_worker()).unwrap();
        let solutions: Vec<_> = solver.solve().unwrap().collect();
        assert_eq!(solutions.len(), 1);
        assert!(solutions.iter().all(|s| s.grid().iter().all(|&id| id == 1)));
    }

    // Tests that a solver can run repeated independent searches
    // Verified by sharing the sink between searches
    #[test]
    fn test_solve_twice() {
        let solver = Solver::new(catalog(&[&["#"], &["#"]]), 1, 2, single_worker()).unwrap();
        let first = solver.solve().unwrap().count();
        let second = solver.solve().unwrap().count();
        assert_eq!(first, second);
        assert!(first > 0);
    }
}
