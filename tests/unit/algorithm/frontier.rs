//! Tests for the frontier stack and its lazy skipping of filled cells

#[cfg(test)]
mod tests {
    use octotile::algorithm::frontier::Frontier;
    use octotile::spatial::board::Board;
    use octotile::spatial::orientation::Orientation;
    use octotile::spatial::position::Position;

    fn domino() -> Orientation {
        Orientation::from_body(1, 2, [Position::new(0, 0), Position::new(0, 1)])
    }

    // Tests that a seeded frontier holds just the start cell
    // Verified by seeding with the origin regardless of argument
    #[test]
    fn test_seeded() {
        let frontier = Frontier::seeded(Position::new(2, 3));
        assert_eq!(frontier.cells(), &[Position::new(2, 3)]);
        assert_eq!(frontier.len(), 1);
        assert!(!frontier.is_empty());
    }

    // Tests that filled entries are skipped when searching for a seed
    // Verified by returning the first entry without checking the board
    #[test]
    fn test_next_empty_skips_filled_cells() {
        let mut board = Board::new(2, 4, 2);
        let orientation = domino();
        assert!(board.try_place(Position::new(0, 0), &orientation, 1).is_some());

        let frontier = Frontier::from_cells(vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(0, 2),
        ]);
        assert_eq!(frontier.next_empty(0, &board), Some((2, Position::new(1, 0))));
        assert_eq!(frontier.next_empty(3, &board), Some((3, Position::new(0, 2))));
        assert_eq!(frontier.next_empty(4, &board), None);
        assert_eq!(frontier.next_empty(10, &board), None);
    }

    // Tests that entries off the board never count as empty
    // Verified by treating out-of-range cells as empty
    #[test]
    fn test_next_empty_ignores_cells_off_board() {
        let board = Board::new(2, 2, 1);
        let frontier = Frontier::from_cells(vec![Position::new(-1, 0), Position::new(5, 5)]);
        assert_eq!(frontier.next_empty(0, &board), None);
    }

    // Tests stack discipline of mark, extend and truncate
    // Verified by making truncate a no-op
    #[test]
    fn test_mark_extend_truncate() {
        let mut frontier = Frontier::seeded(Position::origin());
        let mark = frontier.mark();
        frontier.extend([Position::new(0, 1), Position::new(1, 0)]);
        assert_eq!(frontier.len(), 3);

        let inner = frontier.mark();
        frontier.extend([Position::new(2, 2)]);
        frontier.truncate(inner);
        assert_eq!(frontier.len(), 3);

        frontier.truncate(mark);
        assert_eq!(frontier.cells(), &[Position::origin()]);
    }

    // Tests that snapshots copy the tail and stay independent
    // Verified by snapshotting the whole frontier
    #[test]
    fn test_snapshot() {
        let mut frontier = Frontier::from_cells(vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ]);
        let snapshot = frontier.snapshot(1);
        assert_eq!(snapshot.cells(), &[Position::new(0, 1), Position::new(1, 1)]);

        frontier.truncate(0);
        assert_eq!(snapshot.len(), 2);
        assert!(frontier.snapshot(5).is_empty());
    }
}
