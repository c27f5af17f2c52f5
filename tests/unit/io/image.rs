//! Tests for PNG rendering and export of finished boards

#[cfg(test)]
mod tests {
    use octotile::io::configuration::{EMPTY_CELL_COLOR, PIECE_PALETTE};
    use octotile::io::error::SolverError;
    use octotile::io::image::{export_grid_as_png, grid_to_image, piece_color, solution_path};
    use ndarray::array;
    use std::path::Path;

    // Tests palette lookup and cycling past the palette length
    // Verified by indexing the palette with the raw id
    #[test]
    fn test_piece_color() {
        assert_eq!(piece_color(0), EMPTY_CELL_COLOR);
        assert_eq!(piece_color(1), PIECE_PALETTE[0]);
        assert_eq!(piece_color(13), PIECE_PALETTE[12]);
        assert_eq!(piece_color(14), PIECE_PALETTE[0]);
    }

    // Tests image dimensions and cell fill colors
    // Verified by swapping width and height
    #[test]
    fn test_grid_to_image() {
        let grid = array![[1, 1, 2], [3, 3, 2]];
        let image = grid_to_image(&grid, 4);
        assert_eq!(image.dimensions(), (12, 8));
        assert_eq!(image.get_pixel(0, 0).0, PIECE_PALETTE[0]);
        assert_eq!(image.get_pixel(9, 1).0, PIECE_PALETTE[1]);
        assert_eq!(image.get_pixel(1, 5).0, PIECE_PALETTE[2]);
    }

    // Tests seams between different pieces but not inside one piece
    // Verified by drawing seams on every cell edge
    #[test]
    fn test_seams() {
        let grid = array![[1, 1, 2]];
        let image = grid_to_image(&grid, 4);
        assert_eq!(image.get_pixel(3, 1).0, PIECE_PALETTE[0]);
        assert_ne!(image.get_pixel(7, 1).0, PIECE_PALETTE[0]);
        assert_eq!(image.get_pixel(11, 1).0, PIECE_PALETTE[1]);
    }

    // Tests solution file naming
    // Verified by dropping the zero padding
    #[test]
    fn test_solution_path() {
        assert_eq!(
            solution_path(Path::new("out"), 42),
            Path::new("out").join("solution_00042.png")
        );
    }

    // Tests export into a directory that does not exist yet
    // Verified by skipping directory creation
    #[test]
    fn test_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board.png");
        export_grid_as_png(&array![[1, 2], [2, 1]], 3, &path).unwrap();

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (6, 6));
    }

    // Tests that a parent path blocked by a file is reported
    // Verified by ignoring directory creation failures
    #[test]
    fn test_export_blocked_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = export_grid_as_png(&array![[1]], 2, &blocker.join("board.png"));
        assert!(matches!(result, Err(SolverError::FileSystem { .. })));
    }
}
