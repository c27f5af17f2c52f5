//! Tests for letter, outline, orientation and catalog rendering

#[cfg(test)]
mod tests {
    use octotile::io::visualization::{
        RenderStyle, piece_letter, render, render_catalog, render_letters, render_orientation,
        render_outline,
    };
    use octotile::spatial::orientation::Orientation;
    use octotile::spatial::pieces::PieceCatalog;
    use octotile::spatial::position::Position;
    use ndarray::array;

    // Tests letters for piece ids
    // Verified by starting the letters at 'a'
    #[test]
    fn test_piece_letter() {
        assert_eq!(piece_letter(0), ' ');
        assert_eq!(piece_letter(1), 'A');
        assert_eq!(piece_letter(13), 'M');
    }

    // Tests the letter grid layout
    // Verified by dropping the trailing newline
    #[test]
    fn test_render_letters() {
        let grid = array![[1, 1, 2], [3, 0, 2]];
        assert_eq!(render_letters(&grid), "A A B \nC   B \n");
        assert_eq!(render(&grid, RenderStyle::Letters), render_letters(&grid));
    }

    // Tests outline glyphs for joined and isolated cells
    // Verified by joining cells of different pieces
    #[test]
    fn test_render_outline() {
        let grid = array![[1, 1, 2], [1, 3, 2]];
        assert_eq!(render_outline(&grid), "┏ ╸ ╻ \n╹ ■ ╹ \n");
        assert_eq!(render(&grid, RenderStyle::Outline), render_outline(&grid));
    }

    // Tests a full cross of one piece
    // Verified by omitting the four-way glyph
    #[test]
    fn test_render_outline_cross() {
        let grid = array![[0, 5, 0], [5, 5, 5], [0, 5, 0]];
        assert_eq!(render_outline(&grid), "  ╻   \n╺ ╋ ╸ \n  ╹   \n");
    }

    // Tests orientation rendering with border markers
    // Verified by drawing border cells as body cells
    #[test]
    fn test_render_orientation() {
        let cell = Orientation::from_body(1, 1, [Position::origin()]);
        assert_eq!(render_orientation(&cell), "  ○\n○ ● ○\n  ○\n");
    }

    // Tests the catalog listing headers
    // Verified by listing only the first orientation per piece
    #[test]
    fn test_render_catalog() {
        let catalog = PieceCatalog::octogram().unwrap();
        let text = render_catalog(&catalog);
        assert!(text.starts_with("Piece 1 (A): 2 orientations\n"));
        assert!(text.contains("Piece 6 (F): 1 orientations\n"));
        assert!(text.contains("Piece 13 (M): 1 orientations\n"));
        assert_eq!(text.matches('●').count(), 63 * 5 + 4);
    }
}
