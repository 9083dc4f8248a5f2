//! Rasterizer tests - palette fidelity and block replication

use path_viz::core::Grid;
use path_viz::raster::{GridView, Palette, Rgb};

#[test]
fn test_each_label_renders_its_palette_color() {
    let palette = Palette::default();
    let view = GridView::new(1);
    let cases = [
        ("#", palette.wall),
        ("S", palette.start),
        ("G", palette.goal),
        (".", palette.free),
        ("R", palette.robot),
        ("B", palette.box_unit),
    ];

    for (text, expected) in cases {
        let grid = Grid::from_lines(text).unwrap();
        let fb = view.render(&grid, &palette);
        assert_eq!(fb.get(0, 0), Some(expected), "label {:?}", text);
    }
}

#[test]
fn test_unmapped_label_renders_free_space_color() {
    let palette = Palette::default();
    let grid = Grid::from_lines("~").unwrap();
    let fb = GridView::new(1).render(&grid, &palette);
    assert_eq!(fb.get(0, 0), Some(palette.free));
}

#[test]
fn test_output_dimensions_scale_with_grid() {
    let palette = Palette::default();
    for (rows, cols) in [(1, 1), (3, 3), (2, 7), (10, 4)] {
        let text = vec![".".repeat(cols); rows].join("\n");
        let grid = Grid::from_lines(&text).unwrap();
        for scale in [1u32, 2, 5, 13] {
            let fb = GridView::new(scale).render(&grid, &palette);
            assert_eq!(fb.width(), cols as u32 * scale);
            assert_eq!(fb.height(), rows as u32 * scale);
        }
    }
}

#[test]
fn test_cell_blocks_are_uniform() {
    let palette = Palette::default();
    let grid = Grid::from_lines("#G\nR.").unwrap();
    let scale = 6;
    let fb = GridView::new(scale).render(&grid, &palette);

    let expect = |row: u32, col: u32, color: Rgb| {
        for dy in 0..scale {
            for dx in 0..scale {
                assert_eq!(
                    fb.get(col * scale + dx, row * scale + dy),
                    Some(color),
                    "cell ({}, {}) offset ({}, {})",
                    row,
                    col,
                    dx,
                    dy
                );
            }
        }
    };

    expect(0, 0, palette.wall);
    expect(0, 1, palette.goal);
    expect(1, 0, palette.robot);
    expect(1, 1, palette.free);
}

#[test]
fn test_no_interpolated_colors() {
    // Nearest-neighbor replication must never introduce a color outside
    // the palette, even at boundaries between contrasting cells.
    let palette = Palette::default();
    let grid = Grid::from_lines("#.#\n.#.\n#.#").unwrap();
    let fb = GridView::new(4).render(&grid, &palette);
    assert!(fb
        .pixels()
        .iter()
        .all(|&p| p == palette.wall || p == palette.free));
}
