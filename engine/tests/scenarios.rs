//! Behavioural scenarios for the bounded Life grid.
//!
//! Each test drives the public engine API only: construct a grid, stamp patterns, advance.

use engine::{Brush, Catalog, Grid, StructurePattern};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Helpers ────────────────────────────────────────────────────────────

fn pattern(rows: &[&str]) -> StructurePattern {
    StructurePattern::from_rows("test", rows).unwrap()
}

fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut alive = Vec::new();
    for (row, cells) in grid.iter_rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.state() {
                alive.push((row, col));
            }
        }
    }
    alive
}

// ── Fixed points ───────────────────────────────────────────────────────

#[test]
fn cleared_grid_is_a_fixed_point() {
    for (rows, columns) in [(1, 1), (5, 5), (12, 3), (36, 64)] {
        let mut grid = Grid::new(rows, columns);
        grid.randomize_with(&mut StdRng::seed_from_u64(rows as u64));
        grid.clear();
        assert!(grid.advance());
        assert_eq!(grid.alive_count(), 0);
    }
}

#[test]
fn block_is_a_still_life() {
    let mut grid = Grid::new(6, 6);
    grid.place_structure(&pattern(&["OO", "OO"]), 2, 2, Brush::Paint);
    let before = grid.clone();
    assert!(grid.advance());
    assert_eq!(grid, before);
}

#[test]
fn block_in_a_corner_is_still() {
    let mut grid = Grid::new(4, 4);
    grid.place_structure(&pattern(&["OO", "OO"]), 0, 0, Brush::Paint);
    assert!(grid.advance());
    assert_eq!(alive_cells(&grid), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

// ── Oscillators ────────────────────────────────────────────────────────

#[test]
fn blinker_alternates_without_drift() {
    let blinker = StructurePattern::from_matrix("blinker", &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]).unwrap();
    let mut grid = Grid::new(7, 7);
    grid.place_structure(&blinker, 2, 2, Brush::Paint);

    let horizontal = vec![(3, 2), (3, 3), (3, 4)];
    let vertical = vec![(2, 3), (3, 3), (4, 3)];
    assert_eq!(alive_cells(&grid), horizontal);

    for _ in 0..10 {
        assert!(!grid.advance());
        assert_eq!(alive_cells(&grid), vertical);
        assert!(!grid.advance());
        assert_eq!(alive_cells(&grid), horizontal);
    }
}

#[test]
fn glider_translates_diagonally() {
    let catalog = Catalog::builtin();
    let glider = catalog.get("glider").unwrap();
    let mut grid = Grid::new(10, 10);
    grid.place_structure(glider, 1, 1, Brush::Paint);
    let start = alive_cells(&grid);

    for _ in 0..4 {
        assert!(!grid.advance());
    }

    let moved: Vec<_> = start.iter().map(|&(row, col)| (row + 1, col + 1)).collect();
    assert_eq!(alive_cells(&grid), moved);
}

#[test]
fn glider_settles_into_a_block_at_the_edge() {
    let catalog = Catalog::builtin();
    let mut grid = Grid::new(6, 6);
    grid.place_structure(catalog.get("glider").unwrap(), 0, 0, Brush::Paint);

    let mut halted = false;
    for _ in 0..40 {
        if grid.advance() {
            halted = true;
            break;
        }
    }
    assert!(halted);
    assert_eq!(alive_cells(&grid), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
}

// ── Placement ──────────────────────────────────────────────────────────

#[test]
fn placement_off_the_edge_is_truncated() {
    let mut grid = Grid::new(4, 4);
    grid.place_structure(&pattern(&["OOO", "OOO", "OOO"]), 2, 2, Brush::Paint);
    assert_eq!(alive_cells(&grid), vec![(2, 2), (2, 3), (3, 2), (3, 3)]);

    grid.place_structure(&pattern(&["OOO", "OOO", "OOO"]), -2, -2, Brush::Paint);
    assert_eq!(alive_cells(&grid), vec![(0, 0), (2, 2), (2, 3), (3, 2), (3, 3)]);
}

#[test]
fn placement_entirely_outside_is_a_no_op() {
    let mut grid = Grid::new(4, 4);
    let gun = Catalog::builtin().get("gosper-glider-gun").cloned().unwrap();
    grid.place_structure(&gun, 10, 10, Brush::Paint);
    grid.place_structure(&gun, -20, -40, Brush::Paint);
    assert_eq!(grid.alive_count(), 0);
}

#[test]
fn placement_at_extreme_anchors_is_skipped() {
    let glider = Catalog::builtin().get("glider").cloned().unwrap();
    let mut grid = Grid::new(5, 5);
    grid.set(2, 2, true);
    let before = grid.clone();

    for (row, col) in [
        (isize::MAX, 0),
        (0, isize::MAX),
        (isize::MAX, isize::MAX),
        (isize::MIN, 0),
        (0, isize::MIN),
    ] {
        grid.place_structure(&glider, row, col, Brush::Paint);
        grid.place_structure(&glider, row, col, Brush::Erase);
    }
    assert_eq!(grid, before);
}

#[test]
fn painting_twice_matches_painting_once() {
    let glider = Catalog::builtin().get("glider").cloned().unwrap();
    let mut once = Grid::new(8, 8);
    once.set(3, 3, true);
    once.place_structure(&glider, 2, 2, Brush::Paint);

    let mut twice = once.clone();
    twice.place_structure(&glider, 2, 2, Brush::Paint);
    assert_eq!(once, twice);
}

#[test]
fn painting_is_a_sparse_overlay() {
    let mut grid = Grid::new(3, 3);
    grid.set(0, 0, true);
    grid.place_structure(&pattern(&[".O", "O."]), 0, 0, Brush::Paint);
    assert_eq!(alive_cells(&grid), vec![(0, 0), (0, 1), (1, 0)]);
}

#[test]
fn overlapping_paint_never_turns_cells_off() {
    let mut grid = Grid::new(5, 5);
    let block = pattern(&["OO", "OO"]);
    grid.place_structure(&block, 1, 1, Brush::Paint);
    grid.place_structure(&block, 2, 2, Brush::Paint);
    assert_eq!(grid.alive_count(), 7);
}

// ── Population rules ───────────────────────────────────────────────────

#[test]
fn isolated_cell_dies() {
    let mut grid = Grid::new(5, 5);
    grid.set(2, 2, true);
    assert!(!grid.advance());
    assert!(!grid.get(2, 2));
}

#[test]
fn overcrowded_cell_dies() {
    let mut grid = Grid::new(5, 5);
    grid.place_structure(&pattern(&[".O.", "OOO", ".O."]), 1, 1, Brush::Paint);
    assert!(!grid.advance());
    assert!(!grid.get(2, 2));
}

// ── Randomization ──────────────────────────────────────────────────────

#[test]
fn randomize_is_roughly_half_alive() {
    let mut grid = Grid::new(50, 50);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut alive = 0;
    let rounds = 20;
    for _ in 0..rounds {
        grid.randomize_with(&mut rng);
        alive += grid.alive_count();
    }
    let fraction = alive as f64 / (rounds * 50 * 50) as f64;
    assert!((fraction - 0.5).abs() < 0.02, "fraction was {fraction}");
}

#[test]
fn independent_grids_do_not_share_state() {
    let mut first = Grid::new(3, 3);
    let second = Grid::new(3, 3);
    first.set(1, 1, true);
    assert_eq!(second.alive_count(), 0);
}
