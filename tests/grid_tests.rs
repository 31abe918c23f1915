//! Grid tests - storage, bounds and copy semantics

use blockfall::core::Grid;
use blockfall::types::{Color, Pos, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Color = Color::hex(0x808080);

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), BOARD_WIDTH);
    assert_eq!(grid.height(), BOARD_HEIGHT);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(grid.get(Pos::new(row, col)), Some(None), "({}, {})", row, col);
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_rows_above_grid_are_empty() {
    let grid = Grid::new();
    for row in -4..0 {
        for col in 0..BOARD_WIDTH as i8 {
            assert!(!grid.is_occupied(Pos::new(row, col)));
        }
    }
}

#[test]
fn test_out_of_bounds_reads_and_writes() {
    let mut grid = Grid::new();
    assert_eq!(grid.get(Pos::new(0, -1)), None);
    assert_eq!(grid.get(Pos::new(0, BOARD_WIDTH as i8)), None);
    assert_eq!(grid.get(Pos::new(BOARD_HEIGHT as i8, 0)), None);

    assert!(!grid.set(Pos::new(-1, 3), Some(GRAY)));
    assert!(!grid.set(Pos::new(20, 3), Some(GRAY)));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_copy_is_independent() {
    let mut grid = Grid::new();
    grid.set(Pos::new(10, 5), Some(GRAY));

    let mut copy = grid.clone();
    copy.set(Pos::new(10, 5), None);
    copy.set(Pos::new(11, 5), Some(GRAY));

    assert!(grid.is_occupied(Pos::new(10, 5)));
    assert!(!grid.is_occupied(Pos::new(11, 5)));
    assert_ne!(grid, copy);
}

#[test]
fn test_full_and_empty_rows() {
    let mut grid = Grid::new();
    grid.fill_row(19, GRAY);
    grid.set(Pos::new(18, 0), Some(GRAY));

    assert!(grid.is_row_full(19));
    assert!(!grid.is_row_full(18));
    assert!(!grid.is_row_empty(18));
    assert!(grid.is_row_empty(0));
    assert_eq!(grid.rows().len(), BOARD_HEIGHT as usize);
}

#[test]
fn test_from_rows_fills_from_top() {
    let mut rows = [[None; BOARD_WIDTH as usize]; 2];
    rows[1][9] = Some(GRAY);
    let grid = Grid::from_rows(&rows);
    assert_eq!(grid.color_at(Pos::new(1, 9)), Some(GRAY));
    assert_eq!(grid.occupied_count(), 1);
}
