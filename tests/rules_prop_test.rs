//! Property tests for the rules engine.
//!
//! Invariants covered:
//! - A rejected shift or rotation hands back nothing and leaves inputs intact.
//! - An accepted shift moves exactly the piece's cells.
//! - Kick selection is deterministic and picks the first offset when the
//!   unkicked rotation already fits.
//! - Clearing a random grid removes exactly `W` cells per full row and leaves
//!   no full rows behind.

use proptest::prelude::*;

use blockfall::core::{
    attempt_rotate, attempt_shift, clear_full_rows, find_kick, full_rows, validate_rotation, Grid,
    Piece, ShapeMatrix,
};
use blockfall::core::piece::cells_at;
use blockfall::types::{Color, Direction, Pos, RotationState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Color = Color::hex(0x808080);
const CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

fn grid_from_bits(bits: &[bool]) -> Grid {
    let mut grid = Grid::new();
    for (i, &filled) in bits.iter().enumerate() {
        if filled {
            let pos = Pos::new((i / BOARD_WIDTH as usize) as i8, (i % BOARD_WIDTH as usize) as i8);
            grid.set(pos, Some(GRAY));
        }
    }
    grid
}

fn piece_in_columns(kind: usize, rotation: usize, row: i8, col: i8) -> Option<Piece> {
    let piece = Piece::oriented(ShapeKind::ALL[kind], RotationState::from_index(rotation), Pos::new(row, col));
    let fits = piece
        .cells()
        .iter()
        .all(|c| c.col >= 0 && c.col < BOARD_WIDTH as i8 && c.row < BOARD_HEIGHT as i8);
    fits.then_some(piece)
}

/// Grid with random debris and the piece painted over it.
fn board_with(bits: &[bool], piece: &Piece) -> Grid {
    let mut grid = grid_from_bits(bits);
    for &cell in piece.cells() {
        grid.set(cell, Some(piece.color()));
    }
    grid
}

fn direction(i: usize) -> Direction {
    [Direction::Left, Direction::Right, Direction::Down][i]
}

proptest! {
    #[test]
    fn shift_never_mutates_and_moves_only_the_piece(
        bits in prop::collection::vec(prop::bool::weighted(0.3), CELLS),
        kind in 0usize..7,
        rotation in 0usize..4,
        row in -3i8..19,
        col in -2i8..10,
        dir in 0usize..3,
    ) {
        let piece = piece_in_columns(kind, rotation, row, col);
        prop_assume!(piece.is_some());
        let piece = piece.unwrap();
        let grid = board_with(&bits, &piece);
        let (grid_before, piece_before) = (grid.clone(), piece.clone());

        match attempt_shift(&grid, &piece, direction(dir)) {
            Ok(placed) => {
                let (d_row, d_col) = direction(dir).offset();
                for (old, new) in piece.cells().iter().zip(placed.piece.cells()) {
                    prop_assert_eq!(old.offset(d_row, d_col), *new);
                }
                for r in 0..BOARD_HEIGHT as i8 {
                    for c in 0..BOARD_WIDTH as i8 {
                        let pos = Pos::new(r, c);
                        if piece.contains(pos) || placed.piece.contains(pos) {
                            continue;
                        }
                        prop_assert_eq!(placed.grid.get(pos), grid.get(pos));
                    }
                }
            }
            Err(err) => prop_assert!(err.is_rejection()),
        }
        prop_assert_eq!(grid, grid_before);
        prop_assert_eq!(piece, piece_before);
    }

    #[test]
    fn rotation_is_deterministic_and_prefers_no_kick(
        bits in prop::collection::vec(prop::bool::weighted(0.25), CELLS),
        kind in 0usize..7,
        rotation in 0usize..4,
        row in -3i8..19,
        col in -2i8..10,
    ) {
        let piece = piece_in_columns(kind, rotation, row, col);
        prop_assume!(piece.is_some());
        let piece = piece.unwrap();
        let grid = board_with(&bits, &piece);
        let grid_before = grid.clone();

        let first = find_kick(&grid, &piece);
        prop_assert_eq!(&first, &find_kick(&grid, &piece));

        let unkicked = cells_at(&piece.matrix().rotate_cw(), piece.origin());
        if validate_rotation(&grid, piece.cells(), &unkicked).is_ok() {
            let choice = first.clone().unwrap();
            prop_assert_eq!(choice.index, 0);
            prop_assert_eq!(choice.offset, (0, 0));
        }

        match (first, attempt_rotate(&grid, &piece)) {
            (Ok(choice), Ok(placed)) => {
                prop_assert_eq!(placed.piece.cells(), choice.cells.as_slice());
                prop_assert_eq!(placed.piece.rotation(), piece.rotation().next());
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "find_kick {:?} disagrees with attempt_rotate {:?}", a, b),
        }
        prop_assert_eq!(grid, grid_before);
    }

    #[test]
    fn clearing_random_grid_keeps_row_order(
        bits in prop::collection::vec(prop::bool::weighted(0.5), CELLS),
        full in prop::collection::vec(any::<bool>(), BOARD_HEIGHT as usize),
    ) {
        let mut grid = grid_from_bits(&bits);
        for (row, &fill) in full.iter().enumerate() {
            if fill {
                grid.fill_row(row, GRAY);
            }
        }

        let expected_rows = full_rows(&grid);
        let result = clear_full_rows(&grid);
        prop_assert_eq!(&result.cleared_rows, &expected_rows);
        prop_assert_eq!(
            grid.occupied_count() - result.grid.occupied_count(),
            BOARD_WIDTH as usize * result.count()
        );
        prop_assert!(full_rows(&result.grid).is_empty());

        let kept: Vec<Vec<_>> = grid
            .rows()
            .enumerate()
            .filter(|(r, _)| !expected_rows.contains(r))
            .map(|(_, cells)| cells.to_vec())
            .collect();
        let offset = result.count();
        for (i, cells) in kept.iter().enumerate() {
            prop_assert_eq!(result.grid.row(i + offset), Some(cells.as_slice()));
        }
        for r in 0..offset {
            prop_assert!(result.grid.is_row_empty(r));
        }
    }
}

#[test]
fn four_quarter_turns_restore_every_matrix() {
    for kind in ShapeKind::ALL {
        let start = Piece::new(kind, Pos::new(0, 0));
        let mut matrix: ShapeMatrix = *start.matrix();
        for _ in 0..4 {
            matrix = matrix.rotate_cw();
        }
        assert_eq!(&matrix, start.matrix(), "{:?}", kind);
    }
}
