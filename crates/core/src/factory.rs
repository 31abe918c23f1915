//! Piece factory - spawns new pieces above the grid.
//!
//! Randomness is a capability passed in by the caller; nothing here touches a
//! global generator.

use rand::Rng;

use crate::piece::Piece;
use crate::shapes::shape_def;
use crate::types::{Pos, ShapeKind, BOARD_WIDTH};

/// Spawn a uniformly random kind at a uniformly random column.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    spawn_kind(kind, rng)
}

/// Spawn `kind` at a uniformly random column where its matrix fits.
pub fn spawn_kind<R: Rng + ?Sized>(kind: ShapeKind, rng: &mut R) -> Piece {
    let col = rng.gen_range(0..=max_spawn_col(kind));
    spawn_at(kind, col)
}

/// Spawn `kind` with its matrix's left edge at `col` (clamped into range).
///
/// The origin row is minus the number of occupied matrix rows, which puts the
/// piece above the grid with its lowest occupied row just over the top edge
/// (or, for matrices with a blank first row, on row 0).
pub fn spawn_at(kind: ShapeKind, col: u8) -> Piece {
    let matrix = &shape_def(kind).matrix;
    let row = -(matrix.occupied_rows() as i8);
    let col = col.min(max_spawn_col(kind));
    Piece::new(kind, Pos::new(row, col as i8))
}

/// Rightmost column at which the spawn matrix stays inside the grid.
pub fn max_spawn_col(kind: ShapeKind) -> u8 {
    BOARD_WIDTH - shape_def(kind).matrix.cols() as u8
}
