//! Transform engine - applies validated shifts and rotations
//!
//! Both operations borrow the current grid and piece and, on success, return
//! a new pair. Validation always completes before the new grid is built, so a
//! rejection hands back nothing and the caller's values are untouched.

use crate::error::RulesError;
use crate::grid::Grid;
use crate::piece::{cells_at, Piece, PieceCells};
use crate::shapes::{kicks, Kick};
use crate::types::Direction;
use crate::validate::{validate_rotation, validate_shift};

/// Grid and piece after an accepted operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: Grid,
    pub piece: Piece,
}

/// The kick selected for a rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KickChoice {
    /// Position in the kick list (0 means no kick was needed)
    pub index: usize,
    /// `(col, row)` offset applied to the rotated cells
    pub offset: Kick,
    pub cells: PieceCells,
}

/// Shift the piece one cell in `direction`.
///
/// Rejection is reported as `MoveRejected`; the caller decides what it means
/// (ignored for left/right, a landing for down).
pub fn attempt_shift(grid: &Grid, piece: &Piece, direction: Direction) -> Result<Placement, RulesError> {
    validate_shift(grid, piece.cells(), direction)?;

    let (d_row, d_col) = direction.offset();
    let moved = piece.translated(d_row, d_col);
    let grid = grid.repainted(piece.cells(), moved.cells(), piece.color());
    Ok(Placement { grid, piece: moved })
}

/// Rotate the piece a quarter turn clockwise, trying each kick offset for the
/// current rotation state in order and committing the first that fits.
pub fn attempt_rotate(grid: &Grid, piece: &Piece) -> Result<Placement, RulesError> {
    let rotated_matrix = piece.matrix().rotate_cw();
    let choice = find_kick(grid, piece)?;

    let (kick_col, kick_row) = choice.offset;
    let rotated = Piece::from_parts(
        piece.kind(),
        piece.color(),
        rotated_matrix,
        piece.origin().offset(kick_row, kick_col),
        piece.rotation().next(),
    );
    debug_assert_eq!(rotated.cells(), choice.cells.as_slice());

    let grid = grid.repainted(piece.cells(), rotated.cells(), piece.color());
    Ok(Placement {
        grid,
        piece: rotated,
    })
}

/// The first kick under which the rotated piece fits, without building the
/// new grid.
///
/// Deterministic: the same grid and piece always select the same kick.
pub fn find_kick(grid: &Grid, piece: &Piece) -> Result<KickChoice, RulesError> {
    let rotated = piece.matrix().rotate_cw();
    let unkicked = cells_at(&rotated, piece.origin());

    for (index, &(kick_col, kick_row)) in kicks(piece.kind(), piece.rotation()).iter().enumerate() {
        let cells: PieceCells = unkicked
            .iter()
            .map(|p| p.offset(kick_row, kick_col))
            .collect();
        match validate_rotation(grid, piece.cells(), &cells) {
            Ok(()) => {
                return Ok(KickChoice {
                    index,
                    offset: (kick_col, kick_row),
                    cells,
                })
            }
            Err(RulesError::RotationRejected) => continue,
            Err(other) => return Err(other),
        }
    }

    Err(RulesError::RotationRejected)
}
