//! Landing protocol - what happens after a rejected move down.
//!
//! A piece that still has cells above the grid when it can no longer fall
//! ends the game. The check happens before merging; a partly off-grid piece
//! is never written into the grid.

use crate::grid::Grid;
use crate::line_clear::{clear_full_rows, LineClear};
use crate::piece::Piece;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Landing {
    /// The piece became permanent grid cells; full rows were removed.
    Merged(LineClear),
    /// The piece could not fully enter the grid.
    GameOver,
}

impl Landing {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Landing::GameOver)
    }
}

/// Write the piece's cells into a copy of `grid` as permanent cells.
///
/// Returns `None` when any cell is above the grid (game over).
pub fn merge(grid: &Grid, piece: &Piece) -> Option<Grid> {
    if piece.is_partly_above_grid() {
        return None;
    }
    Some(grid.repainted(&[], piece.cells(), piece.color()))
}

/// Merge the landed piece, then run the line-clear engine.
pub fn merge_and_clear(grid: &Grid, piece: &Piece) -> Landing {
    match merge(grid, piece) {
        Some(merged) => Landing::Merged(clear_full_rows(&merged)),
        None => Landing::GameOver,
    }
}
