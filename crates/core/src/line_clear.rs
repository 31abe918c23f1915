//! Line-clear engine
//!
//! Full rows are removed and everything above them drops by the number of
//! cleared rows below it. Equivalent to deleting the full rows and refilling
//! from the top with empty rows.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::BOARD_HEIGHT;

/// Row indices, ascending (top to bottom).
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Result of one clear pass. Produced once per landing and consumed
/// immediately by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub grid: Grid,
    pub cleared_rows: ClearedRows,
}

impl LineClear {
    pub fn count(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// Indices of every full row, top to bottom.
///
/// A collaborator can use this to mark rows for a "clearing" visual before
/// calling [`clear_full_rows`].
pub fn full_rows(grid: &Grid) -> ClearedRows {
    (0..BOARD_HEIGHT as usize)
        .filter(|&row| grid.is_row_full(row))
        .collect()
}

/// Remove every full row from `grid`.
pub fn clear_full_rows(grid: &Grid) -> LineClear {
    let cleared_rows = full_rows(grid);
    if cleared_rows.is_empty() {
        return LineClear {
            grid: grid.clone(),
            cleared_rows,
        };
    }

    let kept = grid
        .rows()
        .enumerate()
        .filter(|(row, _)| !cleared_rows.contains(row))
        .map(|(_, cells)| cells);

    LineClear {
        grid: Grid::from_kept_rows(kept),
        cleared_rows,
    }
}
