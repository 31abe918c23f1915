//! Move validator - pure legality checks for shifts and rotations
//!
//! The validators run against the grid as it is, with the piece's own cells
//! possibly painted into it. A target cell that belongs to the moving piece is
//! never a collision, so no erase-then-check copy is needed.
//!
//! Checks stop at the first offending cell; any single violation is fatal so
//! the order cells are visited in does not change the result.

use crate::error::RulesError;
use crate::grid::Grid;
use crate::types::{Direction, Pos, BOARD_HEIGHT, BOARD_WIDTH, MAX_PIECE_CELLS};

const LAST_COL: i8 = BOARD_WIDTH as i8 - 1;
const LAST_ROW: i8 = BOARD_HEIGHT as i8 - 1;

pub fn validate_left(grid: &Grid, cells: &[Pos]) -> Result<(), RulesError> {
    validate_shift(grid, cells, Direction::Left)
}

pub fn validate_right(grid: &Grid, cells: &[Pos]) -> Result<(), RulesError> {
    validate_shift(grid, cells, Direction::Right)
}

pub fn validate_down(grid: &Grid, cells: &[Pos]) -> Result<(), RulesError> {
    validate_shift(grid, cells, Direction::Down)
}

/// Can every cell move one step in `direction`?
///
/// Rejected when a cell sits against the wall (or floor) it would cross, or
/// when the target is occupied by something other than the piece itself.
pub fn validate_shift(grid: &Grid, cells: &[Pos], direction: Direction) -> Result<(), RulesError> {
    check_piece_cells(cells)?;

    let (d_row, d_col) = direction.offset();
    for &cell in cells {
        let at_edge = match direction {
            Direction::Left => cell.col == 0,
            Direction::Right => cell.col == LAST_COL,
            Direction::Down => cell.row == LAST_ROW,
        };
        let target = cell.offset(d_row, d_col);
        if at_edge || (grid.is_occupied(target) && !cells.contains(&target)) {
            return Err(RulesError::MoveRejected { direction });
        }
    }
    Ok(())
}

/// Can the piece occupying `original` be replaced by `candidate`?
///
/// Candidate cells may sit above the grid (negative rows) but not past either
/// wall or below the floor, and may only overlap filled cells that belong to
/// the original piece.
pub fn validate_rotation(grid: &Grid, original: &[Pos], candidate: &[Pos]) -> Result<(), RulesError> {
    check_piece_cells(original)?;
    check_cell_set(candidate)?;

    for &cell in candidate {
        if cell.col < 0 || cell.col > LAST_COL || cell.row > LAST_ROW {
            return Err(RulesError::RotationRejected);
        }
        if cell.row >= 0 && grid.is_occupied(cell) && !original.contains(&cell) {
            return Err(RulesError::RotationRejected);
        }
    }
    Ok(())
}

/// Cells of a piece currently in play: a valid set, inside the columns and
/// not below the floor.
fn check_piece_cells(cells: &[Pos]) -> Result<(), RulesError> {
    check_cell_set(cells)?;
    if cells
        .iter()
        .any(|c| c.col < 0 || c.col > LAST_COL || c.row > LAST_ROW)
    {
        return Err(RulesError::invalid("piece cell outside the grid"));
    }
    Ok(())
}

fn check_cell_set(cells: &[Pos]) -> Result<(), RulesError> {
    if cells.is_empty() {
        return Err(RulesError::invalid("piece has no cells"));
    }
    if cells.len() > MAX_PIECE_CELLS {
        return Err(RulesError::invalid("piece has more than four cells"));
    }
    for (i, cell) in cells.iter().enumerate() {
        if cells[i + 1..].contains(cell) {
            return Err(RulesError::invalid("piece cells repeat"));
        }
    }
    Ok(())
}
