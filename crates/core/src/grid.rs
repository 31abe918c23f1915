//! Grid module - the fixed 10x20 occupancy grid
//!
//! Cells are stored in a flat row-major array so a grid is one contiguous
//! value; cloning it is a single memcpy and every accepted operation returns a
//! fresh grid instead of mutating the caller's.
//!
//! Coordinates are `(row, col)` with row 0 at the top. Rows above the grid
//! (negative) read as empty; they are where a piece waits before entering.

use crate::types::{Cell, Color, Pos, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major cells (row * WIDTH + col)
    cells: [Cell; BOARD_CELLS],
}

impl Grid {
    /// An H×W grid of empty cells.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    #[inline(always)]
    fn index(pos: Pos) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some(pos.row as usize * WIDTH + pos.col as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `pos`, or `None` outside the stored rows/columns.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false (and writes nothing) outside the grid.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Filled cell inside the grid. Rows above the grid are never occupied.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    pub fn color_at(&self, pos: Pos) -> Option<Color> {
        self.get(pos).flatten()
    }

    /// Cells of one stored row, `None` below the floor.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        let start = row.checked_mul(WIDTH)?;
        self.cells.get(start..start.checked_add(WIDTH)?)
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|cell| cell.is_none()))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill every column of `row` with `color`.
    pub fn fill_row(&mut self, row: usize, color: Color) {
        if row < HEIGHT {
            let start = row * WIDTH;
            self.cells[start..start + WIDTH].fill(Some(color));
        }
    }

    /// Build a grid from rows listed top to bottom; missing rows stay empty.
    ///
    /// Extra rows or columns are ignored.
    pub fn from_rows(rows: &[[Cell; WIDTH]]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().take(HEIGHT).enumerate() {
            grid.cells[r * WIDTH..(r + 1) * WIDTH].copy_from_slice(row);
        }
        grid
    }

    /// Copy of `self` with `clear` emptied and `paint` filled with `color`.
    ///
    /// Positions outside the grid are skipped, so a piece partly above the
    /// top edge is only drawn where it is visible.
    pub(crate) fn repainted(&self, clear: &[Pos], paint: &[Pos], color: Color) -> Self {
        let mut next = self.clone();
        for &pos in clear {
            next.set(pos, None);
        }
        for &pos in paint {
            next.set(pos, Some(color));
        }
        next
    }

    /// Reassemble a grid from kept rows, bottom-aligned, with empty rows on top.
    pub(crate) fn from_kept_rows<'a>(kept: impl DoubleEndedIterator<Item = &'a [Cell]>) -> Self {
        let mut grid = Self::new();
        let mut write = HEIGHT;
        for row in kept.rev() {
            if write == 0 {
                break;
            }
            write -= 1;
            grid.cells[write * WIDTH..(write + 1) * WIDTH].copy_from_slice(row);
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
