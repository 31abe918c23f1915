//! The falling piece.
//!
//! A piece is an immutable value. Accepted moves and rotations produce a new
//! piece; the cells are always the occupied entries of `matrix` placed at
//! `origin`, so the two can never drift apart.

use arrayvec::ArrayVec;

use crate::matrix::ShapeMatrix;
use crate::shapes::shape_def;
use crate::types::{Color, Pos, RotationState, ShapeKind, MAX_PIECE_CELLS};

/// Absolute cells of a piece, at most four.
pub type PieceCells = ArrayVec<Pos, MAX_PIECE_CELLS>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    color: Color,
    matrix: ShapeMatrix,
    /// Grid position of the matrix's top-left entry
    origin: Pos,
    rotation: RotationState,
    cells: PieceCells,
}

impl Piece {
    /// A piece in spawn orientation with its matrix anchored at `origin`.
    pub fn new(kind: ShapeKind, origin: Pos) -> Self {
        Self::oriented(kind, RotationState::Spawn, origin)
    }

    /// A piece turned clockwise from spawn until it reaches `rotation`.
    pub fn oriented(kind: ShapeKind, rotation: RotationState, origin: Pos) -> Self {
        let def = shape_def(kind);
        let mut matrix = def.matrix;
        for _ in 0..rotation.index() {
            matrix = matrix.rotate_cw();
        }
        Self::from_parts(kind, def.color, matrix, origin, rotation)
    }

    pub(crate) fn from_parts(
        kind: ShapeKind,
        color: Color,
        matrix: ShapeMatrix,
        origin: Pos,
        rotation: RotationState,
    ) -> Self {
        Self {
            kind,
            color,
            matrix,
            origin,
            rotation,
            cells: cells_at(&matrix, origin),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    pub fn origin(&self) -> Pos {
        self.origin
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Occupied cells in the matrix's row-major order.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// True while any cell is still above the top edge.
    pub fn is_partly_above_grid(&self) -> bool {
        self.cells.iter().any(|p| p.row < 0)
    }

    /// Same piece moved by `(d_row, d_col)`.
    pub(crate) fn translated(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            origin: self.origin.offset(d_row, d_col),
            cells: self.cells.iter().map(|p| p.offset(d_row, d_col)).collect(),
            ..self.clone()
        }
    }
}

/// Place every occupied entry of `matrix` at `origin + (i, j)`.
pub fn cells_at(matrix: &ShapeMatrix, origin: Pos) -> PieceCells {
    matrix
        .occupied()
        .take(MAX_PIECE_CELLS)
        .map(|(i, j)| origin.offset(i as i8, j as i8))
        .collect()
}
