//! Shape catalog - the seven pieces and the SRS wall kick tables
//!
//! Each catalog entry pairs a kind with its color and its spawn-orientation
//! matrix (3x3 for T/L/J/S/Z, 2x2 for O, 4x4 for I). Other orientations are
//! derived by rotating the matrix, so no per-rotation shape tables exist.
//!
//! Kick offsets are `(col, row)` pairs with rows growing downwards, tried in
//! list order. The list is selected by the rotation state the piece is
//! leaving. Reference: https://tetris.wiki/SRS

use crate::matrix::ShapeMatrix;
use crate::types::{Color, RotationState, ShapeKind};

/// Static definition of one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub color: Color,
    pub matrix: ShapeMatrix,
}

/// Catalog in [`ShapeKind::ALL`] order.
pub const SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: ShapeKind::T,
        color: Color::hex(0xFF69B4),
        matrix: ShapeMatrix::square([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
    },
    ShapeDef {
        kind: ShapeKind::L,
        color: Color::hex(0xFFA500),
        matrix: ShapeMatrix::square([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
    },
    ShapeDef {
        kind: ShapeKind::J,
        color: Color::hex(0x00BFFF),
        matrix: ShapeMatrix::square([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    },
    ShapeDef {
        kind: ShapeKind::O,
        color: Color::hex(0xFFFF00),
        matrix: ShapeMatrix::square([[1, 1], [1, 1]]),
    },
    ShapeDef {
        kind: ShapeKind::S,
        color: Color::hex(0x32CD32),
        matrix: ShapeMatrix::square([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    },
    ShapeDef {
        kind: ShapeKind::Z,
        color: Color::hex(0xFF4500),
        matrix: ShapeMatrix::square([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
    },
    ShapeDef {
        kind: ShapeKind::I,
        color: Color::hex(0x1E90FF),
        matrix: ShapeMatrix::square([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    },
];

pub fn shape_def(kind: ShapeKind) -> &'static ShapeDef {
    &SHAPES[kind.index()]
}

pub fn color_of(kind: ShapeKind) -> Color {
    shape_def(kind).color
}

/// One kick offset: `(col, row)`.
pub type Kick = (i8, i8);

/// Five offsets per transition; the first is always `(0, 0)`.
pub type KickList = [Kick; 5];

/// Indexed by the rotation state being left:
/// spawn→right, right→half, half→left, left→spawn.
pub type KickTable = [KickList; 4];

/// Shared by T, L, J, S, Z (and O, whose rotation never needs a kick).
pub const KICKS_JLSTZ: KickTable = [
    // spawn -> right
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // right -> half
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // half -> left
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // left -> spawn
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

pub const KICKS_I: KickTable = [
    // spawn -> right
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // right -> half
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // half -> left
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // left -> spawn
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

pub fn kick_table(kind: ShapeKind) -> &'static KickTable {
    match kind {
        ShapeKind::I => &KICKS_I,
        _ => &KICKS_JLSTZ,
    }
}

/// Offsets to try when rotating `kind` clockwise out of `from`.
pub fn kicks(kind: ShapeKind, from: RotationState) -> &'static KickList {
    &kick_table(kind)[from.index()]
}
