//! Render snapshot - a plain copy of everything a front-end draws.
//!
//! Fixed-size arrays only, so a renderer can keep one snapshot around and
//! refill it every frame with [`GameSession::snapshot_into`].
//!
//! [`GameSession::snapshot_into`]: crate::session::GameSession::snapshot_into

use crate::matrix::ShapeMatrix;
use crate::piece::Piece;
use crate::shapes::shape_def;
use crate::types::{Cell, Color, Pos, RotationState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: RotationState,
    pub origin: Pos,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            rotation: piece.rotation(),
            origin: piece.origin(),
        }
    }
}

/// Look-ahead piece for the preview box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    /// Spawn matrix trimmed to its occupied bounding box.
    pub preview: ShapeMatrix,
}

impl From<&Piece> for NextSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind(),
            color: piece.color(),
            preview: piece.matrix().trimmed().unwrap_or(*piece.matrix()),
        }
    }
}

impl Default for NextSnapshot {
    fn default() -> Self {
        let def = shape_def(ShapeKind::T);
        Self {
            kind: def.kind,
            color: def.color,
            preview: def.matrix.trimmed().unwrap_or(def.matrix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Grid rows top to bottom; includes the visible cells of the active piece.
    pub board: [[Cell; WIDTH]; HEIGHT],
    /// Rows waiting to be removed.
    pub clearing: [bool; HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub paused: bool,
    pub game_over: bool,
    pub lines: u32,
    pub pieces: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; WIDTH]; HEIGHT],
            clearing: [false; HEIGHT],
            active: None,
            next: NextSnapshot::default(),
            paused: false,
            game_over: false,
            lines: 0,
            pieces: 0,
        }
    }
}

impl GameSnapshot {
    pub fn is_clearing(&self) -> bool {
        self.clearing.iter().any(|&row| row)
    }

    pub fn filled_cells(&self) -> usize {
        self.board.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}
