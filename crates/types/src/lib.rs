//! Shared types and fixed configuration for the blockfall rules engine.
//!
//! Everything in here is plain data. The core, the input mapping and the
//! terminal front-end all agree on these definitions.
//!
//! # Grid coordinates
//!
//! Positions are `(row, col)`. Row 0 is the top of the grid and rows grow
//! downwards; column 0 is the left wall. Rows may be negative while a piece is
//! still entering the grid from above. Only rows `0..BOARD_HEIGHT` are stored.
//!
//! # Timing defaults
//!
//! The core never looks at a clock. These values are consumed by the game loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop |
//! | `DEFAULT_FALL_MS` | 900 | Gravity interval (one row per interval) |
//! | `MIN_FALL_MS` | 100 | Lower bound for a configured gravity interval |
//! | `LINE_CLEAR_STAGE_MS` | 180 | How long full rows stay marked before removal |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, RotationState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(RotationState::Spawn.next(), RotationState::Right);
//! assert_eq!(Direction::Down.offset(), (1, 0));
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Grid width in cells.
pub const BOARD_WIDTH: u8 = 10;

/// Grid height in cells.
pub const BOARD_HEIGHT: u8 = 20;

/// Number of stored cells.
pub const BOARD_CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Largest number of cells a piece can occupy.
pub const MAX_PIECE_CELLS: usize = 4;

/// Fixed timestep interval of the game loop.
pub const TICK_MS: u32 = 16;

/// Default gravity interval in milliseconds.
pub const DEFAULT_FALL_MS: u32 = 900;

/// Gravity intervals below this are clamped.
pub const MIN_FALL_MS: u32 = 100;

/// Time full rows stay marked as clearing before they are removed.
pub const LINE_CLEAR_STAGE_MS: u32 = 180;

/// 24-bit color tag carried by filled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

/// A cell of the grid
///
/// - `None`: empty
/// - `Some(color)`: filled with the given color
///
/// Using `Option` makes "occupied without a color" unrepresentable.
pub type Cell = Option<Color>;

/// The seven piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    L,
    J,
    O,
    S,
    Z,
    I,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::I,
    ];

    /// Position in [`ShapeKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            ShapeKind::T => 0,
            ShapeKind::L => 1,
            ShapeKind::J => 2,
            ShapeKind::O => 3,
            ShapeKind::S => 4,
            ShapeKind::Z => 5,
            ShapeKind::I => 6,
        }
    }

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("I"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("o"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "i" => Some(ShapeKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::T => "T",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
            ShapeKind::O => "O",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::I => "I",
        }
    }
}

/// Orientation of a piece, indexing the kick tables.
///
/// The cycle is Spawn → Right → Half → Left → Spawn (clockwise only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationState {
    #[default]
    Spawn,
    Right,
    Half,
    Left,
}

impl RotationState {
    /// The state after one clockwise quarter turn.
    ///
    /// ```
    /// use blockfall_types::RotationState;
    ///
    /// assert_eq!(RotationState::Left.next(), RotationState::Spawn);
    /// ```
    pub fn next(self) -> Self {
        match self {
            RotationState::Spawn => RotationState::Right,
            RotationState::Right => RotationState::Half,
            RotationState::Half => RotationState::Left,
            RotationState::Left => RotationState::Spawn,
        }
    }

    /// 0 for spawn, 1 right, 2 half, 3 left.
    pub fn index(self) -> usize {
        match self {
            RotationState::Spawn => 0,
            RotationState::Right => 1,
            RotationState::Half => 2,
            RotationState::Left => 3,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => RotationState::Spawn,
            1 => RotationState::Right,
            2 => RotationState::Half,
            _ => RotationState::Left,
        }
    }
}

/// Unit shift directions. There is no upward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// `(row, col)` delta of a unit shift.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// Grid position. Rows above the grid are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Inside the stored grid.
    pub fn in_bounds(self) -> bool {
        self.row >= 0
            && self.row < BOARD_HEIGHT as i8
            && self.col >= 0
            && self.col < BOARD_WIDTH as i8
    }
}

/// Requests a collaborator can make of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// One row down; a rejected move down lands the piece.
    MoveDown,
    /// Quarter turn clockwise with wall kicks.
    Rotate,
    TogglePause,
    Restart,
}

impl Command {
    /// Parse from the camelCase name.
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "togglepause" | "pause" => Some(Command::TogglePause),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::TogglePause => "togglePause",
            Command::Restart => "restart",
        }
    }

    /// The shift direction for movement commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}
