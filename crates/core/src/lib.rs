//! Core rules for blockfall - pure, deterministic, and testable
//!
//! Everything here is plain data in, plain data out. No terminal, no clock and
//! no global state: a front-end owns a [`GameSession`] and drives it with
//! commands and timer ticks.
//!
//! # Module Structure
//!
//! - [`grid`]: the 10x20 occupancy grid
//! - [`matrix`] / [`shapes`]: shape matrices, the seven-piece catalog and kick tables
//! - [`piece`] / [`factory`]: the falling piece and how new ones are made
//! - [`validate`]: legality of shifts and rotations
//! - [`transform`]: accepted shifts and kicked rotations
//! - [`line_clear`] / [`landing`]: merging a landed piece and removing full rows
//! - [`session`]: one game's state and its landing/clearing cycle
//! - [`snapshot`]: a copy of that state for rendering
//!
//! # Value semantics
//!
//! Transforms never mutate their inputs. A rejected move returns an error and
//! the caller keeps the grid and piece it already had.
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_core::types::Command;
//!
//! let mut game = GameSession::seeded(12345);
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.tick();
//!
//! assert!(!game.game_over());
//! assert_eq!(game.lines(), 0);
//! ```

pub mod error;
pub mod factory;
pub mod grid;
pub mod landing;
pub mod line_clear;
pub mod matrix;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod transform;
pub mod validate;

pub use blockfall_types as types;

pub use error::RulesError;
pub use factory::{spawn, spawn_at, spawn_kind};
pub use grid::Grid;
pub use landing::{merge, merge_and_clear, Landing};
pub use line_clear::{clear_full_rows, full_rows, ClearedRows, LineClear};
pub use matrix::ShapeMatrix;
pub use piece::{Piece, PieceCells};
pub use rng::SimpleRng;
pub use session::{GameSession, Outcome, Phase, SessionEvent};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
pub use transform::{attempt_rotate, attempt_shift, find_kick, KickChoice, Placement};
pub use validate::{validate_down, validate_left, validate_right, validate_rotation};
