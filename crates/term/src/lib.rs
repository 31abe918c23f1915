//! Terminal front-end for blockfall.
//!
//! Draws game snapshots into a framebuffer of styled cells and flushes that
//! framebuffer with `crossterm`. No widget toolkit: the board is laid out by
//! hand so each grid cell can be two columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{AnchorY, BoardRect, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
