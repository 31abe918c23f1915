//! Terminal input for blockfall.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]. Holding a key
//! relies on the terminal's own auto-repeat; every press is one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
