//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the five [`crate::types::GameAction`]s.
//! There is no repeat logic of its own: held keys arrive as the terminal's
//! native repeat events and are treated like presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{accepts_kind, handle_key_event, should_quit};
