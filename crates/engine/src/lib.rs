//! Transition engine and game loop
//!
//! Built on the primitives in `blockfall-core`, this crate implements the
//! five player-visible transitions and the clock that drives gravity:
//!
//! - [`GameState::player_move`]: one column left or right, undone if blocked
//! - [`GameState::player_drop`]: one row down, or land: merge, respawn, clear lines
//! - [`GameState::player_rotate`]: quarter turn with a bounded sideways search
//! - [`GameState::player_reset`]: spawn a new piece, wiping the game if it is blocked
//! - [`GameLoop::frame`]: accumulate time, drop when the interval passes, repaint
//!
//! Rendering and score display are reached only through the
//! [`RenderSurface`] and [`ScoreSink`] traits.
//!
//! # Scoring
//!
//! Rows are only scored when a piece lands. The first row cleared by a
//! landing is worth 10 points and every further row in the same landing
//! doubles: 10, 20, 40, 80, ...
//!
//! # Example
//!
//! ```
//! use blockfall_engine::GameState;
//! use blockfall_engine::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//!
//! // Drop until the first piece lands.
//! while game.player_drop().is_none() {}
//!
//! assert!(!game.arena().is_empty());
//! assert_eq!(game.pieces_spawned(), 2);
//! ```
//!
//! # Threads
//!
//! Every operation takes `&mut GameState` and runs to completion, so the
//! borrow checker already serializes access. A host that moves the game
//! across threads should wrap the whole state in one `Mutex`.

pub mod game_loop;
pub mod game_state;
pub mod render;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_loop::{FrameReport, GameLoop};
pub use game_state::{GameState, LandingEvent};
pub use render::{draw, RenderSurface, ScoreSink};
