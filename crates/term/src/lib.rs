//! Terminal front end for blockfall.
//!
//! The engine paints into a [`GameView`] through `RenderSurface` and
//! publishes scores to a [`ScoreBoard`] through `ScoreSink`. The view
//! composes a [`FrameBuffer`] for the current [`Viewport`], and
//! [`TerminalRenderer`] flushes the changed glyphs with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{color_for, GameView, PanelStats, ScoreBoard, Viewport, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
