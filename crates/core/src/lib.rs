//! Core simulation data - pure, deterministic, and testable
//!
//! This crate holds the data model of the falling-block game and the
//! read/merge/clear primitives every transition is built from. It has
//! **zero dependencies** on rendering, input or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven-piece catalog and [`ShapeMatrix`] rotation
//! - [`active`]: the falling piece ([`ActivePiece`]) and its [`Offset`]
//! - [`arena`]: the settled-cell grid with collision, merge and line clearing
//! - [`rng`]: seedable uniform piece selection
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ActivePiece, Arena, Offset};
//! use blockfall_core::types::PieceKind;
//!
//! let mut arena = Arena::default();
//! let mut piece = ActivePiece::spawn(PieceKind::O, arena.width());
//! assert!(!arena.collides(&piece));
//!
//! // Slide the piece to the floor and settle it.
//! while !arena.collides(&piece) {
//!     piece.offset.y += 1;
//! }
//! piece.offset.y -= 1;
//! arena.merge(&piece);
//!
//! assert_eq!(arena.get(5, 19), Some(PieceKind::O.code()));
//! ```

pub mod active;
pub mod arena;
pub mod pieces;
pub mod rng;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, Offset};
pub use arena::{Arena, LineClear};
pub use pieces::{template_rows, ShapeMatrix, MAX_SHAPE_SIZE};
pub use rng::{PiecePicker, SimpleRng};
