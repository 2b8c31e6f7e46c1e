//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the simulation core, the
//! terminal renderer and the input adapter alike.
//!
//! # Arena Dimensions
//!
//! The reference playfield is 12 columns by 20 rows:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Cell Codes
//!
//! A cell is a small integer: `0` is empty and `1..=7` identify one of the
//! seven pieces. The same code doubles as the palette index when painting.
//!
//! | Code | Piece |
//! |------|-------|
//! | 1 | T |
//! | 2 | O |
//! | 3 | L |
//! | 4 | J |
//! | 5 | S |
//! | 6 | Z |
//! | 7 | I |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host clock interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval (constant, no levels) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! assert_eq!(PieceKind::T.code(), 1);
//! assert_eq!(PieceKind::I.code(), 7);
//! assert_eq!(PieceKind::ALL[6].as_str(), "i");
//!
//! assert_eq!(ARENA_WIDTH, 12);
//! assert_eq!(ARENA_HEIGHT, 20);
//! ```

pub mod config;

pub use config::{ConfigError, GameConfig};

/// Arena width in cells (12 columns)
pub const ARENA_WIDTH: u8 = 12;

/// Arena height in cells (20 rows)
pub const ARENA_HEIGHT: u8 = 20;

/// Host clock interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds (one row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points for the first row cleared by a single landing.
///
/// Every further row in the same landing is worth twice the previous one.
pub const LINE_CLEAR_BASE_SCORE: u32 = 10;

/// A cell value: `0` = empty, `1..=7` = piece code.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    S,
    Z,
    I,
}

impl PieceKind {
    /// All kinds in catalog order (index + 1 == cell code).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::I,
    ];

    /// Cell code (and palette index) for this kind, in `1..=7`.
    pub fn code(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
            PieceKind::I => 7,
        }
    }

    /// Lowercase name, used as a log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::I => "i",
        }
    }
}

/// Horizontal shift direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta: `-1` for left, `+1` for right.
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Rotation sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// The opposite sense, used to undo a rotation.
    ///
    /// ```
    /// use blockfall_types::Spin;
    ///
    /// assert_eq!(Spin::Clockwise.reversed(), Spin::CounterClockwise);
    /// assert_eq!(Spin::CounterClockwise.reversed(), Spin::Clockwise);
    /// ```
    pub fn reversed(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// The five operations the engine responds to.
///
/// Human input is mapped onto these; each one maps to a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, landing it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
}
