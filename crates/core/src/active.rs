//! The active (falling) piece.

use crate::pieces::ShapeMatrix;
use crate::types::{Cell, PieceKind};

/// Integer position of a matrix's top-left corner in arena coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The single piece not yet merged into the arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub offset: Offset,
}

impl ActivePiece {
    /// A fresh catalog copy of `kind` at `offset`.
    pub fn new(kind: PieceKind, offset: Offset) -> Self {
        Self {
            kind,
            matrix: ShapeMatrix::spawn(kind),
            offset,
        }
    }

    /// Spawn `kind` on the top row, horizontally centred in an arena of `arena_width`.
    pub fn spawn(kind: PieceKind, arena_width: u8) -> Self {
        let matrix = ShapeMatrix::spawn(kind);
        let x = (arena_width as i32 / 2) - (matrix.width() as i32 / 2);
        Self {
            kind,
            matrix,
            offset: Offset::new(x, 0),
        }
    }

    /// Occupied cells as `(x, y, code)` in arena coordinates.
    ///
    /// Coordinates may fall outside the arena.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let Offset { x: ox, y: oy } = self.offset;
        self.matrix
            .occupied()
            .map(move |(x, y, cell)| (x + ox, y + oy, cell))
    }
}
