//! Pieces module - the piece catalog and shape matrices
//!
//! Each of the seven pieces is a small square matrix of cell codes. Empty
//! padding cells are part of the matrix so a rotation turns the piece in
//! place around the matrix centre.
//!
//! Catalog templates are `'static` and never handed out by reference to
//! mutable game state: [`ShapeMatrix::spawn`] always copies.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, Spin, EMPTY};

/// Largest matrix side in the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

const T_ROWS: &[&[Cell]] = &[
    &[1, 1, 1],
    &[0, 1, 0],
    &[0, 0, 0],
];

const O_ROWS: &[&[Cell]] = &[
    &[2, 2],
    &[2, 2],
];

const L_ROWS: &[&[Cell]] = &[
    &[0, 3, 0],
    &[0, 3, 0],
    &[0, 3, 3],
];

const J_ROWS: &[&[Cell]] = &[
    &[0, 4, 0],
    &[0, 4, 0],
    &[4, 4, 0],
];

const S_ROWS: &[&[Cell]] = &[
    &[0, 5, 5],
    &[5, 5, 0],
    &[0, 0, 0],
];

const Z_ROWS: &[&[Cell]] = &[
    &[6, 6, 0],
    &[0, 6, 6],
    &[0, 0, 0],
];

const I_ROWS: &[&[Cell]] = &[
    &[0, 7, 0, 0],
    &[0, 7, 0, 0],
    &[0, 7, 0, 0],
    &[0, 7, 0, 0],
];

/// Catalog template rows for a piece kind, top row first.
pub fn template_rows(kind: PieceKind) -> &'static [&'static [Cell]] {
    match kind {
        PieceKind::T => T_ROWS,
        PieceKind::O => O_ROWS,
        PieceKind::L => L_ROWS,
        PieceKind::J => J_ROWS,
        PieceKind::S => S_ROWS,
        PieceKind::Z => Z_ROWS,
        PieceKind::I => I_ROWS,
    }
}

/// Square matrix of cell codes, stored inline in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: usize,
    cells: ArrayVec<Cell, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>,
}

impl ShapeMatrix {
    /// Build a matrix from rows.
    ///
    /// Returns `None` unless the rows form a non-empty square of side at most
    /// [`MAX_SHAPE_SIZE`] holding only codes `0..=7`.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SHAPE_SIZE {
            return None;
        }

        let mut cells = ArrayVec::new();
        for row in rows {
            if row.len() != size {
                return None;
            }
            for &cell in row.iter() {
                if cell > 7 {
                    return None;
                }
                cells.push(cell);
            }
        }

        Some(Self { size, cells })
    }

    /// Fresh copy of the catalog template for `kind`, in spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        let rows = template_rows(kind);
        let mut cells = ArrayVec::new();
        for row in rows {
            cells.extend(row.iter().copied());
        }
        Self {
            size: rows.len(),
            cells,
        }
    }

    /// Side length of the (square) matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width in cells, padding included.
    pub fn width(&self) -> usize {
        self.size
    }

    /// Height in cells, padding included.
    pub fn height(&self) -> usize {
        self.size
    }

    /// Cell at local `(x, y)`; `None` outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y * self.size + x])
    }

    /// One row of the matrix.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.size;
        &self.cells[start..start + self.size]
    }

    /// Non-empty cells as `(x, y, code)` in local coordinates.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != EMPTY)
            .map(move |(i, &cell)| ((i % size) as i32, (i / size) as i32, cell))
    }

    /// Return this matrix turned a quarter in the given sense.
    ///
    /// Transpose, then reverse every row (clockwise) or the row order
    /// (counter-clockwise).
    pub fn rotated(&self, spin: Spin) -> Self {
        let n = self.size;
        let mut cells = ArrayVec::new();
        for y in 0..n {
            for x in 0..n {
                let cell = match spin {
                    Spin::Clockwise => self.cells[(n - 1 - x) * n + y],
                    Spin::CounterClockwise => self.cells[x * n + (n - 1 - y)],
                };
                cells.push(cell);
            }
        }
        Self { size: n, cells }
    }
}
