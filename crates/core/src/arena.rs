//! Arena module - the grid of settled blocks
//!
//! The arena is a `width x height` grid of cell codes stored as a flat,
//! row-major vector. Coordinates are `(x, y)` with `x` growing to the right
//! and `y` growing downwards; row 0 is the top row.
//!
//! Every coordinate lookup goes through [`Arena::get`], which bounds-checks
//! and returns `None` outside the grid. Collision, merge and line clearing
//! are all built on top of it.

use crate::active::ActivePiece;
use crate::types::{Cell, ARENA_HEIGHT, ARENA_WIDTH, EMPTY, LINE_CLEAR_BASE_SCORE};

/// Result of a line-clear pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Number of rows removed.
    pub lines: u32,
    /// Points awarded for those rows.
    pub score: u32,
}

/// The arena - settled cells, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Arena {
    /// Create a new empty arena
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build an arena from rows (top row first).
    ///
    /// Returns `None` for ragged or empty input, or for cell codes above 7.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.len()).ok()?;
        if width == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            if row.len() != width as usize || row.iter().any(|&c| c > 7) {
                return None;
            }
            cells.extend_from_slice(row);
        }

        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// One row, left to right. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Check if a row is completely filled
    ///
    /// A zero-width arena has no cells to fill, so none of its rows is full.
    pub fn is_row_full(&self, y: usize) -> bool {
        if self.width == 0 || y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire arena
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Does `piece` overlap a settled cell or leave the arena?
    ///
    /// Cells left of column 0, right of the last column or below the last row
    /// collide. Cells above row 0 never collide.
    pub fn collides(&self, piece: &ActivePiece) -> bool {
        piece.cells().any(|(x, y, _)| {
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return true;
            }
            match self.get(x, y) {
                Some(cell) => cell != EMPTY,
                None => false,
            }
        })
    }

    /// Write the piece's cells into the arena.
    ///
    /// The caller must have checked that the piece does not collide. Cells
    /// still above row 0 have nowhere to go and are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        for (x, y, cell) in piece.cells() {
            self.set(x, y, cell);
        }
    }

    /// Remove row `y`, shift everything above it down and empty the top row.
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(EMPTY);
    }

    /// Clear every full row and score them.
    ///
    /// Rows are scanned from the bottom up; after a removal the same index is
    /// tested again since the rows above have shifted into it. The first row
    /// cleared is worth [`LINE_CLEAR_BASE_SCORE`] and each further row in the
    /// same pass is worth double the previous one (10, 20, 40, ...).
    ///
    /// Row 0 is never tested.
    pub fn clear_lines(&mut self) -> LineClear {
        let mut result = LineClear::default();
        if self.width == 0 {
            return result;
        }
        let mut row_value = LINE_CLEAR_BASE_SCORE;

        let mut y = (self.height as usize).saturating_sub(1);
        while y > 0 {
            if self.is_row_full(y) {
                self.remove_row(y);
                result.lines += 1;
                result.score = result.score.saturating_add(row_value);
                row_value = row_value.saturating_mul(2);
            } else {
                y -= 1;
            }
        }

        result
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::active::Offset;
    use crate::types::PieceKind;

    fn fill_row(arena: &mut Arena, y: i32, cell: Cell) {
        for x in 0..arena.width() as i32 {
            arena.set(x, y, cell);
        }
    }

    #[test]
    fn test_arena_index_calculation() {
        let arena = Arena::default();
        assert_eq!(arena.index(0, 0), Some(0));
        assert_eq!(arena.index(11, 0), Some(11));
        assert_eq!(arena.index(0, 1), Some(12));
        assert_eq!(arena.index(11, 19), Some(239));
        assert_eq!(arena.index(-1, 0), None);
        assert_eq!(arena.index(12, 0), None);
        assert_eq!(arena.index(0, 20), None);
        assert_eq!(arena.index(0, -1), None);
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut arena = Arena::new(4, 4);
        arena.set(0, 0, 1);
        arena.set(1, 1, 2);
        fill_row(&mut arena, 2, 3);

        arena.remove_row(2);

        assert_eq!(arena.row(0), &[0, 0, 0, 0]);
        assert_eq!(arena.row(1), &[1, 0, 0, 0]);
        assert_eq!(arena.row(2), &[0, 2, 0, 0]);
        assert_eq!(arena.row(3), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_collides_above_top_is_free() {
        let arena = Arena::default();
        let piece = ActivePiece::new(PieceKind::I, Offset::new(4, -3));
        assert!(!arena.collides(&piece));
    }

    #[test]
    fn test_clear_lines_skips_row_zero() {
        let mut arena = Arena::new(4, 4);
        fill_row(&mut arena, 0, 1);

        let result = arena.clear_lines();

        assert_eq!(result, LineClear::default());
        assert_eq!(arena.row(0), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_clear_lines_rescans_same_index() {
        let mut arena = Arena::new(4, 5);
        fill_row(&mut arena, 3, 2);
        fill_row(&mut arena, 4, 2);
        arena.set(0, 2, 5);

        let result = arena.clear_lines();

        assert_eq!(result, LineClear { lines: 2, score: 30 });
        assert_eq!(arena.row(4), &[5, 0, 0, 0]);
        assert!(arena.row(3).iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn test_zero_width_arena_clears_nothing() {
        let mut arena = Arena::new(0, 20);
        assert!(!arena.is_row_full(19));
        assert!(arena.is_empty());

        assert_eq!(arena.clear_lines(), LineClear::default());
        assert_eq!(arena.height(), 20);
    }
}
