//! Collaborator seams: where the engine hands its state to the outside.

use crate::game_state::GameState;
use crate::types::{Cell, EMPTY};

/// A surface the game can be painted on, in arena cell units.
pub trait RenderSurface {
    /// Blank the whole surface, sized `width x height` cells.
    fn clear(&mut self, width: u16, height: u16);

    /// Paint one cell with palette colour `color` (always `1..=7`).
    fn fill_cell(&mut self, x: u16, y: u16, color: Cell);
}

/// Receives the score whenever it changes.
pub trait ScoreSink {
    fn update_score(&mut self, score: u32);
}

/// Paint the settled cells and then the active piece.
///
/// Empty cells are never painted; active cells above row 0 are skipped.
pub fn draw<S: RenderSurface + ?Sized>(state: &GameState, surface: &mut S) {
    let arena = state.arena();
    surface.clear(arena.width() as u16, arena.height() as u16);

    for y in 0..arena.height() as usize {
        for (x, &cell) in arena.row(y).iter().enumerate() {
            if cell != EMPTY {
                surface.fill_cell(x as u16, y as u16, cell);
            }
        }
    }

    for (x, y, cell) in state.active().cells() {
        if arena.get(x, y).is_some() {
            surface.fill_cell(x as u16, y as u16, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActivePiece, Offset};
    use crate::types::PieceKind;

    #[derive(Default)]
    struct Recorder {
        size: Option<(u16, u16)>,
        filled: Vec<(u16, u16, Cell)>,
    }

    impl RenderSurface for Recorder {
        fn clear(&mut self, width: u16, height: u16) {
            self.size = Some((width, height));
            self.filled.clear();
        }

        fn fill_cell(&mut self, x: u16, y: u16, color: Cell) {
            self.filled.push((x, y, color));
        }
    }

    #[test]
    fn paints_settled_cells_then_active_piece() {
        let mut state = GameState::new(1);
        state.arena_mut().set(0, 19, 4);
        *state.active_mut() = ActivePiece::new(PieceKind::O, Offset::new(3, 2));

        let mut surface = Recorder::default();
        draw(&state, &mut surface);

        assert_eq!(surface.size, Some((12, 20)));
        assert_eq!(surface.filled[0], (0, 19, 4));
        let mut active: Vec<_> = surface.filled[1..].to_vec();
        active.sort();
        assert_eq!(active, vec![(3, 2, 2), (3, 3, 2), (4, 2, 2), (4, 3, 2)]);
    }

    #[test]
    fn skips_cells_above_the_top() {
        let mut state = GameState::new(1);
        *state.active_mut() = ActivePiece::new(PieceKind::I, Offset::new(4, -3));

        let mut surface = Recorder::default();
        draw(&state, &mut surface);

        // Only the bottom cell of the vertical bar is on screen.
        assert_eq!(surface.filled, vec![(5, 0, 7)]);
    }
}
