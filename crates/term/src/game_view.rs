//! GameView: the terminal-side [`RenderSurface`], plus the [`ScoreBoard`] sink.
//!
//! The engine paints arena cells into an off-screen board buffer and pushes
//! score updates to the scoreboard. [`GameView::compose_into`] then lays the
//! board out in the viewport with a border and a side panel. No I/O happens
//! in this module.

use crate::engine::{RenderSurface, ScoreSink};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Cell, EMPTY};

/// Colors indexed by cell code. Index 0 is the empty-cell background.
pub const PALETTE: [Rgb; 8] = [
    Rgb::from_hex(0x1E1E28),
    Rgb::from_hex(0xDD1C1A),
    Rgb::from_hex(0xE56399),
    Rgb::from_hex(0x6517A7),
    Rgb::from_hex(0xF0C808),
    Rgb::from_hex(0x2660A4),
    Rgb::from_hex(0xD76A03),
    Rgb::from_hex(0x2CDA9D),
];

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const GRID_FG: Rgb = Rgb::new(90, 90, 100);
const LABEL_FG: Rgb = Rgb::new(220, 220, 220);
const VALUE_FG: Rgb = Rgb::new(200, 200, 200);

const BLOCK: char = '█';
const GRID_DOT: char = '·';

/// Minimum width the side panel needs before it is drawn at all.
const PANEL_MIN_W: u16 = 12;

const KEY_HELP: [&str; 5] = ["←→ move", "↓  drop", "↑ q rotate", "w  rotate ⟲", "esc quit"];

/// Color for a cell code, or `None` for empty and unknown codes.
pub fn color_for(cell: Cell) -> Option<Rgb> {
    match cell {
        EMPTY => None,
        code => PALETTE.get(code as usize).copied(),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Numbers shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelStats {
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
}

/// Holds the last published score until the next compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    score: u32,
}

impl ScoreBoard {
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl ScoreSink for ScoreBoard {
    fn update_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[derive(Debug, Clone)]
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
    cols: u16,
    rows: u16,
    board: FrameBuffer,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            cols: 0,
            rows: 0,
            board: FrameBuffer::new(0, 0),
        }
    }

    /// The painted arena, one glyph block per cell.
    pub fn board(&self) -> &FrameBuffer {
        &self.board
    }

    /// Lay out the board, its border and the side panel in `viewport`.
    ///
    /// The board is centred; the panel sits to its right and is skipped when
    /// there is no room for it.
    pub fn compose_into(&self, viewport: Viewport, stats: PanelStats, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::new(' ', CellStyle::plain(LABEL_FG, SCREEN_BG)));

        let frame_w = self.board.width().saturating_add(2);
        let frame_h = self.board.height().saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);
        fb.blit(&self.board, start_x + 1, start_y + 1);
        self.draw_side_panel(fb, stats, viewport, start_x.saturating_add(frame_w), start_y);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        stats: PanelStats,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let x = frame_right.saturating_add(2);
        if x >= viewport.width || viewport.width - x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::plain(LABEL_FG, SCREEN_BG).bold();
        let value = CellStyle::plain(VALUE_FG, SCREEN_BG);

        let mut y = top;
        for (name, n) in [
            ("SCORE", stats.score),
            ("LINES", stats.lines),
            ("PIECES", stats.pieces),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        let help = value.dim();
        for line in KEY_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

impl RenderSurface for GameView {
    fn clear(&mut self, width: u16, height: u16) {
        self.cols = width;
        self.rows = height;
        self.board.resize(
            width.saturating_mul(self.cell_w),
            height.saturating_mul(self.cell_h),
        );
        self.board.fill(Glyph::new(
            GRID_DOT,
            CellStyle::plain(GRID_FG, PALETTE[EMPTY as usize]).dim(),
        ));
    }

    fn fill_cell(&mut self, x: u16, y: u16, color: Cell) {
        if x >= self.cols || y >= self.rows {
            return;
        }
        let Some(fg) = color_for(color) else {
            return;
        };
        let style = CellStyle::plain(fg, PALETTE[EMPTY as usize]).bold();
        self.board.fill_rect(
            x * self.cell_w,
            y * self.cell_h,
            self.cell_w,
            self.cell_h,
            BLOCK,
            style,
        );
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::plain(BORDER_FG, SCREEN_BG);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x.saturating_add(dx), y, '─', style);
        fb.put_char(x.saturating_add(dx), bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y.saturating_add(dy), '│', style);
        fb.put_char(right, y.saturating_add(dy), '│', style);
    }
}
