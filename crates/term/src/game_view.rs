//! GameView: maps the board and the active piece into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Color};

const BLOCK_CH: char = '█';
const EMPTY_CH: char = '·';

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const FRAME_STYLE: CellStyle = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::BLACK);
const EMPTY_STYLE: CellStyle = CellStyle::plain(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();

const HINTS: [(&str, &str); 5] = [
    ("←/h", "left"),
    ("→/l", "right"),
    ("↓/j", "down"),
    ("↑/k", "rotate"),
    ("q", "quit"),
];

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws every occupied board cell as a `cell_w x cell_h` block at
/// `(col * cell_w, row * cell_h)` inside a one-character border.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left of the playfield interior in framebuffer coordinates.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered playfield for `board`, in terminal cells.
    pub fn frame_size(&self, board: &Board) -> (u16, u16) {
        let w = to_u16(board.cols()).saturating_mul(self.cell_w).saturating_add(2);
        let h = to_u16(board.rows()).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(
        &self,
        board: &Board,
        active: Option<&Piece>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(board);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        draw_border(fb, start_x, start_y, frame_w, frame_h, FRAME_STYLE);

        for (row, cells) in board.rows_iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                self.draw_cell(fb, origin, row, col, *cell);
            }
        }

        if let Some(piece) = active {
            for (row, col) in piece.board_cells() {
                // Cells above the board (spawn/rotation overhang) are not drawn.
                if board.in_bounds(row, col) {
                    self.draw_cell(fb, origin, row as usize, col as usize, Some(piece.color));
                }
            }
        }

        self.draw_hints(fb, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, active: Option<&Piece>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, active, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, origin: Origin, row: usize, col: usize, cell: Cell) {
        let (ch, style) = match cell {
            Some(color) => (BLOCK_CH, block_style(color)),
            None => (EMPTY_CH, EMPTY_STYLE),
        };
        let px = origin.x.saturating_add(to_u16(col).saturating_mul(self.cell_w));
        let py = origin.y.saturating_add(to_u16(row).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_hints(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        fb.put_str(panel_x, start_y, "KEYS", CellStyle::default().bold());
        for (i, (key, what)) in HINTS.iter().enumerate() {
            let y = start_y.saturating_add(1 + i as u16);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, FRAME_STYLE);
            fb.put_str(panel_x.saturating_add(5), y, what, FRAME_STYLE.dim());
        }
    }
}

fn block_style(color: Color) -> CellStyle {
    CellStyle::plain(color.into(), PLAYFIELD_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
    fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
    fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
    fb.fill_rect(right, y + 1, 1, h - 2, '│', style);

    for (cx, cy, ch) in [(x, y, '┌'), (right, y, '┐'), (x, bottom, '└'), (right, bottom, '┘')] {
        fb.put_char(cx, cy, ch, style);
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
