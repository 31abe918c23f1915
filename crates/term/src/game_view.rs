//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O). Board cells are `cell_w` columns wide so squares look
//! square in most terminal fonts.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: char = '█';
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 14;

const WELL_BG: Color = Color::new(30, 30, 40);
const BLACK: Color = Color::new(0, 0, 0);
const FLASH: Color = Color::new(255, 255, 255);

const CONTROLS: [(&str, &str); 6] = [
    ("←/→", "move"),
    ("↑", "rotate"),
    ("↓", "drop"),
    ("p", "pause"),
    ("r", "restart"),
    ("q", "quit"),
];

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

/// Where the board frame landed in the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2, 1)
    }
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

    /// Board frame placement for a viewport (board plus its border).
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let panel = PANEL_GAP + PANEL_MIN_W;
        let x = viewport.width.saturating_sub(w + panel) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        BoardRect { x, y, w, h }
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    ///
    /// `flash` selects the blink phase of rows waiting to be cleared.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, flash: bool, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let rect = self.board_rect(viewport);
        fb.draw_box(rect.x, rect.y, rect.w, rect.h, CellStyle::new(Color::new(200, 200, 200), BLACK));

        for (row, cells) in snap.board.iter().enumerate() {
            let clearing = snap.clearing[row];
            for (col, &cell) in cells.iter().enumerate() {
                let (ch, style) = cell_glyph(cell, clearing, flash);
                self.fill_cell(fb, rect, col as u16, row as u16, ch, style);
            }
        }

        self.draw_panel(fb, snap, viewport, rect);

        if snap.game_over {
            draw_overlay(fb, rect, &["GAME OVER", "r to restart"]);
        } else if snap.paused {
            draw_overlay(fb, rect, &["PAUSED", "p to resume"]);
        }
    }

    /// Convenience wrapper that allocates a framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport, flash: bool) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, flash, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, rect: BoardRect, col: u16, row: u16, ch: char, style: CellStyle) {
        let px = rect.x + 1 + col * self.cell_w;
        let py = rect.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, rect: BoardRect) {
        let x = rect.x + rect.w + PANEL_GAP;
        if x >= viewport.width || viewport.width - x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Color::new(200, 200, 200), BLACK);
        let mut y = rect.y;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let preview = &snap.next.preview;
        let box_w = 4 * self.cell_w + 2;
        let box_h = preview.rows().max(2) as u16 + 2;
        fb.draw_box(x, y, box_w, box_h, value.dim());
        let block = CellStyle::new(snap.next.color, BLACK);
        for (i, j) in preview.occupied() {
            let px = x + 1 + j as u16 * self.cell_w;
            fb.fill_rect(px, y + 1 + i as u16, self.cell_w, 1, BLOCK, block);
        }
        y += box_h + 1;

        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x + 7, y, snap.lines, value);
        y += 1;
        fb.put_str(x, y, "PIECES", label);
        fb.put_u32(x + 7, y, snap.pieces, value);
        y += 2;

        for (key, action) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, key, label);
            fb.put_str(x + 4, y, action, value.dim());
            y += 1;
        }
    }
}

fn cell_glyph(cell: Cell, clearing: bool, flash: bool) -> (char, CellStyle) {
    match cell {
        _ if clearing && flash => (BLOCK, CellStyle::new(FLASH, WELL_BG).bold()),
        Some(color) if clearing => (BLOCK, CellStyle::new(color, WELL_BG).dim()),
        Some(color) => (BLOCK, CellStyle::new(color, WELL_BG)),
        None => ('·', CellStyle::new(Color::new(90, 90, 100), WELL_BG).dim()),
    }
}

/// Centered lines over the board.
fn draw_overlay(fb: &mut FrameBuffer, rect: BoardRect, lines: &[&str]) {
    let style = CellStyle::new(FLASH, BLACK).bold();
    let top = rect.y + rect.h / 2 - (lines.len() as u16) / 2;
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = rect.x + rect.w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}
