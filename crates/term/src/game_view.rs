//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The look is the classic ASCII well:
//!
//! ```text
//!  --------------------
//! |                    |
//! |    ##              |
//! |  ######            |
//!  --------------------
//! Score: 0
//! ```

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const GAME_OVER_LINES: [&str; 3] = ["Game Over!", "Score: ", "Press SPACE to restart"];

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

/// Where the well lands inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Left column of the frame (the wall column)
    pub x: u16,
    /// Row of the top rule
    pub y: u16,
    /// Frame width including both walls
    pub width: u16,
    /// Frame height including both rules, excluding the score line
    pub height: u16,
}

impl Layout {
    /// Row of the score line, right under the bottom rule
    pub fn score_row(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    filled: CellStyle,
    frame: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up cells in typical terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            filled: CellStyle::fg(Rgb::new(240, 240, 240)).bold(),
            frame: CellStyle::fg(Rgb::new(160, 160, 160)),
            text: CellStyle::default(),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Position of the well for a given viewport
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let width = BOARD_WIDTH as u16 * self.cell_w + 2;
        let height = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(width) / 2;
        let y = match self.anchor_y {
            // The score line hangs under the frame.
            AnchorY::Center => viewport.height.saturating_sub(height + 1) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            x,
            y,
            width,
            height,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        if snap.game_over {
            self.draw_game_over(fb, snap.score, layout);
            return;
        }

        self.draw_frame(fb, layout);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                if filled {
                    self.fill_cell(fb, layout, x as u16, y as u16);
                }
            }
        }

        let row = layout.score_row();
        fb.put_str(layout.x, row, "Score: ", self.text);
        fb.put_u32(layout.x + 7, row, snap.score, self.text);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, layout: Layout) {
        let Layout {
            x,
            y,
            width,
            height,
        } = layout;
        let bottom = y + height - 1;

        // Rules leave the corner columns blank.
        for dx in 1..width - 1 {
            fb.put_char(x + dx, y, '-', self.frame);
            fb.put_char(x + dx, bottom, '-', self.frame);
        }
        for dy in 1..height - 1 {
            fb.put_char(x, y + dy, '|', self.frame);
            fb.put_char(x + width - 1, y + dy, '|', self.frame);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, layout: Layout, cell_x: u16, cell_y: u16) {
        let px = layout.x + 1 + cell_x * self.cell_w;
        let py = layout.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '#', self.filled);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, score: u32, layout: Layout) {
        let top = layout.y + layout.height / 2 - 1;
        for (i, line) in GAME_OVER_LINES.iter().enumerate() {
            let row = top + i as u16;
            let mut line_w = line.chars().count() as u16;
            if i == 1 {
                line_w += digit_count(score);
            }
            let x = layout.x + layout.width.saturating_sub(line_w) / 2;
            let style = if i == 0 { self.text.bold() } else { self.text };
            fb.put_str(x, row, line, style);
            if i == 1 {
                fb.put_u32(x + line.len() as u16, row, score, style);
            }
        }
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
