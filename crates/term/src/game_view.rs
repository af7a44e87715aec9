//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, SessionStatus, Shape};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

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

/// A lightweight terminal renderer for the game board and side panel.
#[derive(Debug, Clone)]
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
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner of the board frame in the framebuffer.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame size in terminal cells for a board of `cols x rows`.
    pub fn frame_size(&self, cols: u8, rows: u8) -> (u16, u16) {
        (
            cols as u16 * self.cell_w + 2,
            rows as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.cols, snap.rows);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::fg(Rgb::new(80, 80, 90)).on(PLAY_BG),
        );
        draw_border(
            fb,
            origin.x,
            origin.y,
            frame_w,
            frame_h,
            CellStyle::fg(Rgb::new(200, 200, 200)),
        );

        // Placed blocks, merged with the visible part of the active piece.
        for row in 0..snap.rows as usize {
            for col in 0..snap.cols as usize {
                match snap.merged_cell(row, col) {
                    Some(color) => self.draw_block(fb, origin, row as u16, col as u16, color),
                    None => self.draw_empty(fb, origin, row as u16, col as u16),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        match snap.status {
            SessionStatus::Running => {}
            SessionStatus::Stopped => draw_overlay(fb, origin, frame_w, frame_h, "STOPPED"),
            SessionStatus::GameOver => draw_overlay(fb, origin, frame_w, frame_h, "GAME OVER"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, origin: Origin, row: u16, col: u16) -> (u16, u16) {
        (
            origin.x + 1 + col * self.cell_w,
            origin.y + 1 + row * self.cell_h,
        )
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, row: u16, col: u16, color: Color) {
        let (x, y) = self.cell_origin(origin, row, col);
        let style = CellStyle::fg(Rgb::from_tag(color)).on(PLAY_BG).bold();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, BLOCK, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: Origin, row: u16, col: u16) {
        let (x, y) = self.cell_origin(origin, row, col);
        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(PLAY_BG).dim();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, '·', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = origin.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(shape) = &snap.preview {
            self.draw_preview(fb, panel_x, y, shape);
        }
        y = y.saturating_add(5);

        for (name, n) in [
            ("POINTS", snap.points),
            ("LINES", snap.lines),
            ("PIECES", snap.pieces_locked),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }

        if snap.soft_drop {
            fb.put_str(panel_x, y, "DROP", value.dim());
        }
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["←→ move  ↑↓ turn", "space drop", "r restart x stop", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Preview shape drawn at panel scale, top-aligned on its occupied rows.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape) {
        let first_row = shape.occupied().map(|(r, _)| r).min().unwrap_or(0);
        let style = CellStyle::fg(Rgb::from_tag(shape.color())).bold();
        for (r, c) in shape.occupied() {
            let px = x + c as u16 * self.cell_w;
            let py = y + (r - first_row) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, BLOCK, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, origin: Origin, frame_w: u16, frame_h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let y = origin.y.saturating_add(frame_h / 2);
    fb.put_str(x, y, text, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
}
