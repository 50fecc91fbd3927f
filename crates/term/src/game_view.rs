//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so every scene can be unit-tested.

use crate::core::{piece_color, GameSnapshot, Matrix};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Where the well frame sits on screen, in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Playing scene: well, locked cells, active piece, side panel and the
    /// GAME OVER overlay once the session has ended.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let frame = self.draw_well(fb, snap.width, snap.height, viewport);
        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);

        for y in 0..snap.height as u16 {
            for x in 0..snap.width as u16 {
                match PieceKind::from_cell_value(snap.cell(x as usize, y as usize)) {
                    Some(kind) => self.draw_block(fb, frame, x, y, kind),
                    None => self.fill_cell(fb, frame, x, y, '·', empty),
                }
            }
        }

        if let Some(active) = snap.active {
            for (dx, dy) in active.matrix.minos() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && y >= 0 && x < snap.width as i16 && y < snap.height as i16 {
                    self.draw_block(fb, frame, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            draw_centered(fb, frame, frame.h / 2, "GAME OVER");
            draw_centered(fb, frame, frame.h / 2 + 1, "R to retry");
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Start scene: an empty well with the PLAY prompt.
    pub fn render_start_into(
        &self,
        width: u8,
        height: u8,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);
        let frame = self.draw_well(fb, width, height, viewport);
        draw_centered(fb, frame, frame.h / 2 - 1, "PLAY");
        draw_centered(fb, frame, frame.h / 2 + 1, "press Enter");
    }

    /// Background and border; returns the frame rect
    fn draw_well(
        &self,
        fb: &mut FrameBuffer,
        width: u8,
        height: u8,
        viewport: Viewport,
    ) -> Frame {
        let inner_w = width as u16 * self.cell_w;
        let inner_h = height as u16 * self.cell_h;
        let w = inner_w + 2;
        let h = inner_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        let bg = CellStyle::new(WELL_BG, WELL_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, inner_w, inner_h, ' ', bg);
        draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));
        frame
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind).into(), WELL_BG).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        match snap.next {
            Some(next) => self.draw_preview(fb, panel_x, y, &next.matrix, next.kind),
            None => fb.put_str(panel_x, y, "-", value),
        }
    }

    /// Next piece in its own small grid, always in spawn orientation
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        matrix: &Matrix,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind).into(), PANEL_BG).bold();
        for (dx, dy) in matrix.minos() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

/// One line of text centered horizontally in the frame, `row` rows below its top
fn draw_centered(fb: &mut FrameBuffer, frame: Frame, row: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, frame.y.saturating_add(row), text, style);
}
