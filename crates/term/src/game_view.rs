//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout math
//! drives [`GameView::hit_test`], so a mouse click lands on exactly the cell
//! that was drawn under it.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Coord;

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

/// Where the bordered board sits inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    /// Border included.
    pub frame_w: u16,
    pub frame_h: u16,
}

const BOARD_BG: Rgb = Rgb::new(20, 20, 30);
const LIT_FG: Rgb = Rgb::new(255, 214, 90);
const UNLIT_FG: Rgb = Rgb::new(70, 70, 85);
const CURSOR_BG: Rgb = Rgb::new(60, 60, 110);

pub const LIT_CHAR: char = '█';
pub const UNLIT_CHAR: char = '·';
pub const CURSOR_LIT_CHAR: char = '▓';
pub const CURSOR_UNLIT_CHAR: char = '░';

pub const WIN_TEXT: &str = "YOU WIN!";
pub const WIN_HINT: &str = "r: new game";

/// A lightweight terminal renderer for the Lights Out board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square and easy to click.
        Self {
            cell_w: 4,
            cell_h: 2,
            anchor_y: AnchorY::Center,
        }
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

    pub fn layout(&self, rows: usize, cols: usize, viewport: Viewport) -> BoardLayout {
        let board_px_w = clamp_u16(cols).saturating_mul(self.cell_w);
        let board_px_h = clamp_u16(rows).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            start_x,
            start_y,
            frame_w,
            frame_h,
        }
    }

    /// Map a terminal position to the board cell drawn there.
    ///
    /// Returns `None` off the board, on the border, and while the win screen
    /// is showing.
    pub fn hit_test(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Coord> {
        if snap.won() {
            return None;
        }
        let layout = self.layout(snap.rows, snap.cols, viewport);
        let inner_x = x.checked_sub(layout.start_x + 1)?;
        let inner_y = y.checked_sub(layout.start_y + 1)?;
        let coord = Coord::new(
            (inner_y / self.cell_h) as usize,
            (inner_x / self.cell_w) as usize,
        );
        (coord.row < snap.rows && coord.col < snap.cols).then_some(coord)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Coord>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.rows, snap.cols, viewport);
        let bg = CellStyle::new(UNLIT_FG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        self.draw_border(fb, layout, border);

        if snap.won() {
            self.draw_win_screen(fb, layout);
        } else {
            for row in 0..snap.rows {
                for col in 0..snap.cols {
                    let coord = Coord::new(row, col);
                    self.draw_light(fb, layout, coord, snap.is_lit(coord), cursor == Some(coord));
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<Coord>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
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

    fn draw_light(&self, fb: &mut FrameBuffer, layout: BoardLayout, coord: Coord, lit: bool, selected: bool) {
        let bg = if selected { CURSOR_BG } else { BOARD_BG };
        let (ch, style) = match (lit, selected) {
            (true, false) => (LIT_CHAR, CellStyle::new(LIT_FG, bg).bold()),
            (true, true) => (CURSOR_LIT_CHAR, CellStyle::new(LIT_FG, bg).bold()),
            (false, false) => (UNLIT_CHAR, CellStyle::new(UNLIT_FG, bg).dim()),
            (false, true) => (CURSOR_UNLIT_CHAR, CellStyle::new(UNLIT_FG, bg)),
        };

        let px = (layout.start_x + 1).saturating_add(clamp_u16(coord.col).saturating_mul(self.cell_w));
        let py = (layout.start_y + 1).saturating_add(clamp_u16(coord.row).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_win_screen(&self, fb: &mut FrameBuffer, layout: BoardLayout) {
        let title = CellStyle::new(LIT_FG, BOARD_BG).bold();
        let hint = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG).dim();

        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let title_y = if layout.frame_h > 4 { mid_y - 1 } else { mid_y };
        put_centered(fb, layout, title_y, WIN_TEXT, title);
        if layout.frame_h > 4 {
            put_centered(fb, layout, mid_y + 1, WIN_HINT, hint);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: BoardLayout) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "LIT", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lit_count.min(u32::MAX as usize) as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id.saturating_add(1), value);
        y = y.saturating_add(2);

        for line in ["arrows move", "space toggle", "click toggle", "r new game", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

fn put_centered(fb: &mut FrameBuffer, layout: BoardLayout, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = layout
        .start_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
