//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::types::{grid_dims, CardId, CardState, Theme};

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

/// Presentation state that is not part of the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewContext {
    pub theme: Theme,
    /// Card under the keyboard cursor, if the cursor is shown.
    pub cursor: Option<CardId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame and its cards land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub columns: usize,
    pub rows: usize,
    card_w: u16,
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl BoardLayout {
    /// Top-left corner of the tile for card `id`.
    pub fn card_origin(&self, id: CardId) -> (u16, u16) {
        let col = (id % self.columns.max(1)) as u16;
        let row = (id / self.columns.max(1)) as u16;
        (
            self.origin_x + 2 + col * (self.card_w + self.gap_x),
            self.origin_y + 1 + row * (self.card_h + self.gap_y),
        )
    }

    /// Card whose tile covers terminal cell `(x, y)`. Gaps and borders map to nothing.
    pub fn card_at(&self, x: u16, y: u16, card_count: usize) -> Option<CardId> {
        let left = self.origin_x + 2;
        let top = self.origin_y + 1;
        if x < left || y < top {
            return None;
        }
        let (rx, ry) = (x - left, y - top);
        let (pitch_x, pitch_y) = (self.card_w + self.gap_x, self.card_h + self.gap_y);
        if rx % pitch_x >= self.card_w || ry % pitch_y >= self.card_h {
            return None;
        }
        let (col, row) = ((rx / pitch_x) as usize, (ry / pitch_y) as usize);
        if col >= self.columns || row >= self.rows {
            return None;
        }
        let id = row * self.columns + col;
        (id < card_count).then_some(id)
    }
}

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Card tile width in terminal columns.
    card_w: u16,
    /// Card tile height in terminal rows.
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles read as roughly square cards in most terminal fonts.
        Self {
            card_w: 7,
            card_h: 3,
            gap_x: 1,
            gap_y: 0,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(3),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, card_count: usize, viewport: Viewport) -> BoardLayout {
        let (columns, rows) = grid_dims(card_count);
        let (cols, rws) = (columns as u16, rows as u16);
        let grid_w = cols * self.card_w + cols.saturating_sub(1) * self.gap_x;
        let grid_h = rws * self.card_h + rws.saturating_sub(1) * self.gap_y;
        let frame_w = grid_w + 4;
        let frame_h = grid_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            columns,
            rows,
            card_w: self.card_w,
            card_h: self.card_h,
            gap_x: self.gap_x,
            gap_y: self.gap_y,
        }
    }

    /// Map a mouse click to the card under it.
    pub fn hit_test(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<CardId> {
        self.layout(snap.cards.len(), viewport)
            .card_at(column, row, snap.cards.len())
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        ctx: &ViewContext,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let palette = Palette::for_theme(ctx.theme);
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette.screen.cell(' '));

        let layout = self.layout(snap.cards.len(), viewport);

        fb.draw_box(
            layout.origin_x,
            layout.origin_y,
            layout.frame_w,
            layout.frame_h,
            palette.frame,
        );
        fb.put_str(layout.origin_x + 2, layout.origin_y, " MEMORY ", palette.frame.bold());

        for (id, card) in snap.cards.iter().enumerate() {
            let (x, y) = layout.card_origin(id);
            let style = match card.state {
                CardState::FaceDown => palette.card_back,
                CardState::FaceUp => palette.card_face,
                CardState::Matched => palette.card_matched,
            };
            let face = match card.state {
                CardState::FaceDown => '?',
                CardState::FaceUp | CardState::Matched => card.symbol.glyph(),
            };
            let border = if ctx.cursor == Some(id) {
                CellStyle {
                    fg: palette.cursor.fg,
                    ..style
                }
                .bold()
            } else {
                style
            };
            self.draw_card(fb, x, y, face, style, border);
        }

        self.draw_side_panel(fb, snap, ctx, &palette, &layout, viewport);

        if snap.won {
            self.draw_win_summary(fb, snap, &palette, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, ctx: &ViewContext, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ctx, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        face: char,
        style: CellStyle,
        border: CellStyle,
    ) {
        fb.fill_rect(x, y, self.card_w, self.card_h, ' ', style);
        fb.draw_box(x, y, self.card_w, self.card_h, border);
        fb.put_char(x + self.card_w / 2, y + self.card_h / 2, face, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        ctx: &ViewContext,
        palette: &Palette,
        layout: &BoardLayout,
        viewport: Viewport,
    ) {
        let panel_x = layout
            .origin_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let (label, value) = (palette.label, palette.value);
        let mut y = layout.origin_y;

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &snap.clock().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MATCHES", label);
        y = y.saturating_add(1);
        let mut x = panel_x;
        x += fb.put_u32(x, y, snap.matched_pairs, value);
        x += fb.put_str(x, y, " / ", value);
        fb.put_u32(x, y, snap.pairs, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "THEME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, ctx.theme.as_str(), value);
        y = y.saturating_add(2);

        let help = value.dim();
        for line in ["arrows move", "space  flip", "r  new game", "t  theme", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_win_summary(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        palette: &Palette,
        layout: &BoardLayout,
    ) {
        let moves = format!("Moves: {}", snap.moves);
        let time = format!("Time: {}", snap.clock());
        let lines = ["YOU WIN!", moves.as_str(), time.as_str(), "R / Enter: play again"];

        let text_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let box_w = text_w + 4;
        let box_h = lines.len() as u16 + 2;
        let x = (layout.origin_x + layout.frame_w / 2).saturating_sub(box_w / 2);
        let y = layout.origin_y + layout.frame_h.saturating_sub(box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', palette.overlay);
        fb.draw_box(x, y, box_w, box_h, palette.overlay);
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let lx = x + (box_w - w) / 2;
            fb.put_str(lx, y + 1 + i as u16, line, palette.overlay);
        }
    }
}
