//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!                 Memory Game
//!                Timer : 60 s
//!
//!   ┌──────────────────────────────┐
//!   │ ┌card┐ ┌card┐ ...            │
//!   └──────────────────────────────┘
//!
//!   [P] Start  [R] Reset  [+/-] 4x4  [Q] Quit
//!   Congratulations! You matched all cards!
//! ```

use crate::core::{CardFace, GameSnapshot};
use crate::fb::{digit_count, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Card cell geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSize {
    pub w: u16,
    pub h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl CardSize {
    /// 3-row cards with spacing.
    pub const ROOMY: CardSize = CardSize {
        w: 6,
        h: 3,
        gap_x: 1,
        gap_y: 1,
    };

    /// 1-row cards packed vertically, for small terminals or large grids.
    pub const COMPACT: CardSize = CardSize {
        w: 4,
        h: 1,
        gap_x: 1,
        gap_y: 0,
    };
}

const TITLE: &str = "Memory Game";
const TITLE_ROW: u16 = 0;
const TIMER_ROW: u16 = 1;
const FRAME_TOP: u16 = 3;
/// Rows used outside the frame: title, timer, spacer, spacer, controls, message.
const CHROME_ROWS: u16 = 6;

/// Where the card grid lands for a given level and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub side: u16,
    pub card: CardSize,
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

impl GridLayout {
    fn compute(level: u8, card: CardSize, viewport: Viewport) -> Self {
        let side = level as u16;
        let grid_w = side * card.w + side.saturating_sub(1) * card.gap_x;
        let grid_h = side * card.h + side.saturating_sub(1) * card.gap_y;
        // Border plus one column of padding on each side.
        let frame_w = grid_w + 4;
        let frame_h = grid_h + 2;
        Self {
            side,
            card,
            frame_x: viewport.width.saturating_sub(frame_w) / 2,
            frame_y: FRAME_TOP,
            frame_w,
            frame_h,
        }
    }

    fn fits(&self, viewport: Viewport) -> bool {
        self.frame_w <= viewport.width && self.frame_h + CHROME_ROWS <= viewport.height
    }

    /// Top-left corner of the card at `position`.
    pub fn card_origin(&self, position: usize) -> (u16, u16) {
        let side = self.side.max(1) as usize;
        let col = (position % side) as u16;
        let row = (position / side) as u16;
        (
            self.frame_x + 2 + col * (self.card.w + self.card.gap_x),
            self.frame_y + 1 + row * (self.card.h + self.card.gap_y),
        )
    }

    /// Board position under the terminal cell `(x, y)`, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<usize> {
        let gx = x.checked_sub(self.frame_x + 2)?;
        let gy = y.checked_sub(self.frame_y + 1)?;
        let pitch_x = self.card.w + self.card.gap_x;
        let pitch_y = self.card.h + self.card.gap_y;
        if pitch_x == 0 || pitch_y == 0 {
            return None;
        }
        let (col, dx) = (gx / pitch_x, gx % pitch_x);
        let (row, dy) = (gy / pitch_y, gy % pitch_y);
        if col >= self.side || row >= self.side || dx >= self.card.w || dy >= self.card.h {
            return None;
        }
        Some(row as usize * self.side as usize + col as usize)
    }

    fn bottom(&self) -> u16 {
        self.frame_y + self.frame_h
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    preferred: CardSize,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            preferred: CardSize::ROOMY,
        }
    }
}

impl GameView {
    /// Grid placement, falling back to compact cards when the preferred size
    /// does not fit.
    pub fn layout(&self, level: u8, viewport: Viewport) -> GridLayout {
        let layout = GridLayout::compute(level, self.preferred, viewport);
        if layout.fits(viewport) || self.preferred == CardSize::COMPACT {
            layout
        } else {
            GridLayout::compute(level, CardSize::COMPACT, viewport)
        }
    }

    /// Map a mouse position to a board position.
    pub fn hit_test(&self, level: u8, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        self.layout(level, viewport).hit(x, y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.level, viewport);

        let title = CellStyle::default().bold();
        put_centered(fb, viewport, TITLE_ROW, TITLE, title);
        self.draw_timer(fb, snap, viewport);

        self.draw_border(fb, &layout);
        for position in 0..snap.board.len() {
            self.draw_card(fb, snap, &layout, position, cursor == Some(position));
        }

        let controls_row = layout.bottom() + 1;
        self.draw_controls(fb, snap, layout.frame_x, controls_row);

        if let Some(outcome) = snap.outcome {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            put_centered(fb, viewport, controls_row + 1, outcome.message(), style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_timer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let seconds = snap.remaining_seconds;
        let label = "Timer : ";
        let width = label.len() as u16 + digit_count(seconds) + 2;
        let x = viewport.width.saturating_sub(width) / 2;

        let plain = CellStyle::default();
        let red = CellStyle {
            fg: Rgb::new(239, 68, 68),
            ..plain
        };
        let value_style = match seconds {
            0 => red.bold(),
            1..=9 => red,
            _ => plain,
        };

        let mut cx = x + fb.put_str(x, TIMER_ROW, label, plain);
        cx += fb.put_u32(cx, TIMER_ROW, seconds, value_style);
        fb.put_str(cx, TIMER_ROW, " s", value_style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));

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

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &GridLayout,
        position: usize,
        focused: bool,
    ) {
        let face = snap.face(position);
        let mut style = match face {
            CardFace::Hidden => CellStyle::new(Rgb::new(30, 30, 30), Rgb::new(209, 213, 219)),
            CardFace::Flipped => CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(59, 130, 246)),
            CardFace::Matched => CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(34, 197, 94)),
        };
        if focused {
            style = style.bold();
        }

        let (x, y) = layout.card_origin(position);
        let card = layout.card;
        fb.fill_rect(x, y, card.w, card.h, ' ', style);

        let value = snap.board.get(position).map(|c| c.value).unwrap_or(0);
        let label_w = match face {
            CardFace::Hidden => 1,
            _ => digit_count(value),
        };
        let total_w = if focused { label_w + 2 } else { label_w };
        let mut cx = x + card.w.saturating_sub(total_w) / 2;
        let cy = y + card.h / 2;

        if focused {
            cx += fb.put_str(cx, cy, "▸", style);
        }
        cx += match face {
            CardFace::Hidden => fb.put_str(cx, cy, "?", style),
            _ => fb.put_u32(cx, cy, value, style),
        };
        if focused {
            fb.put_str(cx, cy, "◂", style);
        }
    }

    fn draw_controls(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let running = snap.playable() && snap.remaining_seconds != 0;
        let button = CellStyle::new(
            Rgb::new(255, 255, 255),
            if running {
                Rgb::new(239, 68, 68)
            } else {
                Rgb::new(59, 130, 246)
            },
        )
        .bold();
        let reset = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(107, 114, 128)).bold();
        let hint = CellStyle::default().dim();

        let mut cx = x;
        cx += fb.put_str(cx, y, "[P]", hint);
        cx += fb.put_str(cx, y, if running { " Stop " } else { " Start " }, button);
        cx += fb.put_str(cx, y, "  [R]", hint);
        cx += fb.put_str(cx, y, " Reset ", reset);
        cx += fb.put_str(cx, y, "  [+/-] ", hint);
        cx += fb.put_u32(cx, y, snap.level as u32, hint);
        cx += fb.put_str(cx, y, "x", hint);
        cx += fb.put_u32(cx, y, snap.level as u32, hint);
        fb.put_str(cx, y, "  [Q] Quit", hint);
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}
