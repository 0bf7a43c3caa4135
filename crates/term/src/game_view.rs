//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{format_elapsed, CardSnapshot, GameSnapshot};
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{CardId, Difficulty, Phase};

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

/// Front-end selection state drawn on top of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub cursor: CardId,
    pub menu: Difficulty,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            cursor: 0,
            menu: Difficulty::Easy,
        }
    }
}

const SCREEN_BG: Rgb = Rgb::new(30, 30, 40);
const CARD_BACK: Rgb = Rgb::new(0x66, 0x7e, 0xea);
const CARD_FRONT: Rgb = Rgb::new(245, 245, 245);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(150, 150, 160);

/// Card grid geometry for one deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardLayout {
    /// Top-left of the first card.
    x: u16,
    y: u16,
    columns: usize,
    len: usize,
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    card_w: u16,
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Gap of 2 leaves room for the cursor brackets between cards.
        Self {
            card_w: 7,
            card_h: 3,
            gap_x: 2,
            gap_y: 1,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w,
            card_h,
            ..Self::default()
        }
    }

    /// Render the current game state into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        selection: Selection,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, SCREEN_BG).cell(' '));

        match snap.phase {
            Phase::Idle => self.draw_menu(fb, selection.menu, viewport),
            Phase::Running => self.draw_board(fb, snap, selection.cursor, viewport),
            Phase::Won => self.draw_win(fb, snap, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, selection: Selection, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, selection, viewport, &mut fb);
        fb
    }

    /// Card under terminal position `(x, y)`, if the board is showing.
    pub fn hit_test(&self, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<CardId> {
        if snap.phase != Phase::Running {
            return None;
        }
        let layout = self.layout(snap, viewport)?;
        if x < layout.x || y < layout.y {
            return None;
        }
        let (dx, dy) = (x - layout.x, y - layout.y);
        let (pitch_x, pitch_y) = (self.card_w + self.gap_x, self.card_h + self.gap_y);
        if dx % pitch_x >= self.card_w || dy % pitch_y >= self.card_h {
            return None;
        }
        let col = (dx / pitch_x) as usize;
        let row = (dy / pitch_y) as usize;
        if col >= layout.columns {
            return None;
        }
        let id = row * layout.columns + col;
        (id < layout.len).then_some(id)
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<BoardLayout> {
        let columns = snap.columns();
        let rows = snap.rows();
        if columns == 0 || rows == 0 {
            return None;
        }
        let grid_w = self.span(columns as u16, self.card_w, self.gap_x);
        let grid_h = self.span(rows as u16, self.card_h, self.gap_y);
        // Stats bar plus a blank line sit above the grid.
        let total_h = grid_h + 2;

        let x = viewport.width.saturating_sub(grid_w) / 2;
        let y = viewport.height.saturating_sub(total_h) / 2 + 2;
        Some(BoardLayout {
            x,
            y,
            columns,
            len: snap.cards.len(),
        })
    }

    fn span(&self, n: u16, size: u16, gap: u16) -> u16 {
        n * size + n.saturating_sub(1) * gap
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, selected: Difficulty, viewport: Viewport) {
        let lines = 4 + Difficulty::ALL.len() as u16 * 2 + 1;
        let mut y = viewport.height.saturating_sub(lines) / 2;

        let title = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let muted = CellStyle::new(MUTED, SCREEN_BG);

        fb.put_str_centered(y, "Найди пару", title);
        y += 1;
        fb.put_str_centered(y, "Выбери уровень сложности", muted);
        y += 2;

        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let text = format!(
                " {}  {} - {} пар ",
                i + 1,
                difficulty.label(),
                difficulty.pairs()
            );
            let style = if *difficulty == selected {
                CellStyle::new(Rgb::new(255, 255, 255), difficulty_color(*difficulty)).bold()
            } else {
                CellStyle::new(difficulty_color(*difficulty), SCREEN_BG)
            };
            fb.put_str_centered(y, &text, style);
            y += 2;
        }

        y += 1;
        fb.put_str_centered(y, "Enter: выбрать   q: выход", muted.dim());
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, cursor: CardId, viewport: Viewport) {
        let Some(layout) = self.layout(snap, viewport) else {
            return;
        };

        self.draw_stats(fb, snap, layout.y.saturating_sub(2));

        for card in snap.cards.iter() {
            let (x, y) = self.card_origin(&layout, card.id);
            self.draw_card(fb, x, y, card);
        }

        if cursor < layout.len {
            let (x, y) = self.card_origin(&layout, cursor);
            let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
            let mid = y + self.card_h / 2;
            if x > 0 {
                fb.put_char(x - 1, mid, '[', style);
            }
            fb.put_char(x + self.card_w, mid, ']', style);
        }
    }

    fn card_origin(&self, layout: &BoardLayout, id: CardId) -> (u16, u16) {
        let col = (id % layout.columns) as u16;
        let row = (id / layout.columns) as u16;
        (
            layout.x + col * (self.card_w + self.gap_x),
            layout.y + row * (self.card_h + self.gap_y),
        )
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, y: u16) {
        let label = CellStyle::new(MUTED, SCREEN_BG);
        let value = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

        let moves = snap.moves.to_string();
        let time = format_elapsed(snap.elapsed_seconds);
        let pairs = format!("{}/{}", snap.pairs_found, snap.pair_count);
        let fields = [("Ходы ", moves.as_str()), ("Время ", time.as_str()), ("Пары ", pairs.as_str())];
        let hint = "n: Новая игра";

        let mut width = text_width(hint);
        for (name, v) in fields.iter() {
            width += text_width(name) + text_width(v) + 3;
        }

        let mut x = fb.width().saturating_sub(width) / 2;
        for (name, v) in fields.iter() {
            fb.put_str(x, y, name, label);
            x += text_width(name);
            fb.put_str(x, y, v, value);
            x += text_width(v) + 3;
        }
        fb.put_str(x, y, hint, CellStyle::new(Rgb::new(0xF8, 0x71, 0x71), SCREEN_BG));
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &CardSnapshot) {
        let face = card.symbol.face();
        let (style, glyph) = if card.solved {
            (CellStyle::new(Rgb::new(20, 20, 20), face.rgb.into()).bold(), face.glyph)
        } else if card.face_up {
            (CellStyle::new(face.rgb.into(), CARD_FRONT).bold(), face.glyph)
        } else {
            (CellStyle::new(Rgb::new(255, 255, 255), CARD_BACK).bold(), '?')
        };
        fb.fill_rect(x, y, self.card_w, self.card_h, ' ', style);
        fb.put_char(x + self.card_w / 2, y + self.card_h / 2, glyph, style);
    }

    fn draw_win(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let mut y = viewport.height.saturating_sub(9) / 2;
        let title = CellStyle::new(Rgb::new(0xFB, 0xBF, 0x24), SCREEN_BG).bold();
        let text = CellStyle::new(TEXT, SCREEN_BG);

        fb.put_str_centered(y, "Поздравляем!", title);
        y += 1;
        fb.put_str_centered(y, "Ты нашёл все пары!", text);
        y += 2;

        let level = snap.difficulty.map(|d| d.label()).unwrap_or("-");
        fb.put_str_centered(y, &format!("Уровень: {}", level), text);
        y += 1;
        fb.put_str_centered(y, &format!("Ходов: {}", snap.moves), text);
        y += 1;
        fb.put_str_centered(y, &format!("Время: {}", format_elapsed(snap.elapsed_seconds)), text);
        y += 2;

        let button = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0xA8, 0x55, 0xF7)).bold();
        fb.put_str_centered(y, " Enter: Играть снова ", button);
    }
}

fn difficulty_color(difficulty: Difficulty) -> Rgb {
    match difficulty {
        Difficulty::Easy => Rgb::new(0x4A, 0xDE, 0x80),
        Difficulty::Medium => Rgb::new(0xFB, 0xBF, 0x24),
        Difficulty::Hard => Rgb::new(0xF8, 0x71, 0x71),
    }
}
