//! Render-facing copy of the game state.

use arrayvec::ArrayVec;

use crate::types::{CardId, Difficulty, Phase, Symbol, MAX_CARDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub id: CardId,
    pub symbol: Symbol,
    /// Flipped or solved.
    pub face_up: bool,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub difficulty: Option<Difficulty>,
    pub cards: ArrayVec<CardSnapshot, MAX_CARDS>,
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub pairs_found: u32,
    pub pair_count: u32,
    pub flip_back_pending: bool,
    pub session_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a flip would currently be accepted for some face-down card.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running && !self.flip_back_pending
    }

    /// Grid columns for the current deal (0 when idle).
    pub fn columns(&self) -> usize {
        self.difficulty.map(|d| d.grid_columns()).unwrap_or(0)
    }

    /// Grid rows for the current deal.
    pub fn rows(&self) -> usize {
        match self.columns() {
            0 => 0,
            cols => self.cards.len().div_ceil(cols),
        }
    }
}
