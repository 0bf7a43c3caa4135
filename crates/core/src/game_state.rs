//! Game state module - manages the complete game session
//!
//! This module ties together the deck, the flip/match rules, the move counter,
//! and the elapsed-time clock. All mutation goes through [`GameState`] methods
//! so `solved` can never change without the win check running.
//!
//! Scheduling is owned by the state: both the elapsed-time clock and the
//! flip-back of a mismatched pair are millisecond countdowns advanced by
//! [`GameState::tick`]. Resetting or re-initializing drops the countdown along
//! with the session it belonged to.

use arrayvec::ArrayVec;

use crate::clock::Clock;
use crate::deck::Deck;
use crate::rng::DealRng;
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rng: DealRng,
    difficulty: Option<Difficulty>,
    deck: Deck,
    /// Face-up cards not yet confirmed as a match (at most two).
    flipped: ArrayVec<CardId, 2>,
    /// Matched cards, in the order they were solved.
    solved: ArrayVec<CardId, MAX_CARDS>,
    moves: u32,
    clock: Clock,
    /// Remaining time before a mismatched pair flips back down.
    flip_back_ms: Option<u32>,
    running: bool,
    won: bool,
    /// Monotonic session id (increments on every initialize and reset).
    session_id: u32,
}

impl GameState {
    /// Create an idle game whose deals are drawn from the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(DealRng::new(seed))
    }

    pub fn with_rng(rng: DealRng) -> Self {
        Self {
            rng,
            difficulty: None,
            deck: Deck::empty(),
            flipped: ArrayVec::new(),
            solved: ArrayVec::new(),
            moves: 0,
            clock: Clock::new(),
            flip_back_ms: None,
            running: false,
            won: false,
            session_id: 0,
        }
    }

    /// Deal a fresh deck and start the clock.
    ///
    /// Any previous session, including a pending flip-back, is discarded.
    pub fn initialize(&mut self, difficulty: Difficulty) {
        self.clear_session();
        self.deck = Deck::deal(difficulty, &mut self.rng);
        self.difficulty = Some(difficulty);
        self.running = true;

        log::info!(
            "session {}: dealt {} cards ({})",
            self.session_id,
            self.deck.len(),
            difficulty
        );
    }

    /// Return to difficulty selection.
    pub fn reset(&mut self) {
        self.clear_session();
        log::debug!("session {}: reset", self.session_id);
    }

    fn clear_session(&mut self) {
        self.difficulty = None;
        self.deck = Deck::empty();
        self.flipped.clear();
        self.solved.clear();
        self.moves = 0;
        self.clock = Clock::new();
        self.flip_back_ms = None;
        self.running = false;
        self.won = false;
        self.session_id = self.session_id.wrapping_add(1);
    }

    /// Reveal a card.
    ///
    /// Returns `false` without touching state when the flip is not allowed:
    /// no running session, two cards already pending, the card is already
    /// face-up, or the id is not on the table.
    pub fn flip(&mut self, id: CardId) -> bool {
        if !self.running || self.won {
            return false;
        }
        if self.flipped.is_full() || id >= self.deck.len() {
            return false;
        }
        if self.flipped.contains(&id) || self.solved.contains(&id) {
            return false;
        }

        self.flipped.push(id);
        if self.flipped.is_full() {
            self.moves += 1;
            self.evaluate_pair();
        }
        true
    }

    fn evaluate_pair(&mut self) {
        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.deck.symbol(first) == self.deck.symbol(second) {
            self.solved.push(first);
            self.solved.push(second);
            self.flipped.clear();
            log::debug!(
                "session {}: matched {} and {} (move {})",
                self.session_id,
                first,
                second,
                self.moves
            );
            self.check_win();
        } else {
            self.flip_back_ms = Some(FLIP_BACK_DELAY_MS);
            log::debug!(
                "session {}: mismatch {} and {} (move {})",
                self.session_id,
                first,
                second,
                self.moves
            );
        }
    }

    /// Mark the game won once every card is solved.
    fn check_win(&mut self) -> bool {
        if self.solved.is_empty() || self.solved.len() != self.deck.len() {
            return false;
        }
        self.won = true;
        self.running = false;
        self.flip_back_ms = None;
        log::info!(
            "session {}: won in {} moves, {}",
            self.session_id,
            self.moves,
            crate::clock::format_elapsed(self.clock.elapsed_seconds())
        );
        true
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Returns `true` when something visible changed (a clock second passed or
    /// a mismatched pair flipped back).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.running || self.won {
            return false;
        }

        let mut changed = self.clock.advance(elapsed_ms) > 0;

        if let Some(remaining) = self.flip_back_ms {
            let remaining = remaining.saturating_sub(elapsed_ms);
            if remaining == 0 {
                self.flip_back_ms = None;
                self.flipped.clear();
                changed = true;
            } else {
                self.flip_back_ms = Some(remaining);
            }
        }

        changed
    }

    /// Apply a presentation-layer action. Returns whether state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start(difficulty) => {
                self.initialize(difficulty);
                true
            }
            GameAction::Flip(id) => self.flip(id),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.won {
            Phase::Won
        } else if self.running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    pub fn solved(&self) -> &[CardId] {
        &self.solved
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Remaining milliseconds before a mismatched pair flips back, if any.
    pub fn flip_back_pending(&self) -> Option<u32> {
        self.flip_back_ms
    }

    pub fn is_solved(&self, id: CardId) -> bool {
        self.solved.contains(&id)
    }

    pub fn is_face_up(&self, id: CardId) -> bool {
        self.flipped.contains(&id) || self.solved.contains(&id)
    }

    pub fn pairs_found(&self) -> usize {
        self.solved.len() / 2
    }

    pub fn pair_count(&self) -> usize {
        self.deck.len() / 2
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase();
        out.difficulty = self.difficulty;
        out.cards.clear();
        for card in self.deck.cards() {
            out.cards.push(CardSnapshot {
                id: card.id,
                symbol: card.symbol,
                face_up: self.is_face_up(card.id),
                solved: self.is_solved(card.id),
            });
        }
        out.moves = self.moves;
        out.elapsed_seconds = self.clock.elapsed_seconds();
        out.pairs_found = self.pairs_found() as u32;
        out.pair_count = self.pair_count() as u32;
        out.flip_back_pending = self.flip_back_ms.is_some();
        out.session_id = self.session_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
