//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be used by the engine,
//! the input layer, and the terminal renderer alike.
//!
//! # Difficulties
//!
//! | Key | Pairs | Cards | Columns | Label |
//! |-----|-------|-------|---------|-------|
//! | `easy` | 5 | 10 | 5 | Легкий |
//! | `medium` | 6 | 12 | 4 | Средний |
//! | `hard` | 7 | 14 | 4 | Сложный |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval of the front-end loop |
//! | `CLOCK_INTERVAL_MS` | 1000 | One elapsed-time second |
//! | `FLIP_BACK_DELAY_MS` | 1000 | How long a mismatched pair stays face-up |
//!
//! # Examples
//!
//! ```
//! use memory_pairs_types::{Difficulty, GameAction, MAX_CARDS};
//!
//! let difficulty: Difficulty = "medium".parse().unwrap();
//! assert_eq!(difficulty.pairs(), 6);
//! assert_eq!(difficulty.card_count(), 12);
//! assert_eq!(difficulty.label(), "Средний");
//!
//! assert!("expert".parse::<Difficulty>().is_err());
//!
//! let action = GameAction::Start(Difficulty::Hard);
//! assert_eq!(action, GameAction::Start(Difficulty::Hard));
//! assert_eq!(Difficulty::Hard.card_count(), MAX_CARDS);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed timestep interval of the front-end loop in milliseconds.
pub const TICK_MS: u32 = 16;

/// Length of one elapsed-time second.
pub const CLOCK_INTERVAL_MS: u32 = 1000;

/// How long a mismatched pair stays face-up before flipping back.
pub const FLIP_BACK_DELAY_MS: u32 = 1000;

/// Largest deck any difficulty deals.
pub const MAX_CARDS: usize = 14;

/// Position of a card in the dealt deck (`0..2N`).
pub type CardId = usize;

/// Opaque identity shared by exactly two cards of a deck.
///
/// The value indexes [`CARD_FACES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Face used to draw this symbol.
    pub fn face(self) -> &'static CardFace {
        &CARD_FACES[self.0 as usize % CARD_FACES.len()]
    }
}

/// Static description of how a symbol looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFace {
    pub glyph: char,
    pub rgb: (u8, u8, u8),
}

/// The card imagery, in dealing order.
///
/// A difficulty with N pairs uses the first N faces.
pub static CARD_FACES: [CardFace; 7] = [
    CardFace { glyph: '1', rgb: (0xFF, 0x6B, 0x6B) },
    CardFace { glyph: '2', rgb: (0x4E, 0xCD, 0xC4) },
    CardFace { glyph: '3', rgb: (0x45, 0xB7, 0xD1) },
    CardFace { glyph: '4', rgb: (0xFF, 0xA0, 0x7A) },
    CardFace { glyph: '5', rgb: (0x98, 0xD8, 0xC8) },
    CardFace { glyph: '6', rgb: (0xF7, 0xDC, 0x6F) },
    CardFace { glyph: '7', rgb: (0xBB, 0x8F, 0xCE) },
];

/// Selectable game difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of pairs dealt.
    pub fn pairs(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 6,
            Difficulty::Hard => 7,
        }
    }

    pub fn card_count(&self) -> usize {
        self.pairs() * 2
    }

    /// Display label shown on the menu and win screen.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Легкий",
            Difficulty::Medium => "Средний",
            Difficulty::Hard => "Сложный",
        }
    }

    /// Grid columns used to lay out the deck.
    pub fn grid_columns(&self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium | Difficulty::Hard => 4,
        }
    }

    /// Lowercase key (`easy`, `medium`, `hard`).
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_pairs_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.as_str(), "easy");
    /// assert_eq!(Difficulty::Hard.as_str(), "hard");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a difficulty key is not one of `easy`, `medium`, `hard`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDifficultyError {
    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    Unknown(String),
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parse a difficulty key (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError::Unknown(s.to_string())),
        }
    }
}

/// Coarse lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No difficulty chosen yet.
    #[default]
    Idle,
    Running,
    Won,
}

/// Actions a presentation layer can apply to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Deal a fresh deck for the difficulty.
    Start(Difficulty),
    /// Reveal the card with this id.
    Flip(CardId),
    /// Drop the session and return to difficulty selection.
    Reset,
}
