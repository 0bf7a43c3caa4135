//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the matching-pairs rules and session state. It has
//! **no dependencies** on UI, terminals, or I/O beyond the `log` facade:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Every rule is a plain method call on [`GameState`]
//! - **Self-scheduling**: The clock and the mismatch flip-back are advanced by
//!   [`GameState::tick`], so no timer outlives its session
//!
//! # Module Structure
//!
//! - [`clock`]: Elapsed-time accumulation and `m:ss` formatting
//! - [`deck`]: Dealing a shuffled two-of-each deck
//! - [`game_state`]: Session lifecycle, flip/match rules, win detection
//! - [`rng`]: Seeded uniform shuffling
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - Choosing a difficulty deals 2N cards (N = 5, 6, or 7 pairs)
//! - Flip two cards per move; a match stays face-up, a mismatch flips back after 1000ms
//! - Flipping a face-up card, or a third card while two are pending, is ignored
//! - The game is won once every card is solved; the clock stops there
//!
//! # Example
//!
//! ```
//! use memory_pairs_core::GameState;
//! use memory_pairs_types::{Difficulty, GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Start(Difficulty::Easy));
//!
//! // Find the partner of card 0 and flip both.
//! let partner = game.deck().partner_of(0).unwrap();
//! game.apply_action(GameAction::Flip(0));
//! game.apply_action(GameAction::Flip(partner));
//!
//! assert_eq!(game.moves(), 1);
//! assert_eq!(game.pairs_found(), 1);
//! assert_eq!(game.phase(), Phase::Running);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. One clock second is 1000ms; sub-second remainders
//! carry between ticks.

pub mod clock;
pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use memory_pairs_types as types;

// Re-export commonly used types for convenience
pub use clock::{format_elapsed, Clock};
pub use deck::{Card, Deck};
pub use game_state::GameState;
pub use rng::DealRng;
pub use snapshot::{CardSnapshot, GameSnapshot};
