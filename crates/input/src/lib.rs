//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. [`map`] turns keys into screen-agnostic [`Intent`]s, and
//! [`handler::InputHandler`] resolves those against the current phase into
//! [`crate::types::GameAction`]s, tracking the menu selection and the grid
//! cursor along the way.

pub mod handler;
pub mod map;

pub use memory_pairs_types as types;

pub use handler::{Cursor, InputHandler};
pub use map::{handle_key_event, should_quit, Direction, Intent};
