//! Terminal rendering module.
//!
//! Renders the game into a plain framebuffer that is then flushed to a
//! terminal backend, without a widget/layout library in between.
//!
//! - [`fb`]: styled character grid
//! - [`game_view`]: pure mapping from a `GameSnapshot` to a framebuffer, plus
//!   mouse hit-testing against the same layout
//! - [`renderer`]: crossterm output with full and diff redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use memory_pairs_core as core;
pub use memory_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Selection, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
