//! Memory Pairs (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `memory_pairs::{core,input,term,types}` and adds the application-level
//! pieces the binary needs: environment configuration and file logging.

pub mod config;
pub mod logging;

pub use memory_pairs_core as core;
pub use memory_pairs_input as input;
pub use memory_pairs_term as term;
pub use memory_pairs_types as types;

pub use config::AppConfig;
