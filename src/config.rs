//! Application configuration from environment variables.
//!
//! - `MEMORY_SEED`: u64 seed for deals (default: OS entropy)
//! - `MEMORY_DIFFICULTY`: `easy` / `medium` / `hard`, skips the menu
//! - `MEMORY_LOG_PATH`: file to append log lines to (default: no logging)
//! - `MEMORY_LOG_LEVEL`: `error` .. `trace` (default: `info`)
//!
//! Unlike silently-defaulting settings, a value that is present but invalid is
//! a startup error.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;

use crate::types::Difficulty;

pub const ENV_SEED: &str = "MEMORY_SEED";
pub const ENV_DIFFICULTY: &str = "MEMORY_DIFFICULTY";
pub const ENV_LOG_PATH: &str = "MEMORY_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "MEMORY_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub difficulty: Option<Difficulty>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Create from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get(ENV_SEED)
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("invalid {ENV_SEED} {s:?}"))
            })
            .transpose()?;

        let difficulty = get(ENV_DIFFICULTY)
            .map(|s| {
                s.parse::<Difficulty>()
                    .with_context(|| format!("invalid {ENV_DIFFICULTY}"))
            })
            .transpose()?;

        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        let log_level = match get(ENV_LOG_LEVEL) {
            Some(s) => s
                .parse::<LevelFilter>()
                .map_err(|_| anyhow!("invalid {ENV_LOG_LEVEL} {s:?}"))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            seed,
            difficulty,
            log_path,
            log_level,
        })
    }
}
