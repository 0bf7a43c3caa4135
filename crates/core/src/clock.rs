//! Elapsed-time clock driven by fixed-timestep ticks.

use crate::types::CLOCK_INTERVAL_MS;

/// Whole seconds elapsed plus the sub-second remainder carried between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    elapsed_seconds: u32,
    carry_ms: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed_ms` and return how many whole seconds elapsed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.carry_ms as u64 + elapsed_ms as u64;
        let interval = CLOCK_INTERVAL_MS as u64;
        let seconds = (total / interval) as u32;
        self.carry_ms = (total % interval) as u32;
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
        seconds
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn carry_ms(&self) -> u32 {
        self.carry_ms
    }
}

/// Format elapsed seconds as `m:ss`.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
