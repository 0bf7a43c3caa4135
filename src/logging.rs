//! File logger for the `log` facade.
//!
//! The terminal UI owns stdout/stderr, so log output only goes to a file and
//! only when `MEMORY_LOG_PATH` is set.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

use crate::config::AppConfig;

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
    started: Instant,
}

impl FileLogger {
    /// Open `path` for appending.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
            level,
            started: Instant::now(),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(self.started.elapsed().as_millis(), record);
        if let Ok(mut file) = self.file.lock() {
            // Logging must never take the game down.
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn format_line(elapsed_ms: u128, record: &Record) -> String {
    format!(
        "{:>8}ms {:<5} {}: {}\n",
        elapsed_ms,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the file logger if the config asks for one.
///
/// Returns whether a logger was installed.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };
    let logger = FileLogger::open(path, config.log_level)?;
    log::set_boxed_logger(Box::new(logger)).context("install logger")?;
    log::set_max_level(config.log_level);
    log::info!("logging to {} at {}", path.display(), config.log_level);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn temp_log(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("memory-pairs-{}-{}.log", name, std::process::id()))
    }

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(&AppConfig::default()).unwrap());
    }

    #[test]
    fn writes_enabled_records_only() {
        let path = temp_log("filter");
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("memory_pairs_core::game_state")
                .args(format_args!("session 1: dealt 10 cards (easy)"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("memory_pairs_core::game_state")
                .args(format_args!("session 1: matched 0 and 3 (move 1)"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(contents.contains("INFO  memory_pairs_core::game_state: session 1: dealt 10 cards (easy)"));
        assert!(!contents.contains("matched"));
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let path = std::env::temp_dir().join("memory-pairs-no-such-dir").join("x.log");
        let err = FileLogger::open(&path, LevelFilter::Info).err().unwrap();
        assert!(format!("{:#}", err).contains("open log file"));
    }
}
