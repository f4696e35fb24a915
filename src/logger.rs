//! Logging utilities
//!
//! A shared [`Logger`] keeps a timestamped in-memory trail of application
//! events and forwards every entry to the `log` facade. When file logging
//! is enabled in the configuration, a `fern` dispatcher (installed at most
//! once per process) writes the facade output to the XDG state directory.

use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

static FILE_DISPATCH: OnceCell<()> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_enabled: false,
        }
    }

    /// Build a logger according to the `[logging]` config section.
    ///
    /// File logging installs the global `fern` dispatcher on first use;
    /// later calls reuse it.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::init_file_dispatch()?;
        }
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_enabled: enabled,
        })
    }

    fn init_file_dispatch() -> Result<()> {
        FILE_DISPATCH
            .get_or_try_init(|| -> Result<()> {
                let path = Self::get_log_file_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
                }

                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {} {}] {}",
                            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ));
                    })
                    .level(log::LevelFilter::Debug)
                    .chain(
                        fern::log_file(&path)
                            .with_context(|| format!("Failed to open log file: {}", path.display()))?,
                    )
                    .apply()
                    .context("Failed to install file logger")?;
                Ok(())
            })
            .map(|_| ())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        log::info!("{}", message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            // Reverse to show newest logs first (descending order by timestamp)
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether this logger also writes to the log file.
    pub fn is_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Path of the log file used when file logging is enabled.
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine state directory"))
            .map(|dir| dir.join("getitdone").join("getitdone.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
