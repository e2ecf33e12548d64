//! Configuration types for gitboard.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.gitboard/config.toml`
//! 3. **Project config** - `./.gitboard/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! # Example
//!
//! ```toml
//! directories = ["~/src/gitboard", "../other-repo"]
//!
//! [watch]
//! interval_secs = 10
//! tick_ms = 250
//!
//! [display]
//! headings = true
//! branch = true
//!
//! [logging]
//! file = "/tmp/gitboard.log"
//! ```

mod loading;

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub use loading::{load_file, load_from, load_hierarchy, merge_files};

pub const DEFAULT_WATCH_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_TICK_MS: u64 = 250;

/// A config file as written on disk. Every field is optional so files can
/// be layered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub directories: Option<Vec<PathBuf>>,
    #[serde(default)]
    pub watch: WatchFile,
    #[serde(default)]
    pub display: DisplayFile,
    #[serde(default)]
    pub logging: LoggingFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WatchFile {
    pub interval_secs: Option<u64>,
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayFile {
    pub headings: Option<bool>,
    pub branch: Option<bool>,
    pub boring: Option<bool>,
    pub invert: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoggingFile {
    pub file: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub directories: Vec<PathBuf>,
    pub watch: WatchConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchConfig {
    /// Interval used by `-w` when no explicit `--watch=<seconds>` is given.
    pub interval_secs: u64,
    pub tick_ms: u64,
}

impl WatchConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    pub headings: bool,
    pub branch: bool,
    pub boring: bool,
    pub invert: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            watch: WatchConfig {
                interval_secs: DEFAULT_WATCH_INTERVAL_SECS,
                tick_ms: DEFAULT_TICK_MS,
            },
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Apply a layered config file on top of the built-in defaults.
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            directories: file.directories.unwrap_or(defaults.directories),
            watch: WatchConfig {
                interval_secs: file
                    .watch
                    .interval_secs
                    .unwrap_or(defaults.watch.interval_secs),
                tick_ms: file.watch.tick_ms.unwrap_or(defaults.watch.tick_ms),
            },
            display: DisplayConfig {
                headings: file.display.headings.unwrap_or(defaults.display.headings),
                branch: file.display.branch.unwrap_or(defaults.display.branch),
                boring: file.display.boring.unwrap_or(defaults.display.boring),
                invert: file.display.invert.unwrap_or(defaults.display.invert),
            },
            logging: LoggingConfig {
                file: file.logging.file.or(defaults.logging.file),
            },
        }
    }
}

#[cfg(test)]
mod tests;
