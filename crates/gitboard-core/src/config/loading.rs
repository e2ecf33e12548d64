//! Configuration loading and merging logic.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ConfigFile, DashboardConfig, DisplayFile, LoggingFile, WatchFile};
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".gitboard";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a file exists but cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DashboardConfig, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    let project_root = std::env::current_dir().map_err(|e| ConfigError::ReadFailed {
        path: PathBuf::from("."),
        source: e,
    })?;

    let user = home.join(CONFIG_DIR).join(CONFIG_FILE);
    let project = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from(Some(&user), Some(&project))
}

/// Load, merge (later wins) and validate the given config files.
pub fn load_from(
    user: Option<&Path>,
    project: Option<&Path>,
) -> Result<DashboardConfig, ConfigError> {
    let mut merged = ConfigFile::default();
    for path in [user, project].into_iter().flatten() {
        if let Some(file) = load_file(path)? {
            merged = merge_files(merged, file);
        }
    }

    let config = DashboardConfig::from_file(merged);
    validate(&config)?;
    Ok(config)
}

/// Read one config file. Returns `Ok(None)` when the file does not exist.
///
/// Relative `directories` entries resolve against the directory that holds
/// the `.gitboard/` folder, and a leading `~` expands to the home directory.
pub fn load_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(event = "core.config.file_not_found", path = %path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let mut file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(directories) = file.directories.take() {
        let base = path
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        file.directories = Some(
            directories
                .into_iter()
                .map(|dir| resolve_directory(base, dir))
                .collect(),
        );
    }

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(file))
}

fn resolve_directory(base: &Path, dir: PathBuf) -> PathBuf {
    if let Ok(rest) = dir.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if dir.is_relative() {
        base.join(dir)
    } else {
        dir
    }
}

/// Merge two config files, with `override_file` taking precedence field by field.
pub fn merge_files(base: ConfigFile, override_file: ConfigFile) -> ConfigFile {
    ConfigFile {
        directories: override_file.directories.or(base.directories),
        watch: WatchFile {
            interval_secs: override_file.watch.interval_secs.or(base.watch.interval_secs),
            tick_ms: override_file.watch.tick_ms.or(base.watch.tick_ms),
        },
        display: DisplayFile {
            headings: override_file.display.headings.or(base.display.headings),
            branch: override_file.display.branch.or(base.display.branch),
            boring: override_file.display.boring.or(base.display.boring),
            invert: override_file.display.invert.or(base.display.invert),
        },
        logging: LoggingFile {
            file: override_file.logging.file.or(base.logging.file),
        },
    }
}

fn validate(config: &DashboardConfig) -> Result<(), ConfigError> {
    if config.watch.interval_secs == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "watch.interval_secs must be greater than 0".to_string(),
        });
    }
    if config.watch.tick_ms == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "watch.tick_ms must be greater than 0".to_string(),
        });
    }
    Ok(())
}
