use super::*;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `.gitboard/config.toml` under `root` and return its path.
fn write_config(root: &Path, contents: &str) -> PathBuf {
    let dir = root.join(".gitboard");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_without_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join(".gitboard/config.toml");

    let config = load_from(Some(&missing), None).unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.watch.interval_secs, 5);
    assert_eq!(config.watch.tick(), Duration::from_millis(250));
}

#[test]
fn test_full_file_parses() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
directories = ["/abs/repo", "rel/repo"]

[watch]
interval_secs = 10
tick_ms = 100

[display]
headings = true
branch = true
boring = true
invert = true

[logging]
file = "/tmp/gitboard.log"
"#,
    );

    let config = load_from(Some(&path), None).unwrap();
    assert_eq!(
        config.directories,
        vec![PathBuf::from("/abs/repo"), dir.path().join("rel/repo")]
    );
    assert_eq!(config.watch.interval(), Duration::from_secs(10));
    assert_eq!(config.watch.tick_ms, 100);
    assert!(config.display.headings);
    assert!(config.display.branch);
    assert!(config.display.boring);
    assert!(config.display.invert);
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/gitboard.log")));
}

#[test]
fn test_project_overrides_user_field_by_field() {
    let user_root = TempDir::new().unwrap();
    let project_root = TempDir::new().unwrap();
    let user = write_config(
        user_root.path(),
        "[watch]\ninterval_secs = 30\n\n[display]\nheadings = true\nbranch = true\n",
    );
    let project = write_config(project_root.path(), "[display]\nbranch = false\n");

    let config = load_from(Some(&user), Some(&project)).unwrap();
    assert_eq!(config.watch.interval_secs, 30);
    assert!(config.display.headings);
    assert!(!config.display.branch);
}

#[test]
fn test_merge_files_prefers_override() {
    let base = ConfigFile {
        directories: Some(vec![PathBuf::from("/a")]),
        watch: WatchFile {
            interval_secs: Some(7),
            tick_ms: None,
        },
        ..ConfigFile::default()
    };
    let over = ConfigFile {
        watch: WatchFile {
            interval_secs: None,
            tick_ms: Some(50),
        },
        ..ConfigFile::default()
    };

    let merged = merge_files(base, over);
    assert_eq!(merged.directories, Some(vec![PathBuf::from("/a")]));
    assert_eq!(merged.watch.interval_secs, Some(7));
    assert_eq!(merged.watch.tick_ms, Some(50));
}

#[test]
fn test_parse_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[watch\ninterval_secs = ");

    let result = load_from(Some(&path), None);
    assert!(matches!(result, Err(ConfigError::ParseFailed { .. })));
}

#[test]
fn test_zero_interval_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[watch]\ninterval_secs = 0\n");

    let result = load_from(Some(&path), None);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_zero_tick_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[watch]\ntick_ms = 0\n");

    let result = load_from(Some(&path), None);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidConfiguration { .. })
    ));
}
