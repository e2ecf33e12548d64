use super::*;
use crate::app::build_cli;

fn matches_for(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["gitboard"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv).unwrap()
}

#[test]
fn test_resolve_directories_defaults_to_cwd() {
    let cwd = PathBuf::from("/home/dev/project");
    let dirs = resolve_directories(&[], &[], &cwd);
    assert_eq!(dirs, vec![cwd]);
}

#[test]
fn test_resolve_directories_relative_to_cwd() {
    let cwd = PathBuf::from("/home/dev");
    let cli = vec![PathBuf::from("a"), PathBuf::from("/abs/b")];
    let dirs = resolve_directories(&cli, &[], &cwd);
    assert_eq!(
        dirs,
        vec![PathBuf::from("/home/dev/a"), PathBuf::from("/abs/b")]
    );
}

#[test]
fn test_resolve_directories_cli_wins_over_config() {
    let cwd = PathBuf::from("/home/dev");
    let cli = vec![PathBuf::from("/cli")];
    let config = vec![PathBuf::from("/config")];
    assert_eq!(
        resolve_directories(&cli, &config, &cwd),
        vec![PathBuf::from("/cli")]
    );
    assert_eq!(
        resolve_directories(&[], &config, &cwd),
        vec![PathBuf::from("/config")]
    );
}

#[test]
fn test_refresh_mode_one_shot_by_default() {
    let mode = refresh_mode(&matches_for(&[]), &DashboardConfig::default());
    assert_eq!(mode, RefreshMode::OneShot);
}

#[test]
fn test_refresh_mode_w_uses_configured_interval() {
    let mut config = DashboardConfig::default();
    assert_eq!(
        refresh_mode(&matches_for(&["-w"]), &config),
        RefreshMode::Watch {
            interval: Duration::from_secs(5)
        }
    );

    config.watch.interval_secs = 12;
    assert_eq!(
        refresh_mode(&matches_for(&["-w"]), &config),
        RefreshMode::Watch {
            interval: Duration::from_secs(12)
        }
    );
}

#[test]
fn test_refresh_mode_explicit_watch_overrides_w() {
    let mode = refresh_mode(
        &matches_for(&["-w", "--watch=30"]),
        &DashboardConfig::default(),
    );
    assert_eq!(
        mode,
        RefreshMode::Watch {
            interval: Duration::from_secs(30)
        }
    );
}

#[test]
fn test_render_options_merge_cli_and_config() {
    let mut config = DashboardConfig::default();
    config.display.branch = true;

    let options = render_options(&matches_for(&["-h", "--invert"]), &config);
    assert_eq!(
        options,
        RenderOptions {
            headings: true,
            branch: true,
            boring: false,
            invert: true,
        }
    );
}

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_config_load_failure_falls_back_and_is_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(logs.clone())
        .finish();

    let config = tracing::subscriber::with_default(subscriber, || {
        config_or_defaults(Err(ConfigError::InvalidConfiguration {
            message: "watch.tick_ms must be greater than 0".to_string(),
        }))
    });

    assert_eq!(config, DashboardConfig::default());
    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(
        output.contains("cli.config.load_failed"),
        "warning event missing: {output}"
    );
}

#[test]
fn test_config_loaded_is_used_as_is() {
    let mut loaded = DashboardConfig::default();
    loaded.display.headings = true;

    assert_eq!(config_or_defaults(Ok(loaded.clone())), loaded);
}

#[test]
fn test_failure_message_is_one_line() {
    let error = std::io::Error::new(std::io::ErrorKind::NotFound, "working directory removed");
    let message = failure_message(&error);

    assert_eq!(message, "gitboard: working directory removed");
    assert!(!message.contains('\n'));
}
