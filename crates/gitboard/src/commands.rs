use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info, warn};

use gitboard_core::config::DashboardConfig;
use gitboard_core::errors::ConfigError;
use gitboard_core::{
    DualCadenceScheduler, RefreshMode, RenderCoordinator, RenderOptions, StatusProbe,
    TerminalRepaint,
};
use gitboard_git::GitStatusProvider;

/// Resolve a config load result, falling back to defaults on errors.
///
/// Call after logging is initialised. On failure the user is notified via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub(crate) fn config_or_defaults(loaded: Result<DashboardConfig, ConfigError>) -> DashboardConfig {
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.gitboard/config.toml and ./.gitboard/config.toml for syntax errors.",
                e
            );
            warn!(event = "cli.config.load_failed", error = %e);
            DashboardConfig::default()
        }
    }
}

/// Run the dashboard, reporting any failure on stderr exactly once.
pub(crate) fn run_dashboard(
    matches: &ArgMatches,
    config: DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    start_dashboard(matches, config).inspect_err(|e| {
        eprintln!("{}", failure_message(e.as_ref()));
        error!(event = "cli.dashboard_failed", error = %e);
    })
}

fn start_dashboard(
    matches: &ArgMatches,
    config: DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let cli_dirs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("directories")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let directories = resolve_directories(&cli_dirs, &config.directories, &cwd);
    let mode = refresh_mode(matches, &config);
    let options = render_options(matches, &config);
    let tick = matches
        .get_one::<u64>("tick")
        .map(|ms| Duration::from_millis(*ms))
        .unwrap_or_else(|| config.watch.tick());

    info!(
        event = "cli.dashboard_started",
        directories = directories.len(),
        watch = mode.is_watch(),
        headings = options.headings,
        branch = options.branch
    );

    let scheduler = DualCadenceScheduler::new(
        directories,
        mode,
        StatusProbe::new(GitStatusProvider),
        RenderCoordinator::new(options),
        TerminalRepaint::stdout(),
    )
    .with_tick(tick);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(scheduler.run_until(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(event = "cli.signal.ctrl_c_failed", error = %e);
            std::future::pending::<()>().await;
        }
    }))?;

    info!(event = "cli.dashboard_completed");
    Ok(())
}

/// One-line stderr message for a failed run.
pub(crate) fn failure_message(error: &dyn std::error::Error) -> String {
    format!("gitboard: {}", error)
}

/// Directories from the command line win, then the config file, then `cwd`.
/// Relative paths resolve against `cwd`.
pub(crate) fn resolve_directories(
    cli_dirs: &[PathBuf],
    config_dirs: &[PathBuf],
    cwd: &Path,
) -> Vec<PathBuf> {
    let chosen = if !cli_dirs.is_empty() {
        cli_dirs
    } else {
        config_dirs
    };

    if chosen.is_empty() {
        return vec![cwd.to_path_buf()];
    }
    chosen.iter().map(|dir| cwd.join(dir)).collect()
}

/// `--watch=<seconds>` overrides `-w`, which uses the configured interval.
pub(crate) fn refresh_mode(matches: &ArgMatches, config: &DashboardConfig) -> RefreshMode {
    if let Some(secs) = matches.get_one::<u64>("watch") {
        RefreshMode::Watch {
            interval: Duration::from_secs(*secs),
        }
    } else if matches.get_flag("watch-default") {
        RefreshMode::Watch {
            interval: config.watch.interval(),
        }
    } else {
        RefreshMode::OneShot
    }
}

/// Display flags are on when either the command line or the config sets them.
pub(crate) fn render_options(matches: &ArgMatches, config: &DashboardConfig) -> RenderOptions {
    RenderOptions {
        headings: matches.get_flag("headings") || config.display.headings,
        branch: matches.get_flag("branch") || config.display.branch,
        boring: matches.get_flag("boring") || config.display.boring,
        invert: matches.get_flag("invert") || config.display.invert,
    }
}

#[cfg(test)]
mod tests;
