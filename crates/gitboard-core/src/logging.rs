use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize JSON structured logging.
///
/// `quiet` limits output to errors unless `RUST_LOG` says otherwise. When
/// `log_file` is set, events are appended there instead of stderr so they
/// never interleave with the live dashboard block. Safe to call more than
/// once; later calls are ignored.
pub fn init_logging(quiet: bool, log_file: Option<&Path>) {
    let default_level = if quiet { "error" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false);

    let file = log_file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("gitboard: cannot open log file '{}': {}", path.display(), e))
            .ok()
    });

    let result = match file {
        Some(file) => builder.with_writer(Mutex::new(file)).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    drop(result);
}
