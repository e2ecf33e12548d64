use gitboard_core::config::load_hierarchy;
use gitboard_core::init_logging;
use gitboard_core::render::color;

mod app;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Handle --no-color before any output
    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    // The log file location lives in the config, so read it before logging
    // starts but report any load failure only once logging is up.
    let loaded = load_hierarchy();
    let log_file = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.logging.file.clone());

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet, log_file.as_deref());

    let config = commands::config_or_defaults(loaded);

    if let Err(e) = commands::run_dashboard(&matches, config) {
        // Error already printed to user by run_dashboard.
        // In verbose mode, JSON logs were also emitted.
        // Exit with non-zero code without printing Rust's Debug representation.
        drop(e);
        std::process::exit(1);
    }
}
