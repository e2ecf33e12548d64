
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("gitboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show uncommitted change counts for a set of git working trees")
        .long_about("gitboard prints one line per directory with added, removed, modified and renamed counts, an optional branch name and a status glyph. With -w or --watch it keeps the block on screen and refreshes it on an interval.")
        // -h is the headings flag, so help is long-only.
        .disable_help_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .help("Print help")
                .action(ArgAction::Help),
        )
        .arg(
            Arg::new("watch-default")
                .short('w')
                .help("Watch mode with the configured interval (default 5 seconds)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("watch")
                .long("watch")
                .value_name("SECONDS")
                .help("Watch mode with an explicit refresh interval; overrides -w")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("headings")
                .short('h')
                .help("Include a header row naming each column")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("branch")
                .short('b')
                .help("Include a branch name column")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("boring")
                .long("boring")
                .help("Use plain ASCII status glyphs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("invert")
                .long("invert")
                .help("Invert the directory name color for light backgrounds")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tick")
                .long("tick")
                .value_name("MS")
                .help("Render tick period in milliseconds")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("directories")
                .help("Directories to monitor (defaults to the current directory)")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf)),
        )
}
