//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so commands sharing an input agree on its name and help text.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Configuration file (positional).
pub fn config_path_arg() -> Arg {
    Arg::new("config_path")
        .value_name("CONFIG")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON configuration file")
}

/// Declaration files overriding the configured inputs (positional, repeated).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILES")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Declaration files (default: `inputs` from the configuration)")
}

/// A single declaration file (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Declaration file, or - for stdin")
}

/// Inline declaration text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline declaration text")
}

/// Output directory override (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write units here instead of the configured outDir")
}

/// Print units instead of writing them (--stdout).
pub fn stdout_arg() -> Arg {
    Arg::new("stdout")
        .long("stdout")
        .action(ArgAction::SetTrue)
        .help("Print generated units instead of writing files")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Skip normalization (--raw) for dump; include anonymous nodes for tree.
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Log verbosity (-v, -vv). Global, so it may follow the subcommand.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
