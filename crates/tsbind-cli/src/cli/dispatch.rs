//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap.
//! `Into<*Args>` impls bridge dispatch and the command handlers, resolving
//! terminal-dependent settings such as color.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::tree::TreeArgs;

pub struct GenerateParams {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub stdout: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: config_path(m),
            files: files(m),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            stdout: m.get_flag("stdout"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            config_path: p.config_path,
            files: p.files,
            out_dir: p.out_dir,
            stdout: p.stdout,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: config_path(m),
            files: files(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            config_path: p.config_path,
            files: p.files,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub raw: bool,
    pub compact: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: config_path(m),
            files: files(m),
            raw: m.get_flag("raw"),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            config_path: p.config_path,
            files: p.files,
            raw: p.raw,
            compact: p.compact,
        }
    }
}

pub struct TreeParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            raw: p.raw,
            spans: p.spans,
        }
    }
}

fn config_path(m: &ArgMatches) -> PathBuf {
    // Required by the command definition
    m.get_one::<PathBuf>("config_path")
        .cloned()
        .unwrap_or_default()
}

fn files(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Log filter directive for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
