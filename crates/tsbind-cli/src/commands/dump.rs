use std::path::PathBuf;

use tsbind_core::Library;

use super::loader::{exit_with, load_config, load_generator};

pub struct DumpArgs {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub raw: bool,
    pub compact: bool,
}

pub fn run(args: DumpArgs) {
    let extracted = load_config(&args.config_path, &args.files)
        .and_then(load_generator)
        .and_then(|generator| Ok(generator.extract()?))
        .unwrap_or_else(|e| exit_with(e));

    let library = if args.raw {
        extracted.library().clone()
    } else {
        extracted.normalize().library().clone()
    };

    println!(
        "{}",
        to_json(&library, args.compact).unwrap_or_else(|e| exit_with(e))
    );
}

fn to_json(library: &Library, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(library)
    } else {
        serde_json::to_string_pretty(library)
    }
}
