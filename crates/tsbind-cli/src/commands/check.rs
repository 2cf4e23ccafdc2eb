use std::path::PathBuf;

use super::loader::{exit_with, load_config, load_generator};

pub struct CheckArgs {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let emitted = load_config(&args.config_path, &args.files)
        .and_then(load_generator)
        .and_then(|generator| Ok(generator.run()?))
        .unwrap_or_else(|e| exit_with(e));

    let diagnostics = emitted.diagnostics();
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        emitted.is_valid()
    };

    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            diagnostics
                .printer()
                .sources(emitted.source_map())
                .colored(args.color)
                .render()
        );
    }

    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
