use std::path::PathBuf;

use super::loader::{exit_with, load_config, load_generator};

pub struct GenerateArgs {
    pub config_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub stdout: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let mut config = load_config(&args.config_path, &args.files).unwrap_or_else(|e| exit_with(e));
    if let Some(dir) = args.out_dir {
        config = config.with_out_dir(dir);
    }

    let emitted = load_generator(config)
        .and_then(|generator| Ok(generator.run()?))
        .unwrap_or_else(|e| exit_with(e));

    let diagnostics = emitted.diagnostics();
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

    // Nothing is written when any member was rejected
    if !emitted.is_valid() {
        exit_with(format!(
            "generation failed with {} errors",
            diagnostics.error_count()
        ));
    }

    if args.stdout {
        for unit in emitted.units() {
            println!("// {}", unit.file_name);
            print!("{}", unit.content);
        }
        return;
    }

    let written = emitted.write().unwrap_or_else(|e| exit_with(e));
    tracing::info!(files = written.len(), "generation finished");
}
