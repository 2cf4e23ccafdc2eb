mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CheckParams, DumpParams, GenerateParams, TreeParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
