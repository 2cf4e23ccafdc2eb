//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tsbind")
        .about("Dart package:js bindings from TypeScript declaration files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(tree_command())
}

/// Run the whole pipeline and write one Dart file per class.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate Dart bindings")
        .override_usage(
            "\
  tsbind generate <CONFIG> [FILES...]
  tsbind generate <CONFIG> [FILES...] --stdout",
        )
        .after_help(
            r#"EXAMPLES:
  tsbind generate tsbind.json                    # inputs and outDir from config
  tsbind generate tsbind.json babylon.d.ts -o gen  # explicit input and output
  tsbind generate tsbind.json --stdout           # print units"#,
        )
        .arg(config_path_arg())
        .arg(files_arg())
        .arg(out_dir_arg())
        .arg(stdout_arg())
        .arg(color_arg())
}

/// Run the whole pipeline without writing.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report diagnostics without writing files")
        .after_help(
            r#"EXAMPLES:
  tsbind check tsbind.json            # errors fail
  tsbind check tsbind.json --strict   # warnings fail too"#,
        )
        .arg(config_path_arg())
        .arg(files_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Print the declaration library as JSON.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the declaration library as JSON")
        .after_help(
            r#"EXAMPLES:
  tsbind dump tsbind.json             # after normalization
  tsbind dump tsbind.json --raw       # as extracted"#,
        )
        .arg(config_path_arg())
        .arg(files_arg())
        .arg(raw_arg().help("Show the library as extracted, before normalization"))
        .arg(compact_arg())
}

/// Print the syntax tree of a declaration file.
pub fn tree_command() -> Command {
    Command::new("tree")
        .about("Show the tree-sitter syntax tree of a declaration file")
        .override_usage(
            "\
  tsbind tree <FILE>
  tsbind tree -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  tsbind tree babylon.d.ts                       # named nodes
  tsbind tree babylon.d.ts --raw --spans         # every node with positions
  tsbind tree -s 'declare class A { x: number }' # inline text"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(raw_arg().help("Include anonymous nodes (keywords, punctuation)"))
        .arg(spans_arg())
}
