//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, generate_command, tree_command};

#[test]
fn generate_extracts_params() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "tsbind.json",
            "a.d.ts",
            "b.d.ts",
            "-o",
            "gen",
            "--color",
            "never",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.config_path, PathBuf::from("tsbind.json"));
    assert_eq!(
        params.files,
        vec![PathBuf::from("a.d.ts"), PathBuf::from("b.d.ts")]
    );
    assert_eq!(params.out_dir, Some(PathBuf::from("gen")));
    assert!(!params.stdout);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn generate_without_files_uses_config_inputs() {
    let m = generate_command()
        .try_get_matches_from(["generate", "tsbind.json", "--stdout"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert!(params.files.is_empty());
    assert!(params.stdout);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn generate_requires_config() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn check_strict_flag() {
    let m = check_command()
        .try_get_matches_from(["check", "tsbind.json", "--strict"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_rejects_generate_flags() {
    let result = check_command().try_get_matches_from(["check", "tsbind.json", "--stdout"]);
    assert!(result.is_err());
}

#[test]
fn dump_raw_and_compact() {
    let m = dump_command()
        .try_get_matches_from(["dump", "tsbind.json", "x.d.ts", "--raw", "--compact"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.files, vec![PathBuf::from("x.d.ts")]);
    assert!(params.raw);
    assert!(params.compact);
}

#[test]
fn tree_inline_source() {
    let m = tree_command()
        .try_get_matches_from(["tree", "-s", "declare class A {}", "--spans"])
        .unwrap();
    let params = TreeParams::from_matches(&m);

    assert_eq!(params.source_path, None);
    assert_eq!(params.source_text.as_deref(), Some("declare class A {}"));
    assert!(params.spans);
    assert!(!params.raw);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["tsbind", "check", "tsbind.json", "-vv"])
        .unwrap();

    assert_eq!(m.get_count("verbose"), 2);
    assert_eq!(log_level(m.get_count("verbose")), "trace");
    assert_eq!(log_level(0), "warn");
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();

    for name in ["generate", "check", "dump", "tree"] {
        assert!(help.contains(name), "missing `{}` in:\n{}", name, help);
    }
}
