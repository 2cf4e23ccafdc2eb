use std::path::PathBuf;

use indoc::indoc;

use crate::Error;
use crate::config::{Config, MemberFilter};

#[test]
fn parses_camel_case_document() {
    let config = Config::from_json(indoc! {r#"
        {
          "libraryName": "babylon",
          "outDir": "lib/src",
          "inputs": ["babylon.module.d.ts"],
          "typeReplacements": { "number": "num", "Array<#1>": "List<#1>" },
          "declarations": {
            "Mesh": {},
            "Bone": { "include": ["constructor"] },
            "Sprite": { "exclude": ["playAnimation"] }
          }
        }
    "#})
    .unwrap();

    assert_eq!(config.library_name, "babylon");
    assert_eq!(config.out_dir, PathBuf::from("lib/src"));
    assert_eq!(config.inputs, vec![PathBuf::from("babylon.module.d.ts")]);
    assert_eq!(
        config.type_replacements.keys().collect::<Vec<_>>(),
        vec!["number", "Array<#1>"]
    );
    assert_eq!(
        config.declarations.keys().collect::<Vec<_>>(),
        vec!["Mesh", "Bone", "Sprite"]
    );
}

#[test]
fn defaults_for_optional_keys() {
    let config = Config::from_json(r#"{ "libraryName": "lib" }"#).unwrap();

    assert_eq!(config, Config::new("lib"));
    assert_eq!(config.out_dir, PathBuf::from("."));
}

#[test]
fn rejects_unknown_keys() {
    let err = Config::from_json(r#"{ "libraryName": "lib", "outFolder": "x" }"#).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("outFolder"));
}

#[test]
fn rejects_missing_library_name() {
    let err = Config::from_json(r#"{ "outDir": "x" }"#).unwrap_err();
    assert!(err.to_string().contains("libraryName"));
}

#[test]
fn top_level_requires_key() {
    let config = Config::new("lib").declare("Mesh");

    assert!(config.include_top_level("Mesh"));
    assert!(!config.include_top_level("Scene"));
}

#[test]
fn member_filter_semantics() {
    let config = Config::new("lib")
        .declare("Mesh")
        .declare_with("Bone", MemberFilter::including(["constructor"]))
        .declare_with("Sprite", MemberFilter::excluding(["playAnimation"]));

    assert!(config.include_member("Mesh", "anything"));
    assert!(config.include_member("Bone", "constructor"));
    assert!(!config.include_member("Bone", "getLength"));
    assert!(!config.include_member("Sprite", "playAnimation"));
    assert!(config.include_member("Sprite", "dispose"));
    assert!(!config.include_member("Scene", "render"));
}

#[test]
fn empty_include_rejects_everything() {
    let filter = MemberFilter::including(Vec::<String>::new());
    assert!(!filter.accepts("constructor"));
}

#[test]
fn exclude_wins_over_include() {
    let filter = MemberFilter {
        include: Some(vec!["a".into()]),
        exclude: vec!["a".into()],
    };
    assert!(!filter.accepts("a"));
}

#[test]
fn load_resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tsbind.json");
    std::fs::write(
        &path,
        r#"{ "libraryName": "lib", "outDir": "out", "inputs": ["a.d.ts", "/abs/b.d.ts"] }"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.out_dir, dir.path().join("out"));
    assert_eq!(
        config.inputs,
        vec![dir.path().join("a.d.ts"), PathBuf::from("/abs/b.d.ts")]
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
