use std::fs;

use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::test_utils::config_for;
use crate::{Config, Error, Generator};

#[test]
fn stages_expose_intermediate_libraries() {
    let extracted = Generator::inline(
        config_for(&["Mesh"]),
        "export declare class Mesh { name: string; }",
    )
    .extract()
    .unwrap();

    let mesh = extracted.library().class_by_name("Mesh").unwrap();
    assert_eq!(mesh.properties.len(), 1);
    assert!(mesh.getters.is_empty());

    let normalized = extracted.normalize();
    let mesh = normalized.library().class_by_name("Mesh").unwrap();
    assert!(mesh.properties.is_empty());
    assert_eq!(mesh.getters.len(), 1);

    let emitted = normalized.emit().unwrap();
    assert!(emitted.is_valid());
    assert_eq!(emitted.units().len(), 1);
}

#[test]
fn sources_merge_into_one_library() {
    let emitted = Generator::new(config_for(&["Mesh", "INode"]))
        .with_source_file("mesh.d.ts", "export declare class Mesh implements INode {}")
        .with_source_file("node.d.ts", "export interface INode { id: number; }")
        .run()
        .unwrap();

    assert_eq!(emitted.source_map().len(), 2);
    assert!(emitted.diagnostics().is_empty());
    assert!(emitted.units()[0].content.contains("external number get id;"));
}

#[test]
fn diagnostics_point_into_their_file() {
    let emitted = Generator::new(config_for(&["Scene"]))
        .with_source_file("ok.d.ts", "export declare class Scene {}")
        .with_source_file("broken.d.ts", "export declare class Broken {\n    render(: void;\n}\n")
        .run()
        .unwrap();

    assert!(emitted.diagnostics().kinds().contains(&DiagnosticKind::SyntaxError));
    assert!(emitted.is_valid());

    let rendered = emitted
        .diagnostics()
        .printer()
        .sources(emitted.source_map())
        .render();
    assert!(rendered.contains("broken.d.ts"));
    assert!(!rendered.contains("ok.d.ts"));
}

#[test]
fn config_file_drives_full_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("scene.d.ts"),
        indoc! {r#"
            export declare class Scene {
                constructor(engine: Engine);
                render(updateCameras?: boolean): void;
            }
        "#},
    )
    .unwrap();
    fs::write(
        dir.path().join("tsbind.json"),
        indoc! {r#"
            {
              "libraryName": "babylon",
              "outDir": "out",
              "inputs": ["scene.d.ts"],
              "typeReplacements": { "boolean": "bool" },
              "declarations": { "Scene": {} }
            }
        "#},
    )
    .unwrap();

    let config = Config::load(&dir.path().join("tsbind.json")).unwrap();
    let emitted = Generator::new(config)
        .read_inputs()
        .unwrap()
        .run()
        .unwrap();
    let written = emitted.write().unwrap();

    let expected = dir.path().join("out").join("scene.dart");
    assert_eq!(written, vec![expected.clone()]);
    insta::assert_snapshot!(fs::read_to_string(expected).unwrap(), @r"
    part of babylon;

    @JS()
    class Scene {
      external Scene(Engine engine);
      external void render([bool updateCameras]);
    }
    ");
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&[]).with_input(dir.path().join("absent.d.ts"));

    let err = Generator::new(config).read_inputs().err().unwrap();
    assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("absent.d.ts")));
}

#[test]
fn unresolved_placeholder_does_not_block_output() {
    let config = config_for(&["Mesh"]).replace_type("Nullable<#1>", "#2");
    let emitted = Generator::inline(config, "export declare class Mesh { parent: Nullable<Node>; }")
        .run()
        .unwrap();

    assert_eq!(
        emitted.diagnostics().kinds(),
        vec![DiagnosticKind::UnresolvedPlaceholder]
    );
    assert!(emitted.is_valid());
    assert!(emitted.units()[0].content.contains("external #2 get parent;"));
}
