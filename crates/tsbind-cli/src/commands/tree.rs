use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use arborium_tree_sitter as tree_sitter;

use super::loader::exit_with;

pub struct TreeArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
}

pub fn run(args: TreeArgs) {
    let (source, name) = match (&args.source_text, &args.source_path) {
        (Some(text), None) => (text.clone(), "<inline>".to_string()),
        (None, Some(path)) => (load_source(path), path.display().to_string()),
        (Some(_), Some(_)) => exit_with("cannot use both --source and positional FILE"),
        (None, None) => exit_with("source required (positional or --source)"),
    };

    let tree = tsbind_compiler::extract::parse(&source, &name).unwrap_or_else(|e| exit_with(e));
    print!("{}", dump_tree(&tree, &source, args.raw, args.spans));
}

fn load_source(path: &Path) -> String {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            exit_with(format!("failed to read stdin: {}", e));
        }
        return buf;
    }
    fs::read_to_string(path)
        .unwrap_or_else(|_| exit_with(format!("file not found: {}", path.display())))
}

#[derive(Clone, Copy)]
struct TreeOptions {
    /// Include anonymous nodes (keywords and punctuation).
    raw: bool,
    spans: bool,
}

fn dump_tree(tree: &tree_sitter::Tree, source: &str, raw: bool, spans: bool) -> String {
    let mut out = String::new();
    let mut cursor = tree.walk();
    write_node(&mut out, &mut cursor, source, 0, TreeOptions { raw, spans });
    out.push('\n');
    out
}

/// Write the node under `cursor` and its visible children. The cursor ends
/// where it started.
fn write_node(
    out: &mut String,
    cursor: &mut tree_sitter::TreeCursor<'_>,
    source: &str,
    depth: usize,
    options: TreeOptions,
) {
    let node = cursor.node();
    if depth > 0 {
        out.push('\n');
    }
    out.push_str(&"  ".repeat(depth));
    if let Some(field) = cursor.field_name() {
        out.push_str(&format!("{}: ", field));
    }

    if !node.is_named() {
        out.push_str(&format!("{:?}", node.kind()));
        push_span(out, node, options);
        return;
    }

    out.push_str(&format!("({}", node.kind()));
    push_span(out, node, options);

    let mut has_children = false;
    if cursor.goto_first_child() {
        loop {
            if options.raw || cursor.node().is_named() {
                has_children = true;
                write_node(out, cursor, source, depth + 1, options);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }

    if !has_children {
        let text = node.utf8_text(source.as_bytes()).unwrap_or("<invalid utf8>");
        out.push_str(&format!(" {:?}", text));
    }
    out.push(')');
}

fn push_span(out: &mut String, node: tree_sitter::Node<'_>, options: TreeOptions) {
    if options.spans {
        let (start, end) = (node.start_position(), node.end_position());
        out.push_str(&format!(
            " [{}:{}-{}:{}]",
            start.row, start.column, end.row, end.column
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(source: &str, raw: bool, spans: bool) -> String {
        let tree = tsbind_compiler::extract::parse(source, "<test>").unwrap();
        dump_tree(&tree, source, raw, spans)
    }

    #[test]
    fn named_nodes_with_fields() {
        let out = tree_of("declare class A { x: number }", false, false);

        assert!(out.starts_with("(program"));
        assert!(out.contains("(ambient_declaration"));
        assert!(out.contains("name: (type_identifier \"A\")"));
        assert!(out.contains("name: (property_identifier \"x\")"));
        assert!(out.contains("type: (type_annotation\n"));
        assert!(out.contains("(predefined_type \"number\")"));
        assert!(!out.contains("\"declare\""));
    }

    #[test]
    fn raw_includes_keywords() {
        let out = tree_of("declare class A {}", true, false);
        assert!(out.contains("\n    \"declare\""));
        assert!(out.contains("\"class\""));
    }

    #[test]
    fn spans_suffix() {
        let out = tree_of("declare class A {}", false, true);
        assert!(out.starts_with("(program [0:0-0:18]"));
    }

    #[test]
    fn leaf_text_is_escaped() {
        let out = tree_of("declare const s: \"a\\\"b\";", false, false);
        assert!(out.contains("(escape_sequence \"\\\\\\\"\")"));
    }
}
