//! Declaration extraction: tree-sitter TypeScript syntax → `Library`.
//!
//! Only exported classes and interfaces accepted by the configuration are
//! kept. Members whose names start with `_` are dropped. Type syntax the IR
//! cannot express degrades to a name (see `types`).

mod decls;
mod docs;
mod members;
mod types;


use arborium_tree_sitter as tree_sitter;
use tree_sitter::{Language, Node, Parser, Tree};

use tsbind_core::Library;

use crate::config::Config;
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::source_map::{Source, SourceId, SourceMap};
use crate::{Error, Result};

/// Parse declaration text with the TypeScript grammar.
pub fn parse(text: &str, name: &str) -> Result<Tree> {
    let language: Language = arborium_typescript::language().into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Language(e.to_string()))?;
    parser.parse(text, None).ok_or_else(|| Error::Parse {
        path: name.to_string(),
    })
}

/// Extract every source into one library, in source order.
pub fn extract(
    sources: &SourceMap,
    config: &Config,
    diagnostics: &mut Diagnostics,
) -> Result<Library> {
    let mut library = Library::new();
    for source in sources.iter() {
        library.extend(extract_source(source, config, diagnostics)?);
    }
    Ok(library)
}

pub fn extract_source(
    source: Source<'_>,
    config: &Config,
    diagnostics: &mut Diagnostics,
) -> Result<Library> {
    let tree = parse(source.as_str(), source.display_name())?;
    let mut walker = Walker {
        config,
        diagnostics,
        source: source.id,
        text: source.as_str(),
        library: Library::new(),
    };

    let root = tree.root_node();
    if root.has_error() {
        walker.report_syntax_errors(root);
    }
    walker.visit(root);

    tracing::debug!(
        source = source.display_name(),
        classes = walker.library.classes.len(),
        interfaces = walker.library.interfaces.len(),
        "extracted declarations"
    );
    Ok(walker.library)
}

/// Per-source extraction state.
struct Walker<'a, 's> {
    config: &'a Config,
    diagnostics: &'a mut Diagnostics,
    source: SourceId,
    text: &'s str,
    library: Library,
}

impl<'a, 's> Walker<'a, 's> {
    fn visit(&mut self, node: Node<'_>) {
        match node.kind() {
            "class_declaration" | "abstract_class_declaration" => self.class(node),
            "interface_declaration" => self.interface(node),
            "program" | "export_statement" | "ambient_declaration" | "module"
            | "internal_module" | "statement_block" | "expression_statement" => {
                let mut cursor = node.walk();
                let children: Vec<_> = node.named_children(&mut cursor).collect();
                for child in children {
                    self.visit(child);
                }
            }
            _ => {}
        }
    }

    fn report_syntax_errors(&mut self, node: Node<'_>) {
        if node.is_error() {
            let span = self.span(node);
            self.diagnostics
                .report(DiagnosticKind::SyntaxError)
                .message("unexpected input")
                .span(span)
                .emit();
            return;
        }
        if node.is_missing() {
            let span = self.span(node);
            self.diagnostics
                .report(DiagnosticKind::SyntaxError)
                .message(format!("missing `{}`", node.kind()))
                .span(span)
                .emit();
            return;
        }
        if !node.has_error() {
            return;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children {
            self.report_syntax_errors(child);
        }
    }

    fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.text.as_bytes()).unwrap_or_default()
    }

    fn field_text(&self, node: Node<'_>, field: &str) -> Option<&'s str> {
        node.child_by_field_name(field).map(|n| self.text(n))
    }

    fn span(&self, node: Node<'_>) -> Span {
        Span::new(self.source, node.byte_range())
    }
}

/// Exported: wrapped in `export`, or sitting at the root of the file.
/// `declare` wrappers are looked through.
fn is_exported(node: Node<'_>) -> bool {
    let mut parent = node.parent();
    while let Some(p) = parent
        && p.kind() == "ambient_declaration"
    {
        parent = p.parent();
    }
    matches!(
        parent.map(|p| p.kind()),
        Some("export_statement" | "program")
    )
}

/// Anonymous keyword tokens directly under `node` (`static`, `get`, `readonly`, ...).
fn keywords(node: Node<'_>) -> Vec<&'static str> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|c| !c.is_named())
        .map(|c| c.kind())
        .collect()
}
