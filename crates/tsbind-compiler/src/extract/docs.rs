//! `/** ... */` documentation comments.

use arborium_tree_sitter::Node;

use super::Walker;

impl Walker<'_, '_> {
    /// Doc comment directly in front of `node`, or in front of the
    /// `export`/`declare` wrapper around it. Empty when there is none.
    pub(super) fn doc_comment(&self, node: Node<'_>) -> String {
        let mut anchor = node;
        while let Some(parent) = anchor.parent()
            && matches!(parent.kind(), "export_statement" | "ambient_declaration")
        {
            anchor = parent;
        }

        match anchor.prev_named_sibling() {
            Some(prev) if prev.kind() == "comment" => {
                let raw = self.text(prev);
                if raw.starts_with("/**") {
                    clean_doc(raw)
                } else {
                    String::new()
                }
            }
            _ => String::new(),
        }
    }
}

/// Strip comment markers and the leading `*` gutter.
pub(crate) fn clean_doc(raw: &str) -> String {
    let body = raw.strip_prefix("/**").unwrap_or(raw);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).trim_end(),
                None => line,
            }
        })
        .collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}
