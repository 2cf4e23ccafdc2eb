//! Parser for the small type-expression language used in configuration.
//!
//! Grammar: `name ('<' expr (',' expr)* '>')? ('[]')?`. Names are taken
//! verbatim, so placeholders (`#1`) and dotted names pass through unchanged.

use crate::types::{NamedType, Type};

/// Whether a type name is a pattern placeholder (`#1`, `#2`, ...).
pub fn is_placeholder(name: &str) -> bool {
    name.starts_with('#')
}

/// Parse a type expression such as `Map<string, Array<#1>>[]`.
///
/// Never fails: text that does not fit the grammar becomes a bare name.
pub fn parse_type_expr(input: &str) -> NamedType {
    let mut text = input.trim();

    let is_array = text.ends_with("[]");
    if is_array {
        text = text[..text.len() - 2].trim_end();
    }

    let (name, type_args) = match text.find('<') {
        Some(open) if text.ends_with('>') => {
            let inner = &text[open + 1..text.len() - 1];
            let args = split_top_level(inner)
                .into_iter()
                .filter(|arg| !arg.trim().is_empty())
                .map(|arg| Type::Named(parse_type_expr(arg)))
                .collect();
            (text[..open].trim(), args)
        }
        _ => (text, Vec::new()),
    };

    NamedType {
        name: name.to_string(),
        type_args,
        is_array,
    }
}

/// Split on commas that are not nested inside angle brackets.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}
