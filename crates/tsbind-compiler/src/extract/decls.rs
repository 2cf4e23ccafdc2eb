//! Top-level declarations: classes and interfaces with their heritage.

use arborium_tree_sitter::Node;

use tsbind_core::utils::is_hidden;
use tsbind_core::{Class, Interface, NamedType, Type};

use super::{Walker, is_exported};

impl Walker<'_, '_> {
    /// Name of a top-level declaration when it passes the hidden, inclusion
    /// and export rules.
    fn accepted_name(&self, node: Node<'_>) -> Option<String> {
        let name = self.field_text(node, "name")?;
        if is_hidden(name) || !self.config.include_top_level(name) || !is_exported(node) {
            tracing::trace!(name, "skipping declaration");
            return None;
        }
        Some(name.to_string())
    }

    pub(super) fn class(&mut self, node: Node<'_>) {
        let Some(name) = self.accepted_name(node) else {
            return;
        };

        let mut class = Class::new(name);
        class.is_abstract = node.kind() == "abstract_class_declaration";
        class.type_params = self.type_params(node);
        class.doc = self.doc_comment(node);

        let mut cursor = node.walk();
        let heritage: Vec<_> = node
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "class_heritage")
            .collect();
        for heritage in heritage {
            let mut cursor = heritage.walk();
            for clause in heritage.named_children(&mut cursor) {
                match clause.kind() {
                    "extends_clause" => class.super_type = self.extends_clause(clause),
                    "implements_clause" => class.interfaces = self.named_list(clause),
                    _ => {}
                }
            }
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.class_body(body, &mut class);
        }

        tracing::debug!(class = %class.name, "extracted class");
        self.library.classes.push(class);
    }

    pub(super) fn interface(&mut self, node: Node<'_>) {
        let Some(name) = self.accepted_name(node) else {
            return;
        };

        let mut interface = Interface::new(name);
        interface.type_params = self.type_params(node);
        interface.doc = self.doc_comment(node);

        let mut cursor = node.walk();
        let clause = node
            .named_children(&mut cursor)
            .find(|n| n.kind() == "extends_type_clause");
        if let Some(clause) = clause {
            interface.super_types = self.named_list(clause);
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.interface_body(body, &mut interface);
        }

        tracing::debug!(interface = %interface.name, "extracted interface");
        self.library.interfaces.push(interface);
    }

    fn type_params(&self, node: Node<'_>) -> Vec<String> {
        let Some(params) = node.child_by_field_name("type_parameters") else {
            return Vec::new();
        };
        let mut cursor = params.walk();
        params
            .named_children(&mut cursor)
            .filter(|p| p.kind() == "type_parameter")
            .filter_map(|p| self.field_text(p, "name"))
            .map(str::to_string)
            .collect()
    }

    /// `extends Base<T>`: the value expression names the class, type arguments follow it.
    fn extends_clause(&self, clause: Node<'_>) -> Option<NamedType> {
        let value = clause.child_by_field_name("value")?;
        let args = clause
            .child_by_field_name("type_arguments")
            .map(|args| self.type_arguments(args))
            .unwrap_or_default();
        Some(NamedType::new(self.text(value)).with_args(args))
    }

    /// Named types listed in an `implements` or interface `extends` clause.
    fn named_list(&self, clause: Node<'_>) -> Vec<NamedType> {
        let mut cursor = clause.walk();
        clause
            .named_children(&mut cursor)
            .filter(|n| n.kind() != "comment")
            .filter_map(|n| match self.parse_type(n) {
                Type::Named(named) => Some(named),
                Type::Function(_) | Type::Literal(_) => None,
            })
            .collect()
    }
}
