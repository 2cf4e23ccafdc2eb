//! Type syntax → `Type`.
//!
//! Lossy on purpose: unions collapse to `dynamic`, arrays of non-named
//! element types lose the array wrapper, and anything unrecognized keeps its
//! source text as a name.

use arborium_tree_sitter::Node;

use tsbind_core::utils::is_hidden;
use tsbind_core::{
    DYNAMIC, FunctionType, NamedType, Parameter, Property, SELF_TYPE, Type, TypeLiteral,
};

use super::{Walker, keywords};

const PREDICATE_TYPE: &str = "boolean";

impl Walker<'_, '_> {
    pub(super) fn parse_type(&self, node: Node<'_>) -> Type {
        match node.kind() {
            "type_identifier" | "predefined_type" | "nested_type_identifier" => {
                Type::named(self.text(node))
            }
            "generic_type" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| self.text(n))
                    .unwrap_or_default();
                let args = node
                    .child_by_field_name("type_arguments")
                    .map(|args| self.type_arguments(args))
                    .unwrap_or_default();
                Type::Named(NamedType::new(name).with_args(args))
            }
            "array_type" => {
                let Some(element) = node.named_child(0) else {
                    return Type::named(self.text(node));
                };
                match self.parse_type(element) {
                    Type::Named(named) => Type::Named(named.array()),
                    other => other,
                }
            }
            "object_type" => Type::Literal(self.type_literal(node)),
            "function_type" => Type::Function(self.signature(node)),
            "union_type" => Type::named(DYNAMIC),
            "parenthesized_type" | "readonly_type" => match node.named_child(0) {
                Some(inner) => self.parse_type(inner),
                None => Type::named(self.text(node)),
            },
            "this_type" => Type::named(SELF_TYPE),
            "type_predicate" => Type::named(PREDICATE_TYPE),
            _ => Type::named(self.text(node)),
        }
    }

    /// Type under a `type_annotation` (`: T`). No annotation means `dynamic`.
    pub(super) fn annotation_type(&self, annotation: Option<Node<'_>>) -> Type {
        let Some(annotation) = annotation else {
            return Type::dynamic();
        };
        match annotation.kind() {
            "type_annotation" => match annotation.named_child(0) {
                Some(ty) => self.parse_type(ty),
                None => Type::dynamic(),
            },
            "type_predicate_annotation" => Type::named(PREDICATE_TYPE),
            "asserts_annotation" => Type::named("void"),
            _ => self.parse_type(annotation),
        }
    }

    pub(super) fn type_arguments(&self, node: Node<'_>) -> Vec<Type> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|n| n.kind() != "comment")
            .map(|n| self.parse_type(n))
            .collect()
    }

    /// Parameters and return type of anything shaped like a call signature.
    pub(super) fn signature(&self, node: Node<'_>) -> FunctionType {
        let parameters = node
            .child_by_field_name("parameters")
            .map(|p| self.parameters(p))
            .unwrap_or_default();
        FunctionType::new(
            self.annotation_type(node.child_by_field_name("return_type")),
            parameters,
        )
    }

    pub(super) fn parameters(&self, node: Node<'_>) -> Vec<Parameter> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|n| matches!(n.kind(), "required_parameter" | "optional_parameter"))
            .filter_map(|n| self.parameter(n))
            .collect()
    }

    fn parameter(&self, node: Node<'_>) -> Option<Parameter> {
        let pattern = node.child_by_field_name("pattern")?;
        let (name, is_rest) = if pattern.kind() == "rest_pattern" {
            let inner = pattern.named_child(0)?;
            (self.text(inner), true)
        } else {
            (self.text(pattern), false)
        };

        // `this: T` only types the receiver
        if name == "this" {
            return None;
        }

        let optional = node.kind() == "optional_parameter"
            || node.child_by_field_name("value").is_some()
            || is_rest;

        Some(Parameter {
            name: name.to_string(),
            ty: self.annotation_type(node.child_by_field_name("type")),
            optional,
            doc: String::new(),
        })
    }

    pub(super) fn type_literal(&self, node: Node<'_>) -> TypeLiteral {
        let mut literal = TypeLiteral::default();
        let mut cursor = node.walk();
        for member in node.named_children(&mut cursor) {
            match member.kind() {
                "property_signature" => {
                    if let Some(property) = self.property_signature(member) {
                        literal.properties.push(property);
                    }
                }
                "method_signature" => {
                    let Some(name) = self.field_text(member, "name") else {
                        continue;
                    };
                    if is_hidden(name) {
                        continue;
                    }
                    let mut property = Property::new(name, Type::Function(self.signature(member)));
                    property.doc = self.doc_comment(member);
                    literal.properties.push(property);
                }
                "call_signature" => literal.call_signatures.push(self.signature(member)),
                _ => {}
            }
        }
        literal
    }

    pub(super) fn property_signature(&self, node: Node<'_>) -> Option<Property> {
        let name = self.field_text(node, "name")?;
        if is_hidden(name) {
            return None;
        }
        let keywords = keywords(node);
        Some(Property {
            name: name.to_string(),
            ty: self.annotation_type(node.child_by_field_name("type")),
            is_static: keywords.contains(&"static"),
            is_readonly: keywords.contains(&"readonly"),
            doc: self.doc_comment(node),
        })
    }
}
