//! Class and interface members.

use std::collections::HashSet;

use arborium_tree_sitter::Node;

use tsbind_core::utils::is_hidden;
use tsbind_core::{
    Class, Constructor, Getter, Interface, Method, Modifier, Parameter, Property, Setter, Type,
};

use super::{Walker, keywords};
use crate::diagnostics::DiagnosticKind;

const CONSTRUCTOR: &str = "constructor";

/// How a method-shaped member should be read.
enum Accessor {
    Get,
    Set,
    None,
}

impl Walker<'_, '_> {
    pub(super) fn class_body(&mut self, body: Node<'_>, class: &mut Class) {
        let mut seen = HashSet::new();
        let mut cursor = body.walk();
        let members: Vec<_> = body.named_children(&mut cursor).collect();

        for member in members {
            match member.kind() {
                "public_field_definition" => {
                    if let Some(property) = self.field_definition(member) {
                        class.properties.push(property);
                    }
                }
                "method_signature" | "abstract_method_signature" | "method_definition" => {
                    self.class_method(member, class, &mut seen);
                }
                _ => {}
            }
        }
    }

    fn class_method(&mut self, node: Node<'_>, class: &mut Class, seen: &mut HashSet<String>) {
        let Some(name) = self.field_text(node, "name") else {
            return;
        };
        if is_hidden(name) {
            return;
        }

        let keywords = keywords(node);
        let is_static = keywords.contains(&"static");
        let doc = self.doc_comment(node);
        let signature = self.signature(node);

        if name == CONSTRUCTOR {
            class.constructors.push(Constructor {
                parameters: signature.parameters,
                doc,
            });
            return;
        }

        match accessor_kind(&keywords) {
            Accessor::Get => class.getters.push(Getter {
                name: name.to_string(),
                return_type: *signature.return_type,
                is_static,
                doc,
            }),
            Accessor::Set => {
                let parameter = signature
                    .parameters
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| Parameter::new(name, Type::dynamic()));
                class.setters.push(Setter {
                    name: name.to_string(),
                    parameter,
                    is_static,
                    doc,
                });
            }
            Accessor::None => {
                if !self.first_overload(node, &class.name, name, seen) {
                    return;
                }
                class.methods.push(Method {
                    name: name.to_string(),
                    modifiers: self.modifiers(node, &keywords),
                    return_type: *signature.return_type,
                    parameters: signature.parameters,
                    doc,
                });
            }
        }
    }

    fn field_definition(&self, node: Node<'_>) -> Option<Property> {
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

    pub(super) fn interface_body(&mut self, body: Node<'_>, interface: &mut Interface) {
        let mut seen = HashSet::new();
        // Properties introduced by `get`/`set` signatures
        let mut accessors = HashSet::new();
        let mut cursor = body.walk();
        let members: Vec<_> = body.named_children(&mut cursor).collect();

        for member in members {
            match member.kind() {
                "property_signature" => {
                    if let Some(property) = self.property_signature(member) {
                        interface.properties.push(property);
                    }
                }
                "method_signature" => {
                    let Some(name) = self.field_text(member, "name") else {
                        continue;
                    };
                    if is_hidden(name) {
                        continue;
                    }
                    let keywords = keywords(member);
                    match accessor_kind(&keywords) {
                        Accessor::Get | Accessor::Set => {
                            self.fold_accessor(member, name, &keywords, interface, &mut accessors);
                        }
                        Accessor::None => {
                            if !self.first_overload(member, &interface.name, name, &mut seen) {
                                continue;
                            }
                            let signature = self.signature(member);
                            interface.methods.push(Method {
                                name: name.to_string(),
                                modifiers: self.modifiers(member, &keywords),
                                return_type: *signature.return_type,
                                parameters: signature.parameters,
                                doc: self.doc_comment(member),
                            });
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// `get x(): T` / `set x(v: T)` in an interface become one property `x`,
    /// read-only until a setter shows up.
    fn fold_accessor(
        &self,
        node: Node<'_>,
        name: &str,
        keywords: &[&str],
        interface: &mut Interface,
        accessors: &mut HashSet<String>,
    ) {
        let is_setter = matches!(accessor_kind(keywords), Accessor::Set);

        if accessors.contains(name) {
            if is_setter
                && let Some(property) = interface.properties.iter_mut().find(|p| p.name == name)
            {
                property.is_readonly = false;
            }
            return;
        }

        let signature = self.signature(node);
        let ty = if is_setter {
            signature
                .parameters
                .into_iter()
                .next()
                .map(|p| p.ty)
                .unwrap_or_else(Type::dynamic)
        } else {
            *signature.return_type
        };

        accessors.insert(name.to_string());
        interface.properties.push(Property {
            name: name.to_string(),
            ty,
            is_static: keywords.contains(&"static"),
            is_readonly: !is_setter,
            doc: self.doc_comment(node),
        });
    }

    /// Records `name` and reports later signatures of the same method.
    fn first_overload(
        &mut self,
        node: Node<'_>,
        owner: &str,
        name: &str,
        seen: &mut HashSet<String>,
    ) -> bool {
        if seen.insert(name.to_string()) {
            return true;
        }
        let span = self.span(node);
        self.diagnostics
            .report(DiagnosticKind::OverloadDropped)
            .message(format!("{}.{}", owner, name))
            .subject(owner)
            .span(span)
            .emit();
        false
    }

    fn modifiers(&self, node: Node<'_>, keywords: &[&str]) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "override_modifier"
                && let Some(modifier) = Modifier::from_keyword(self.text(child))
            {
                modifiers.push(modifier);
            }
        }
        modifiers.extend(keywords.iter().filter_map(|k| Modifier::from_keyword(k)));
        modifiers
    }
}

fn accessor_kind(keywords: &[&str]) -> Accessor {
    if keywords.contains(&"get") {
        Accessor::Get
    } else if keywords.contains(&"set") {
        Accessor::Set
    } else {
        Accessor::None
    }
}
