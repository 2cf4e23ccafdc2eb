//! Core emitter struct and class rendering.

use tsbind_core::utils::unit_file_name;
use tsbind_core::{Class, Library, Scope, ScopeKind};

use super::OutputUnit;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::substitute::TypeMapper;

/// Member key the configuration uses for constructors.
pub(super) const CONSTRUCTOR_KEY: &str = "constructor";

const INDENT: &str = "  ";

/// Dart emitter for a normalized library.
pub struct Emitter<'a> {
    pub(super) config: &'a Config,
    pub(super) mapper: &'a TypeMapper,
    pub(super) diagnostics: &'a mut Diagnostics,
    /// Output buffer for the unit being built
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config, mapper: &'a TypeMapper, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            config,
            mapper,
            diagnostics,
            output: String::new(),
        }
    }

    /// One unit per class, in library order.
    pub fn emit_library(&mut self, library: &Library) -> Vec<OutputUnit> {
        library
            .classes
            .iter()
            .map(|class| self.emit_class(class))
            .collect()
    }

    pub fn emit_class(&mut self, class: &Class) -> OutputUnit {
        self.output.clear();
        let scope = Scope::root(ScopeKind::Class, &class.name);

        let header = format!("part of {};", self.config.library_name);
        self.line(0, &header);

        for (name, literal) in self.hoisted_literals(class, &scope) {
            self.output.push('\n');
            self.emit_literal(&name, &literal);
        }

        self.output.push('\n');
        self.doc(0, &class.doc);
        self.line(0, "@JS()");
        self.emit_class_header(class, &scope);

        for ctor in &class.constructors {
            if !self.includes(class, CONSTRUCTOR_KEY) {
                continue;
            }
            let Some(params) =
                self.render_params(&class.name, CONSTRUCTOR_KEY, &ctor.parameters, &scope)
            else {
                continue;
            };
            self.doc(1, &ctor.doc);
            self.line(1, &format!("external {}{};", class.name, params));
        }

        for getter in &class.getters {
            if !self.includes(class, &getter.name) {
                continue;
            }
            let getter_scope = scope.child(ScopeKind::Getter, &getter.name);
            let ty = self.mapper.render(&getter.return_type, &getter_scope);
            self.doc(1, &getter.doc);
            self.line(
                1,
                &format!("external {}{} get {};", static_prefix(getter.is_static), ty, getter.name),
            );
        }

        for setter in &class.setters {
            if !self.includes(class, &setter.name) {
                continue;
            }
            let setter_scope = scope.child(ScopeKind::Setter, &setter.name);
            let ty = self.mapper.render(&setter.parameter.ty, &setter_scope);
            self.doc(1, &setter.doc);
            self.line(
                1,
                &format!(
                    "external {}set {}({} {});",
                    static_prefix(setter.is_static),
                    setter.name,
                    ty,
                    setter.parameter.name
                ),
            );
        }

        for method in &class.methods {
            if !self.includes(class, &method.name) {
                continue;
            }
            let method_scope = scope.child(ScopeKind::Method, &method.name);
            let Some(params) =
                self.render_params(&class.name, &method.name, &method.parameters, &method_scope)
            else {
                continue;
            };
            let ret = self.mapper.render(&method.return_type, &method_scope.result());
            self.doc(1, &method.doc);
            self.line(
                1,
                &format!(
                    "external {}{} {}{};",
                    static_prefix(method.is_static()),
                    ret,
                    method.name,
                    params
                ),
            );
        }

        self.line(0, "}");

        tracing::debug!(class = %class.name, "emitted class");
        OutputUnit {
            file_name: unit_file_name(&class.name),
            content: std::mem::take(&mut self.output),
        }
    }

    fn emit_class_header(&mut self, class: &Class, scope: &Scope<'_>) {
        let mut header = String::new();
        if class.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str("class ");
        header.push_str(&class.name);
        if !class.type_params.is_empty() {
            header.push_str(&format!("<{}>", class.type_params.join(", ")));
        }
        if let Some(super_type) = &class.super_type {
            let rendered = self.mapper.render(&super_type.clone().into(), scope);
            header.push_str(" extends ");
            header.push_str(&rendered);
        }
        header.push_str(" {");
        self.line(0, &header);
    }

    pub(super) fn includes(&self, class: &Class, member: &str) -> bool {
        self.config.include_member(&class.name, member)
    }

    pub(super) fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Documentation as `///` lines.
    pub(super) fn doc(&mut self, depth: usize, doc: &str) {
        if doc.is_empty() {
            return;
        }
        for line in doc.lines() {
            if line.is_empty() {
                self.line(depth, "///");
            } else {
                self.line(depth, &format!("/// {}", line));
            }
        }
    }
}

fn static_prefix(is_static: bool) -> &'static str {
    if is_static { "static " } else { "" }
}
