//! Hoisting of structural literals into `@anonymous` classes.
//!
//! A literal's name is derived from where it occurs, so the scan below walks
//! members with exactly the scopes the renderer later uses.

use indexmap::IndexMap;

use tsbind_core::{Class, FunctionType, Scope, ScopeKind, Type, TypeLiteral};

use super::Emitter;
use super::emitter::CONSTRUCTOR_KEY;

/// Method name Dart uses for callable objects.
const CALL: &str = "call";

impl Emitter<'_> {
    /// Literals used by the emitted members of `class`, in first-visit order.
    pub(super) fn hoisted_literals(
        &self,
        class: &Class,
        scope: &Scope<'_>,
    ) -> IndexMap<String, TypeLiteral> {
        let mut found = IndexMap::new();

        if self.includes(class, CONSTRUCTOR_KEY) {
            for ctor in &class.constructors {
                for param in &ctor.parameters {
                    let param_scope = scope.child(ScopeKind::Parameter, &param.name);
                    collect(&param.ty, &param_scope, &mut found);
                }
            }
        }

        for getter in class.getters.iter().filter(|g| self.includes(class, &g.name)) {
            let getter_scope = scope.child(ScopeKind::Getter, &getter.name);
            collect(&getter.return_type, &getter_scope, &mut found);
        }

        for setter in class.setters.iter().filter(|s| self.includes(class, &s.name)) {
            let setter_scope = scope.child(ScopeKind::Setter, &setter.name);
            collect(&setter.parameter.ty, &setter_scope, &mut found);
        }

        for method in class.methods.iter().filter(|m| self.includes(class, &m.name)) {
            let method_scope = scope.child(ScopeKind::Method, &method.name);
            collect(&method.return_type, &method_scope.result(), &mut found);
            for param in &method.parameters {
                let param_scope = method_scope.child(ScopeKind::Parameter, &param.name);
                collect(&param.ty, &param_scope, &mut found);
            }
        }

        found
    }

    pub(super) fn emit_literal(&mut self, name: &str, literal: &TypeLiteral) {
        let root = Scope::root(ScopeKind::TypeLiteral, name);

        let fields: Vec<String> = literal
            .properties
            .iter()
            .map(|p| {
                let scope = root.child(ScopeKind::Property, &p.name);
                format!("{} {}", self.mapper.render(&p.ty, &scope), p.name)
            })
            .collect();

        self.line(0, "@JS()");
        self.line(0, "@anonymous");
        self.line(0, &format!("class {} {{", name));
        self.line(1, &format!("external factory {}({{{}}});", name, fields.join(", ")));

        for property in &literal.properties {
            let scope = root.child(ScopeKind::Property, &property.name);
            let ty = self.mapper.render(&property.ty, &scope);
            self.doc(1, &property.doc);
            self.line(1, &format!("external {} get {};", ty, property.name));
        }

        for signature in &literal.call_signatures {
            let call_scope = root.child(ScopeKind::Method, CALL);
            let Some(params) = self.render_params(name, CALL, &signature.parameters, &call_scope)
            else {
                continue;
            };
            let ret = self.mapper.render(&signature.return_type, &call_scope.result());
            self.line(1, &format!("external {} {}{};", ret, CALL, params));
        }

        self.line(0, "}");
    }
}

/// Record every literal reachable from `ty` under `scope`.
fn collect(ty: &Type, scope: &Scope<'_>, found: &mut IndexMap<String, TypeLiteral>) {
    match ty {
        Type::Named(named) => {
            for arg in &named.type_args {
                collect(arg, scope, found);
            }
        }
        Type::Function(function) => collect_signature(function, scope, found),
        Type::Literal(literal) => {
            let name = scope.literal_name();
            if found.contains_key(&name) {
                return;
            }
            found.insert(name.clone(), literal.clone());

            let root = Scope::root(ScopeKind::TypeLiteral, &name);
            for property in &literal.properties {
                let property_scope = root.child(ScopeKind::Property, &property.name);
                collect(&property.ty, &property_scope, found);
            }
            let call_scope = root.child(ScopeKind::Method, CALL);
            for signature in &literal.call_signatures {
                collect(&signature.return_type, &call_scope.result(), found);
                for param in &signature.parameters {
                    let param_scope = call_scope.child(ScopeKind::Parameter, &param.name);
                    collect(&param.ty, &param_scope, found);
                }
            }
        }
    }
}

/// Same frames as the renderer: one per parameter, one for the return type.
fn collect_signature(
    function: &FunctionType,
    scope: &Scope<'_>,
    found: &mut IndexMap<String, TypeLiteral>,
) {
    collect(&function.return_type, &scope.result(), found);
    for param in &function.parameters {
        let param_scope = scope.child(ScopeKind::Parameter, &param.name);
        collect(&param.ty, &param_scope, found);
    }
}
