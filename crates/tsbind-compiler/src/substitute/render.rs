//! Dart spelling of type expressions.

use tsbind_core::{FunctionType, NamedType, SELF_TYPE, Scope, ScopeKind, Type};

use super::TypeMapper;

impl TypeMapper {
    /// Render a type as Dart source, rewriting it first.
    ///
    /// Literals render as the name derived from `scope`; callers hoist them
    /// under the same scope so the reference and the declaration agree.
    pub fn render(&self, ty: &Type, scope: &Scope<'_>) -> String {
        match ty {
            Type::Named(named) => match self.rewrite(named, scope) {
                Some(rewritten) => self.render_named(&rewritten, scope, false),
                None => self.render_named(named, scope, true),
            },
            Type::Function(function) => self.render_function(function, scope),
            Type::Literal(_) => scope.literal_name(),
        }
    }

    /// `rewrite_args` is off for rewritten types: their arguments are
    /// template text and already rendered.
    fn render_named(&self, named: &NamedType, scope: &Scope<'_>, rewrite_args: bool) -> String {
        let mut out = String::new();
        if named.is_array {
            out.push_str("List<");
        }

        match scope.enclosing_class() {
            Some(class) if named.name == SELF_TYPE => out.push_str(class),
            _ => out.push_str(&named.name),
        }

        if !named.type_args.is_empty() {
            out.push('<');
            let args: Vec<String> = named
                .type_args
                .iter()
                .map(|arg| match arg {
                    Type::Named(arg) if !rewrite_args => self.render_named(arg, scope, false),
                    _ => self.render(arg, scope),
                })
                .collect();
            out.push_str(&args.join(", "));
            out.push('>');
        }

        if named.is_array {
            out.push('>');
        }
        out
    }

    /// Parameters and the return type get their own frames, so literals in
    /// different positions of one signature keep distinct names.
    fn render_function(&self, function: &FunctionType, scope: &Scope<'_>) -> String {
        let params: Vec<String> = function
            .parameters
            .iter()
            .map(|p| {
                let param_scope = scope.child(ScopeKind::Parameter, &p.name);
                format!("{} {}", self.render(&p.ty, &param_scope), p.name)
            })
            .collect();
        format!(
            "{} Function({})",
            self.render(&function.return_type, &scope.result()),
            params.join(", ")
        )
    }
}
