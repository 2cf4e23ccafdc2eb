//! Parameter lists with a trailing optional group.

use tsbind_core::{Parameter, Scope, ScopeKind};

use super::Emitter;
use crate::diagnostics::DiagnosticKind;

impl Emitter<'_> {
    /// `(A a, [B b, C c])`, or `None` when the optional parameters are not a
    /// trailing run. The rejection is reported as an error.
    pub(super) fn render_params(
        &mut self,
        owner: &str,
        member: &str,
        params: &[Parameter],
        scope: &Scope<'_>,
    ) -> Option<String> {
        let Some(split) = optional_split(params) else {
            self.diagnostics
                .report(DiagnosticKind::InvalidOptionalParameters)
                .message(format!("{}.{}", owner, member))
                .subject(owner)
                .emit();
            return None;
        };

        let rendered: Vec<String> = params
            .iter()
            .map(|p| {
                let param_scope = scope.child(ScopeKind::Parameter, &p.name);
                format!("{} {}", self.mapper.render(&p.ty, &param_scope), p.name)
            })
            .collect();

        let (required, optional) = rendered.split_at(split);
        let mut parts = required.to_vec();
        if !optional.is_empty() {
            parts.push(format!("[{}]", optional.join(", ")));
        }
        Some(format!("({})", parts.join(", ")))
    }
}

/// Index where the optional run starts (`len` when there is none), or `None`
/// when a required parameter follows an optional one.
pub(super) fn optional_split(params: &[Parameter]) -> Option<usize> {
    let first = params
        .iter()
        .position(|p| p.optional)
        .unwrap_or(params.len());
    params[first..]
        .iter()
        .all(|p| p.optional)
        .then_some(first)
}
