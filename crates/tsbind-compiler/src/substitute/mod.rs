//! Pattern-based type rewriting.
//!
//! Each rule pairs a pattern (`Array<#1>`) with a template (`List<#1>`).
//! A candidate matching a pattern is rewritten by rendering the types bound
//! to each placeholder into the template and parsing the result back.

mod render;

#[cfg(test)]
mod substitute_tests;

use indexmap::IndexMap;
use regex_automata::meta::Regex;

use tsbind_core::{NamedType, Scope, Type, is_placeholder, parse_type_expr};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::{Error, Result};

const PLACEHOLDER_TOKEN: &str = r"#[0-9]+";

#[derive(Debug, Clone)]
struct Rule {
    pattern: NamedType,
    template: String,
}

/// Ordered rewrite table. The first matching rule wins.
#[derive(Debug)]
pub struct TypeMapper {
    rules: Vec<Rule>,
    tokens: Regex,
}

impl TypeMapper {
    /// Parse the replacement table once.
    ///
    /// Template tokens without a counterpart in their pattern are reported and
    /// stay verbatim in the output.
    pub fn new(replacements: &IndexMap<String, String>, diagnostics: &mut Diagnostics) -> Result<Self> {
        let tokens =
            Regex::new(PLACEHOLDER_TOKEN).map_err(|e| Error::Pattern(e.to_string()))?;

        let mut rules = Vec::with_capacity(replacements.len());
        for (pattern, template) in replacements {
            let pattern = parse_type_expr(pattern);
            if is_placeholder(&pattern.name) {
                // `#1` alone would match, and rewrite, every type
                tracing::warn!(pattern = %pattern.name, "ignoring catch-all type replacement");
                continue;
            }

            for m in tokens.find_iter(template.as_str()) {
                let token = &template[m.range()];
                if !occurs_in(&pattern, token) {
                    diagnostics
                        .report(DiagnosticKind::UnresolvedPlaceholder)
                        .message(token)
                        .subject(template.as_str())
                        .emit();
                }
            }

            rules.push(Rule {
                pattern,
                template: template.clone(),
            });
        }

        Ok(Self { rules, tokens })
    }

    /// Mapper without rules: every type renders as written.
    pub fn identity() -> Result<Self> {
        Self::new(&IndexMap::new(), &mut Diagnostics::new())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply the first matching rule. Non-named types and misses come back unchanged.
    pub fn replace(&self, ty: &Type, scope: &Scope<'_>) -> Type {
        match ty {
            Type::Named(candidate) => self
                .rewrite(candidate, scope)
                .map_or_else(|| ty.clone(), Type::Named),
            Type::Function(_) | Type::Literal(_) => ty.clone(),
        }
    }

    /// The first matching rule's template with its bound types filled in, or
    /// `None` when no rule matches.
    ///
    /// The result is final: it is never matched against the table again.
    fn rewrite(&self, candidate: &NamedType, scope: &Scope<'_>) -> Option<NamedType> {
        let rule = self
            .rules
            .iter()
            .find(|rule| is_matching(candidate, &rule.pattern))?;

        let bound_to = Type::Named(candidate.clone());
        let mut rewritten = String::with_capacity(rule.template.len());
        let mut last = 0;
        for m in self.tokens.find_iter(rule.template.as_str()) {
            let token = &rule.template[m.range()];
            rewritten.push_str(&rule.template[last..m.start()]);
            match type_of_placeholder(&bound_to, &rule.pattern, token) {
                Some(bound) => rewritten.push_str(&self.render(bound, scope)),
                None => rewritten.push_str(token),
            }
            last = m.end();
        }
        rewritten.push_str(&rule.template[last..]);

        let mut result = parse_type_expr(&rewritten);
        result.is_array = candidate.is_array;
        Some(result)
    }
}

/// Structural match of a candidate against a pattern.
///
/// A placeholder on either side matches anything. Array-ness is not compared.
pub fn is_matching(candidate: &NamedType, pattern: &NamedType) -> bool {
    if is_placeholder(&candidate.name) || is_placeholder(&pattern.name) {
        return true;
    }
    if candidate.name != pattern.name || candidate.type_args.len() != pattern.type_args.len() {
        return false;
    }
    candidate
        .type_args
        .iter()
        .zip(&pattern.type_args)
        .all(|(c, p)| match (c, p) {
            (Type::Named(c), Type::Named(p)) => is_matching(c, p),
            (_, Type::Named(p)) => is_placeholder(&p.name),
            _ => false,
        })
}

/// The part of `candidate` sitting where `placeholder` sits in `pattern`.
pub fn type_of_placeholder<'t>(
    candidate: &'t Type,
    pattern: &NamedType,
    placeholder: &str,
) -> Option<&'t Type> {
    if pattern.name == placeholder {
        return Some(candidate);
    }
    let Type::Named(candidate) = candidate else {
        return None;
    };
    candidate
        .type_args
        .iter()
        .zip(&pattern.type_args)
        .find_map(|(arg, pat)| match pat {
            Type::Named(pat) => type_of_placeholder(arg, pat, placeholder),
            Type::Function(_) | Type::Literal(_) => None,
        })
}

fn occurs_in(pattern: &NamedType, token: &str) -> bool {
    pattern.name == token
        || pattern.type_args.iter().any(|arg| match arg {
            Type::Named(arg) => occurs_in(arg, token),
            Type::Function(_) | Type::Literal(_) => false,
        })
}
