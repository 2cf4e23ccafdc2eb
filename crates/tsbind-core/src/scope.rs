//! Naming context for emission.
//!
//! A `Scope` is a borrowed cons-list: each frame points at its parent on the
//! caller's stack. Frames are created per rendering call and never stored.

use crate::utils::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Class,
    Method,
    /// Return position of the enclosing method.
    Result,
    Parameter,
    Property,
    Getter,
    Setter,
    /// Root frame of a hoisted literal, named after it.
    TypeLiteral,
}

#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    kind: ScopeKind,
    name: &'a str,
}

/// Frame name used for return positions.
const RESULT_FRAME: &str = "Result";

impl<'a> Scope<'a> {
    /// Outermost frame.
    pub fn root(kind: ScopeKind, name: &'a str) -> Self {
        Self {
            parent: None,
            kind,
            name,
        }
    }

    /// Frame nested inside `self`.
    pub fn child(&'a self, kind: ScopeKind, name: &'a str) -> Scope<'a> {
        Scope {
            parent: Some(self),
            kind,
            name,
        }
    }

    /// Return-position frame for a method scope.
    pub fn result(&'a self) -> Scope<'a> {
        self.child(ScopeKind::Result, RESULT_FRAME)
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn parent(&self) -> Option<&'a Scope<'a>> {
        self.parent
    }

    /// Nearest frame (including `self`) of the given kind.
    pub fn first_of_kind(&self, kind: ScopeKind) -> Option<&Scope<'a>> {
        let mut current = Some(self);
        while let Some(scope) = current {
            if scope.kind == kind {
                return Some(scope);
            }
            current = scope.parent;
        }
        None
    }

    /// Name of the nearest enclosing class.
    pub fn enclosing_class(&self) -> Option<&'a str> {
        self.first_of_kind(ScopeKind::Class).map(|s| s.name)
    }

    /// Name for a literal found at this position: capitalized frame names, outer to inner.
    ///
    /// A pure function of the path, so the same position always yields the same name.
    pub fn literal_name(&self) -> String {
        let mut frames = Vec::new();
        let mut current = Some(self);
        while let Some(scope) = current {
            frames.push(scope.name);
            current = scope.parent;
        }
        frames.iter().rev().map(|name| capitalize(name)).collect()
    }
}
