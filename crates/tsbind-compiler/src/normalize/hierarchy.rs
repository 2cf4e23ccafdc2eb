//! Walks over the class and interface hierarchy.
//!
//! Every walk keeps a visited set, so cyclic `extends` declarations end the
//! walk instead of looping. Names that resolve to nothing contribute nothing;
//! `check_references` reports them once up front.

use std::collections::HashSet;

use tsbind_core::{Class, Interface, Library, NamedType};

use super::generics::{Bindings, bind};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// A class reached through the super chain, with its type parameters bound
/// relative to the class the walk started from.
pub(crate) struct Ancestor<'l> {
    pub(crate) class: &'l Class,
    pub(crate) bindings: Bindings,
}

/// An interface in a class's transitive interface set.
pub(crate) struct Implemented<'l> {
    pub(crate) interface: &'l Interface,
    pub(crate) bindings: Bindings,
}

/// Report heritage names missing from the library.
pub(crate) fn check_references(library: &Library, diagnostics: &mut Diagnostics) {
    for class in &library.classes {
        if let Some(super_type) = &class.super_type
            && library.class_by_name(&super_type.name).is_none()
        {
            diagnostics
                .report(DiagnosticKind::UnresolvedClass)
                .message(&super_type.name)
                .subject(&class.name)
                .emit();
        }
        for interface in &class.interfaces {
            if library.interface_by_name(&interface.name).is_none() {
                diagnostics
                    .report(DiagnosticKind::UnresolvedInterface)
                    .message(&interface.name)
                    .subject(&class.name)
                    .emit();
            }
        }
    }

    for interface in &library.interfaces {
        for super_type in &interface.super_types {
            // Interfaces may extend classes
            if library.interface_by_name(&super_type.name).is_none()
                && library.class_by_name(&super_type.name).is_none()
            {
                diagnostics
                    .report(DiagnosticKind::UnresolvedInterface)
                    .message(&super_type.name)
                    .subject(&interface.name)
                    .emit();
            }
        }
    }
}

/// Super classes of `class`, nearest first.
pub(crate) fn ancestors<'l>(library: &'l Library, class: &Class) -> Vec<Ancestor<'l>> {
    let mut result = Vec::new();
    let mut visited = HashSet::from([class.name.as_str()]);
    let mut next = class.super_type.as_ref();
    let mut bindings = Bindings::new();

    while let Some(super_type) = next {
        let Some(parent) = library.class_by_name(&super_type.name) else {
            break;
        };
        if !visited.insert(parent.name.as_str()) {
            break;
        }
        bindings = bind(&parent.type_params, &super_type.type_args, &bindings);
        next = parent.super_type.as_ref();
        result.push(Ancestor {
            class: parent,
            bindings: bindings.clone(),
        });
    }
    result
}

/// Interfaces implemented by `class` or any ancestor, plus everything those
/// interfaces extend. Deduplicated by name; the nearest instantiation wins.
pub(crate) fn implemented_interfaces<'l>(
    library: &'l Library,
    class: &Class,
) -> Vec<Implemented<'l>> {
    let mut result = Vec::new();
    let mut visited = HashSet::new();

    let own = Bindings::new();
    for named in &class.interfaces {
        collect_interface(library, named, &own, &mut visited, &mut result);
    }
    for ancestor in ancestors(library, class) {
        for named in &ancestor.class.interfaces {
            collect_interface(library, named, &ancestor.bindings, &mut visited, &mut result);
        }
    }
    result
}

fn collect_interface<'l>(
    library: &'l Library,
    named: &NamedType,
    outer: &Bindings,
    visited: &mut HashSet<String>,
    result: &mut Vec<Implemented<'l>>,
) {
    let Some(interface) = library.interface_by_name(&named.name) else {
        return;
    };
    if !visited.insert(interface.name.clone()) {
        return;
    }

    let bindings = bind(&interface.type_params, &named.type_args, outer);
    let index = result.len();
    result.push(Implemented { interface, bindings });
    for super_type in &interface.super_types {
        let bindings = result[index].bindings.clone();
        collect_interface(library, super_type, &bindings, visited, result);
    }
}

/// Class indices ordered so every class comes after its super classes.
pub(crate) fn ancestors_first(library: &Library) -> Vec<usize> {
    let mut placed = vec![false; library.classes.len()];
    let mut order = Vec::with_capacity(library.classes.len());

    for start in 0..library.classes.len() {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(start);
        while let Some(idx) = current {
            if placed[idx] || !seen.insert(idx) {
                break;
            }
            chain.push(idx);
            current = library.classes[idx]
                .super_type
                .as_ref()
                .and_then(|s| library.class_index(&s.name));
        }
        for idx in chain.into_iter().rev() {
            placed[idx] = true;
            order.push(idx);
        }
    }
    order
}
