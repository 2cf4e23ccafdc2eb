//! Override-signature unification.
//!
//! Dart requires an override to accept what the overridden member accepts.
//! Methods redeclared from an interface take over its parameters instantiated
//! for this class; methods redeclared from a super class take the ancestor's
//! parameters as declared.

use tsbind_core::{Class, Library, Parameter};

use super::generics::substitute_params;
use super::hierarchy::{ancestors, ancestors_first, implemented_interfaces};

pub(crate) fn unify(library: &mut Library) {
    for idx in ancestors_first(library) {
        let unified = unified_parameters(library, &library.classes[idx]);
        let class = &mut library.classes[idx];
        for (method, parameters) in class.methods.iter_mut().zip(unified) {
            if let Some(parameters) = parameters {
                tracing::trace!(class = %class.name, method = %method.name, "unified override");
                method.parameters = parameters;
            }
        }
    }
}

/// New parameter list per method, `None` where nothing is overridden.
fn unified_parameters(library: &Library, class: &Class) -> Vec<Option<Vec<Parameter>>> {
    let interfaces = implemented_interfaces(library, class);
    let ancestors = ancestors(library, class);

    class
        .methods
        .iter()
        .map(|method| {
            let mut parameters = None;
            for implemented in &interfaces {
                if let Some(declared) = implemented.interface.method(&method.name) {
                    parameters = Some(substitute_params(
                        &declared.parameters,
                        &implemented.bindings,
                    ));
                }
            }
            // Nearest first, so the topmost ancestor is written last and wins
            for ancestor in &ancestors {
                if let Some(declared) = ancestor.class.method(&method.name) {
                    parameters = Some(declared.parameters.clone());
                }
            }
            parameters
        })
        .collect()
}
