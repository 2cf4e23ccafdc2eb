//! Constructor inheritance.
//!
//! A declaration without constructors copies its super class's constructor
//! when that class has exactly one and it takes parameters.

use tsbind_core::{Class, Constructor, Library, NamedType};

use super::hierarchy::ancestors_first;

pub(crate) fn inherit(library: &mut Library) {
    for idx in ancestors_first(library) {
        let class = &library.classes[idx];
        if !class.constructors.is_empty() {
            continue;
        }
        let Some(inherited) = class
            .super_type
            .as_ref()
            .and_then(|super_type| inheritable(library, super_type))
        else {
            continue;
        };
        tracing::trace!(class = %class.name, "inherited constructor");
        library.classes[idx].constructors.push(inherited);
    }

    for idx in 0..library.interfaces.len() {
        let interface = &library.interfaces[idx];
        if !interface.constructors.is_empty() {
            continue;
        }
        let Some(inherited) = interface
            .super_types
            .iter()
            .find_map(|super_type| inheritable(library, super_type))
        else {
            continue;
        };
        library.interfaces[idx].constructors.push(inherited);
    }
}

/// The single, non-empty constructor of the class `super_type` names, as declared.
fn inheritable(library: &Library, super_type: &NamedType) -> Option<Constructor> {
    let parent: &Class = library.class_by_name(&super_type.name)?;
    let [ctor] = parent.constructors.as_slice() else {
        return None;
    };
    if ctor.parameters.is_empty() {
        return None;
    }
    Some(ctor.clone())
}
