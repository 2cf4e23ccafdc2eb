//! Fields become accessors; accessors demanded by interfaces are added.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use tsbind_core::{Class, Getter, Library, Property, Setter};

use super::generics::substitute_property;
use super::hierarchy::{ancestors, ancestors_first, implemented_interfaces};

/// Property names per class, recorded before `desugar` clears them.
#[derive(Debug, Default)]
pub(crate) struct PropertySnapshot {
    by_class: HashMap<String, HashSet<String>>,
}

impl PropertySnapshot {
    pub(crate) fn take(library: &Library) -> Self {
        let by_class = library
            .classes
            .iter()
            .map(|class| {
                let names = class.properties.iter().map(|p| p.name.clone()).collect();
                (class.name.clone(), names)
            })
            .collect();
        Self { by_class }
    }

    fn has(&self, class: &str, property: &str) -> bool {
        self.by_class
            .get(class)
            .is_some_and(|names| names.contains(property))
    }
}

/// Replace every class property with a getter and, unless read-only, a setter.
pub(crate) fn desugar(library: &mut Library) {
    for class in &mut library.classes {
        for property in std::mem::take(&mut class.properties) {
            class.getters.push(Getter::from(&property));
            if !property.is_readonly {
                class.setters.push(Setter::from(&property));
            }
        }
    }
}

struct Need {
    getter: bool,
    setter: bool,
    property: Property,
}

/// Add accessors for interface properties no level of the class provides.
pub(crate) fn add_missing(library: &mut Library, snapshot: &PropertySnapshot) {
    for idx in ancestors_first(library) {
        let needs = missing(library, &library.classes[idx], snapshot);
        let class = &mut library.classes[idx];
        for need in needs.into_values() {
            if need.getter {
                tracing::trace!(class = %class.name, getter = %need.property.name, "synthesized");
                class.getters.push(Getter::from(&need.property));
            }
            if need.setter {
                tracing::trace!(class = %class.name, setter = %need.property.name, "synthesized");
                class.setters.push(Setter::from(&need.property));
            }
        }
    }
}

fn missing(
    library: &Library,
    class: &Class,
    snapshot: &PropertySnapshot,
) -> IndexMap<String, Need> {
    let mut levels = vec![class];
    levels.extend(ancestors(library, class).into_iter().map(|a| a.class));

    let mut needs: IndexMap<String, Need> = IndexMap::new();
    for implemented in implemented_interfaces(library, class) {
        for property in &implemented.interface.properties {
            let name = property.name.as_str();
            let has_property = levels.iter().any(|c| snapshot.has(&c.name, name));
            let getter = !has_property && !levels.iter().any(|c| c.has_getter(name));
            let setter = !property.is_readonly
                && !has_property
                && !levels.iter().any(|c| c.has_setter(name));

            match needs.get_mut(name) {
                Some(need) => {
                    need.getter &= getter;
                    need.setter &= setter;
                }
                None => {
                    needs.insert(
                        property.name.clone(),
                        Need {
                            getter,
                            setter,
                            property: substitute_property(property, &implemented.bindings),
                        },
                    );
                }
            }
        }
    }
    needs
}
