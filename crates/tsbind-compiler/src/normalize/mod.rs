//! IR repair passes between extraction and emission.
//!
//! Passes run in a fixed order:
//! 1. `desugar` - class properties → getters/setters
//! 2. `add_missing` - accessors demanded by implemented interfaces
//! 3. `inherit` - constructors copied from a single-constructor super class
//! 4. `unify` - overriding methods take the overridden parameter lists
//!
//! Class-level passes visit super classes before their subclasses.

mod accessors;
mod constructors;
mod generics;
mod hierarchy;
mod overrides;


use tsbind_core::Library;

use crate::diagnostics::Diagnostics;

pub fn normalize(library: &mut Library, diagnostics: &mut Diagnostics) {
    hierarchy::check_references(library, diagnostics);

    // Presence checks in `add_missing` look at properties as declared
    let snapshot = accessors::PropertySnapshot::take(library);

    accessors::desugar(library);
    tracing::debug!("desugared properties");

    accessors::add_missing(library, &snapshot);
    tracing::debug!("added missing accessors");

    constructors::inherit(library);
    tracing::debug!("inherited constructors");

    overrides::unify(library);
    tracing::debug!("unified overrides");
}
