#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for tsbind.
//!
//! Three layers:
//! - **Types**: the closed `Type` union and its building blocks
//! - **Declarations**: classes, interfaces and their members, gathered in a `Library`
//! - **Scopes**: transient naming context threaded through emission
//!
//! Nothing here knows about TypeScript syntax or Dart output; the compiler
//! crate fills these structures from tree-sitter and renders them.

mod decl;
mod library;
mod scope;
mod type_expr;
mod types;
pub mod utils;

#[cfg(test)]
mod library_tests;

pub use decl::{Class, Constructor, Getter, Interface, Method, Modifier, Setter};
pub use library::Library;
pub use scope::{Scope, ScopeKind};
pub use type_expr::{is_placeholder, parse_type_expr};
pub use types::{DYNAMIC, FunctionType, NamedType, Parameter, Property, SELF_TYPE, Type, TypeLiteral};
