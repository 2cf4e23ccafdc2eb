//! Dart emission.
//!
//! One unit per class: a `part of` header, the structural literals the class
//! uses (hoisted into `@anonymous` classes), then the class itself. Interfaces
//! are never emitted on their own.

mod emitter;
mod hoist;
mod output;
mod params;


pub use emitter::Emitter;
pub use output::{OutputUnit, write_units};
