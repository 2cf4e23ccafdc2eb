//! tsbind compiler: TypeScript declarations in, Dart `package:js` bindings out.
//!
//! This crate provides the generation pipeline:
//! - `extract` - tree-sitter syntax tree → `Library`
//! - `normalize` - IR repair passes (accessors, constructors, overrides)
//! - `substitute` - pattern-based type rewriting and type rendering
//! - `emit` - Dart source units, one per class
//! - `diagnostics` - error and warning reporting
//! - `generator` - high-level `Generator` facade tying the stages together

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod extract;
pub mod generator;
pub mod normalize;
pub mod source_map;
pub mod substitute;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod generator_tests;
#[cfg(test)]
pub mod test_utils;

use std::path::PathBuf;

pub use config::{Config, MemberFilter};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity, Span};
pub use emit::OutputUnit;
pub use generator::{Emitted, Extracted, Generator, Normalized};
pub use substitute::TypeMapper;
pub use source_map::{SourceId, SourceMap};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The TypeScript grammar could not be loaded into the parser.
    #[error("failed to load the TypeScript grammar: {0}")]
    Language(String),

    /// The placeholder token matcher could not be built.
    #[error("invalid placeholder pattern: {0}")]
    Pattern(String),

    #[error("parser produced no syntax tree for {path}")]
    Parse { path: String },

    #[error("generation failed with {} errors", .0.error_count())]
    Generation(Diagnostics),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;
