//! High-level pipeline: sources → `Library` → normalized `Library` → Dart units.
//!
//! Each stage consumes the previous one, so a stage's output can be inspected
//! (the CLI dumps libraries between stages) without re-running earlier work.

use std::fs;
use std::path::{Path, PathBuf};

use tsbind_core::Library;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::emit::{Emitter, OutputUnit, write_units};
use crate::source_map::SourceMap;
use crate::substitute::TypeMapper;
use crate::{Error, Result, extract, normalize};

/// Entry point: a configuration plus the declaration sources to read.
pub struct Generator {
    config: Config,
    sources: SourceMap,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: SourceMap::new(),
        }
    }

    /// Generator over a single inline source.
    pub fn inline(config: Config, text: &str) -> Self {
        Self::new(config).with_source_text(text)
    }

    pub fn with_source_text(mut self, text: &str) -> Self {
        self.sources.add_inline(text);
        self
    }

    pub fn with_source_file(mut self, path: &str, content: &str) -> Self {
        self.sources.add_file(path, content);
        self
    }

    /// Read a declaration file from disk.
    pub fn read_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.with_source_file(&path.display().to_string(), &content))
    }

    /// Read every input the configuration lists.
    pub fn read_inputs(mut self) -> Result<Self> {
        let inputs = self.config.inputs.clone();
        for input in inputs {
            self = self.read_file(&input)?;
        }
        Ok(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    pub fn extract(self) -> Result<Extracted> {
        let mut diag = Diagnostics::new();
        let library = extract::extract(&self.sources, &self.config, &mut diag)?;
        Ok(Extracted {
            config: self.config,
            sources: self.sources,
            library,
            diag,
        })
    }

    /// Extract, normalize and emit.
    pub fn run(self) -> Result<Emitted> {
        self.extract()?.normalize().emit()
    }
}

/// Library as declared in the sources.
#[derive(Debug)]
pub struct Extracted {
    config: Config,
    sources: SourceMap,
    library: Library,
    diag: Diagnostics,
}

impl Extracted {
    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    pub fn normalize(mut self) -> Normalized {
        normalize::normalize(&mut self.library, &mut self.diag);
        Normalized {
            config: self.config,
            sources: self.sources,
            library: self.library,
            diag: self.diag,
        }
    }
}

/// Library after the repair passes, ready for emission.
#[derive(Debug)]
pub struct Normalized {
    config: Config,
    sources: SourceMap,
    library: Library,
    diag: Diagnostics,
}

impl Normalized {
    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    pub fn emit(mut self) -> Result<Emitted> {
        let mapper = TypeMapper::new(&self.config.type_replacements, &mut self.diag)?;
        let units = Emitter::new(&self.config, &mapper, &mut self.diag).emit_library(&self.library);
        Ok(Emitted {
            config: self.config,
            sources: self.sources,
            units,
            diag: self.diag,
        })
    }
}

/// Dart units for every class. Nothing is on disk until `write` succeeds.
#[derive(Debug)]
pub struct Emitted {
    config: Config,
    sources: SourceMap,
    units: Vec<OutputUnit>,
    diag: Diagnostics,
}

impl Emitted {
    pub fn is_valid(&self) -> bool {
        !self.diag.has_errors()
    }

    pub fn units(&self) -> &[OutputUnit] {
        &self.units
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    /// Write into the configured output directory.
    pub fn write(&self) -> Result<Vec<PathBuf>> {
        self.write_to(&self.config.out_dir)
    }

    /// Write into `dir`. Refuses when emission reported errors.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_valid() {
            return Err(Error::Generation(self.diag.clone()));
        }
        write_units(&self.units, dir)
    }
}
