//! Emitted units and writing them to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{Error, Result};

/// One Dart source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputUnit {
    pub file_name: String,
    pub content: String,
}

/// Write every unit into `dir`, creating it if needed.
///
/// Returns the written paths in unit order.
pub fn write_units(units: &[OutputUnit], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = dir.join(&unit.file_name);
        fs::write(&path, &unit.content).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}
