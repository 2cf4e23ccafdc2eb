//! Generator configuration.
//!
//! A JSON document naming the library, where output goes, which inputs to read,
//! how type names are rewritten and which declarations (and members) to emit.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Dart library every unit declares itself `part of`.
    pub library_name: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    /// Pattern → template rewrites, tried in document order.
    #[serde(default)]
    pub type_replacements: IndexMap<String, String>,
    /// Top-level allow table. Declarations missing here are never extracted.
    #[serde(default)]
    pub declarations: IndexMap<String, MemberFilter>,
}

/// Per-declaration member filter.
///
/// `exclude` always wins. When `include` is present only the listed members pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemberFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl MemberFilter {
    /// Accepts every member.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn including<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: Some(members.into_iter().map(Into::into).collect()),
            exclude: Vec::new(),
        }
    }

    pub fn excluding<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include: None,
            exclude: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn accepts(&self, member: &str) -> bool {
        if self.exclude.iter().any(|m| m == member) {
            return false;
        }
        match &self.include {
            Some(include) => include.iter().any(|m| m == member),
            None => true,
        }
    }
}

impl Config {
    pub fn new(library_name: impl Into<String>) -> Self {
        Self {
            library_name: library_name.into(),
            out_dir: default_out_dir(),
            inputs: Vec::new(),
            type_replacements: IndexMap::new(),
            declarations: IndexMap::new(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a config file. Relative `outDir` and `inputs` resolve against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.out_dir = resolve(base, &config.out_dir);
        for input in &mut config.inputs {
            *input = resolve(base, input);
        }

        tracing::debug!(
            path = %path.display(),
            inputs = config.inputs.len(),
            declarations = config.declarations.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn replace_type(mut self, pattern: impl Into<String>, template: impl Into<String>) -> Self {
        self.type_replacements
            .insert(pattern.into(), template.into());
        self
    }

    /// Allow a declaration with all of its members.
    pub fn declare(self, name: impl Into<String>) -> Self {
        self.declare_with(name, MemberFilter::all())
    }

    pub fn declare_with(mut self, name: impl Into<String>, filter: MemberFilter) -> Self {
        self.declarations.insert(name.into(), filter);
        self
    }

    pub fn include_top_level(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    /// Member filter for `decl`. Constructors are looked up as `constructor`.
    pub fn include_member(&self, decl: &str, member: &str) -> bool {
        self.declarations
            .get(decl)
            .is_some_and(|filter| filter.accepts(member))
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
