//! Configuration and input loading shared by the pipeline commands.

use std::path::{Path, PathBuf};

use tsbind_compiler::{Config, Generator};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Compiler(#[from] tsbind_compiler::Error),

    #[error("no declaration files: pass FILES or list `inputs` in {}", .0.display())]
    NoInputs(PathBuf),
}

/// Load `config_path`; non-empty `files` replace its `inputs`.
pub fn load_config(config_path: &Path, files: &[PathBuf]) -> Result<Config, LoadError> {
    let mut config = Config::load(config_path)?;
    if !files.is_empty() {
        config.inputs = files.to_vec();
    }
    if config.inputs.is_empty() {
        return Err(LoadError::NoInputs(config_path.to_path_buf()));
    }
    Ok(config)
}

/// Generator with every configured input read.
pub fn load_generator(config: Config) -> Result<Generator, LoadError> {
    Ok(Generator::new(config).read_inputs()?)
}

/// Print `error: ...` and exit with status 1.
pub fn exit_with(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn files_replace_configured_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tsbind.json");
        fs::write(
            &config_path,
            r#"{ "libraryName": "lib", "inputs": ["a.d.ts"] }"#,
        )
        .unwrap();

        let config = load_config(&config_path, &[PathBuf::from("b.d.ts")]).unwrap();
        assert_eq!(config.inputs, vec![PathBuf::from("b.d.ts")]);

        let config = load_config(&config_path, &[]).unwrap();
        assert_eq!(config.inputs, vec![dir.path().join("a.d.ts")]);
    }

    #[test]
    fn no_inputs_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("tsbind.json");
        fs::write(&config_path, r#"{ "libraryName": "lib" }"#).unwrap();

        let err = load_config(&config_path, &[]).unwrap_err();
        assert!(matches!(err, LoadError::NoInputs(_)));
        assert!(err.to_string().starts_with("no declaration files"));
    }

    #[test]
    fn missing_config_reports_path() {
        let err = load_config(Path::new("/nonexistent/tsbind.json"), &[]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tsbind.json"));
    }
}
