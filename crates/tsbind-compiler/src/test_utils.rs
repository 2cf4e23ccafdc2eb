//! Test utilities: fixture configs and one-call pipeline helpers.

use tsbind_core::Library;

use crate::Generator;
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::emit::OutputUnit;

/// Config for library `lib` declaring `names` with all members.
pub fn config_for(names: &[&str]) -> Config {
    names
        .iter()
        .fold(Config::new("lib"), |config, name| config.declare(*name))
}

/// Extracted, not normalized.
pub fn extract_str(text: &str, config: &Config) -> (Library, Diagnostics) {
    let extracted = Generator::inline(config.clone(), text)
        .extract()
        .expect("extraction failed");
    (extracted.library().clone(), extracted.diagnostics().clone())
}

/// Extracted and normalized.
pub fn normalize_str(text: &str, config: &Config) -> (Library, Diagnostics) {
    let normalized = Generator::inline(config.clone(), text)
        .extract()
        .expect("extraction failed")
        .normalize();
    (normalized.library().clone(), normalized.diagnostics().clone())
}

/// All units plus every diagnostic of the run.
pub fn generate_str(text: &str, config: &Config) -> (Vec<OutputUnit>, Diagnostics) {
    let emitted = Generator::inline(config.clone(), text)
        .run()
        .expect("generation failed");
    (emitted.units().to_vec(), emitted.diagnostics().clone())
}

/// Content of the unit emitted for `class`.
pub fn generate_class(text: &str, config: &Config, class: &str) -> String {
    let (units, _) = generate_str(text, config);
    let file_name = tsbind_core::utils::unit_file_name(class);
    units
        .into_iter()
        .find(|u| u.file_name == file_name)
        .map(|u| u.content)
        .unwrap_or_else(|| panic!("no unit for class `{}`", class))
}
