/// Uppercase the first character, leave the rest alone.
///
/// Unlike PascalCase conversion this keeps inner capitals, so camelCase
/// member names stay readable when concatenated.
///
/// # Examples
/// ```
/// use tsbind_core::utils::capitalize;
/// assert_eq!(capitalize("getArea"), "GetArea");
/// assert_eq!(capitalize("Mesh"), "Mesh");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Output file name for a class: lowercased name with the `.dart` extension.
///
/// # Examples
/// ```
/// use tsbind_core::utils::unit_file_name;
/// assert_eq!(unit_file_name("ArcRotateCamera"), "arcrotatecamera.dart");
/// ```
pub fn unit_file_name(class_name: &str) -> String {
    format!("{}.dart", class_name.to_lowercase())
}

/// Whether a declared name is hidden by convention (leading underscore).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('_')
}
