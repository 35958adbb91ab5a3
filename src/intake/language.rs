//! Extension allow-list and language descriptors.

use serde::Serialize;

/// Display descriptor for a recognized source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Human-readable name (e.g. "Python").
    pub name: &'static str,
    /// Style tag used by renderers (e.g. "lang-python").
    pub style: &'static str,
}

/// Accepted extensions, without the leading dot, in display order.
pub const ALLOWED_EXTENSIONS: &[&str] = &["py", "java", "js", "cpp"];

/// Extract the lower-cased extension after the last `.` in a file name.
///
/// Names without a dot yield `""`. A leading dot counts, so `.bashrc`
/// yields `"bashrc"`.
#[must_use]
pub fn extension_of(name: &str) -> String {
    name.rfind('.')
        .map(|idx| name[idx + 1..].to_lowercase())
        .unwrap_or_default()
}

/// Check if an extension (without dot) is accepted.
#[must_use]
pub fn is_supported_extension(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// Map an extension (without dot) to its language descriptor.
#[must_use]
pub fn ext_to_language(ext: &str) -> Option<Language> {
    let (name, style) = match ext.to_lowercase().as_str() {
        "py" => ("Python", "lang-python"),
        "java" => ("Java", "lang-java"),
        "js" => ("JavaScript", "lang-javascript"),
        "cpp" => ("C++", "lang-cpp"),
        _ => return None,
    };
    Some(Language { name, style })
}

/// Detect the language of a file from its name alone.
#[must_use]
pub fn detect_language(name: &str) -> Option<Language> {
    ext_to_language(&extension_of(name))
}

/// The accepted set as shown to users: `.py, .java, .js, .cpp`.
#[must_use]
pub fn accepted_list() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ")
}
