//! Supported extensions listing.

use serde::Serialize;

use crate::intake::language::{ext_to_language, ALLOWED_EXTENSIONS};

/// Result of listing supported extensions.
#[derive(Debug, Clone, Serialize)]
pub struct SupportedResult {
    /// The list of supported extensions.
    pub extensions: Vec<ExtensionInfo>,
}

/// Information about a supported extension.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionInfo {
    /// The file extension (e.g., ".py").
    pub ext: String,
    /// The language name (e.g., "Python").
    pub lang: String,
    /// The style tag (e.g., "lang-python").
    pub style: String,
}

/// List all accepted extensions in display order.
#[must_use]
pub fn list_supported() -> SupportedResult {
    let extensions = ALLOWED_EXTENSIONS
        .iter()
        .filter_map(|e| {
            ext_to_language(e).map(|lang| ExtensionInfo {
                ext: format!(".{e}"),
                lang: lang.name.to_string(),
                style: lang.style.to_string(),
            })
        })
        .collect();

    SupportedResult { extensions }
}
