use serde::Serialize;
use uuid::Uuid;

use crate::intake::language::Language;
use crate::intake::sniff::format_size;

/// Tri-state validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Accepted and ready for analysis.
    Valid,
    /// Accepted but flagged (empty, too large).
    Warning,
    /// Rejected outright (unsupported, binary, unreadable).
    Invalid,
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Valid => "valid",
            Status::Warning => "warning",
            Status::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of validating one file handle.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Process-unique identifier, used for removal.
    pub id: Uuid,
    /// File name (dedup key, together with `size`).
    pub name: String,
    /// Where the file came from (path or name).
    pub source: String,
    /// Declared size in bytes.
    pub size: u64,
    /// Human-readable size.
    pub size_formatted: String,
    /// Line count, 0 when not computed.
    pub lines: usize,
    /// Language detected from the extension.
    pub language: Option<Language>,
    pub status: Status,
    pub status_label: String,
    pub message: String,
}

impl FileRecord {
    /// Start a record that is `valid`/"Ready" until a stage says otherwise.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>, size: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            source: source.into(),
            size,
            size_formatted: format_size(size),
            lines: 0,
            language: None,
            status: Status::Valid,
            status_label: "Ready".into(),
            message: String::new(),
        }
    }

    /// Close the record with a terminal verdict.
    #[must_use]
    pub fn with_verdict(
        mut self,
        status: Status,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.status = status;
        self.status_label = label.into();
        self.message = message.into();
        self
    }

    /// Whether this record has the same (name, size) identity.
    #[must_use]
    pub fn same_file(&self, name: &str, size: u64) -> bool {
        self.name == name && self.size == size
    }
}
