//! The per-file validation pipeline.
//!
//! Stages run in a fixed order and the first terminal verdict wins:
//! extension, language tag, emptiness, binary sniff, line count. Every
//! failure ends up as a [`Status`] on the returned record; nothing here
//! returns an error.

use crate::config::ValidationSettings;
use crate::intake::handle::FileHandle;
use crate::intake::language::{accepted_list, ext_to_language, extension_of, is_supported_extension};
use crate::intake::sniff::{count_lines, format_count, is_binary};
use crate::models::{FileRecord, Status};

/// Validates file handles against the configured limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    settings: ValidationSettings,
}

impl Validator {
    #[must_use]
    pub fn new(settings: ValidationSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    /// Run the pipeline over one handle.
    pub async fn validate(&self, handle: &dyn FileHandle) -> FileRecord {
        let record = FileRecord::new(handle.name(), handle.source(), handle.size());
        let record = self.run_stages(handle, record).await;
        tracing::debug!(
            file = %record.source,
            status = record.status.as_str(),
            label = %record.status_label,
            "validated"
        );
        record
    }

    async fn run_stages(&self, handle: &dyn FileHandle, mut record: FileRecord) -> FileRecord {
        let ext = extension_of(handle.name());
        if !is_supported_extension(&ext) {
            let shown = if ext.is_empty() {
                "none".to_string()
            } else {
                format!(".{ext}")
            };
            return record.with_verdict(
                Status::Invalid,
                "Unsupported",
                format!(
                    "File type \"{shown}\" is not supported. Accepted: {}",
                    accepted_list()
                ),
            );
        }

        record.language = ext_to_language(&ext);

        if handle.size() == 0 {
            return record.with_verdict(
                Status::Warning,
                "Empty",
                "This file is empty (0 bytes). Nothing to analyse.",
            );
        }

        // A failed sniff read is not fatal; the full read below decides.
        match handle.read_prefix(self.settings.binary_check_bytes).await {
            Ok(prefix) if is_binary(&prefix, self.settings.binary_check_bytes) => {
                return record.with_verdict(
                    Status::Invalid,
                    "Binary",
                    "This appears to be a binary file, not source code.",
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(file = %record.source, "binary check skipped: {e}");
            }
        }

        let text = match handle.read_text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(file = %record.source, "full read failed: {e}");
                return record.with_verdict(
                    Status::Invalid,
                    "Unreadable",
                    "Could not read file contents.",
                );
            }
        };

        record.lines = count_lines(&text);
        if record.lines > self.settings.max_lines {
            let message = format!(
                "{} lines exceeds the {}-line limit.",
                format_count(record.lines),
                format_count(self.settings.max_lines)
            );
            return record.with_verdict(Status::Warning, "Too Large", message);
        }

        let message = format!("{} lines · {}", format_count(record.lines), record.size_formatted);
        record.with_verdict(Status::Valid, "Ready", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::handle::MemoryFile;

    async fn check(file: MemoryFile) -> FileRecord {
        Validator::default().validate(&file).await
    }

    #[tokio::test]
    async fn valid_source_file() {
        let r = check(MemoryFile::new("main.py", "print('hi')\nprint('bye')")).await;
        assert_eq!(r.status, Status::Valid);
        assert_eq!(r.status_label, "Ready");
        assert_eq!(r.lines, 2);
        assert_eq!(r.language.unwrap().name, "Python");
        assert_eq!(r.message, "2 lines · 24.0 B");
    }

    #[tokio::test]
    async fn unsupported_extension_is_invalid() {
        let r = check(MemoryFile::new("notes.txt", "hello")).await;
        assert_eq!(r.status, Status::Invalid);
        assert_eq!(r.status_label, "Unsupported");
        assert!(r.language.is_none());
        assert_eq!(
            r.message,
            "File type \".txt\" is not supported. Accepted: .py, .java, .js, .cpp"
        );
    }

    #[tokio::test]
    async fn missing_extension_is_invalid() {
        let r = check(MemoryFile::new("Makefile", "all:\n")).await;
        assert_eq!(r.status, Status::Invalid);
        assert!(r.language.is_none());
        assert!(r.message.contains("\"none\""));
    }

    #[tokio::test]
    async fn empty_file_is_warning() {
        let r = check(MemoryFile::new("Empty.java", "")).await;
        assert_eq!(r.status, Status::Warning);
        assert_eq!(r.status_label, "Empty");
        assert_eq!(r.language.unwrap().name, "Java");
        assert_eq!(r.lines, 0);
    }

    #[tokio::test]
    async fn empty_file_with_bad_extension_is_invalid() {
        let r = check(MemoryFile::new("empty.rb", "")).await;
        assert_eq!(r.status, Status::Invalid);
        assert_eq!(r.status_label, "Unsupported");
    }

    #[tokio::test]
    async fn null_byte_is_binary() {
        let r = check(MemoryFile::new("blob.cpp", vec![b'a', 0, b'b'])).await;
        assert_eq!(r.status, Status::Invalid);
        assert_eq!(r.status_label, "Binary");
        assert_eq!(r.lines, 0);
    }

    #[tokio::test]
    async fn null_byte_after_prefix_is_not_binary() {
        let mut data = vec![b'x'; 8192];
        data.push(0);
        let r = check(MemoryFile::new("late.js", data)).await;
        assert_eq!(r.status, Status::Valid);
        assert_eq!(r.lines, 1);
    }

    #[tokio::test]
    async fn too_many_lines_is_warning() {
        let text = "x\n".repeat(10_000);
        let r = check(MemoryFile::new("big.py", text)).await;
        assert_eq!(r.lines, 10_001);
        assert_eq!(r.status, Status::Warning);
        assert_eq!(r.status_label, "Too Large");
        assert_eq!(r.message, "10,001 lines exceeds the 10,000-line limit.");
    }

    #[tokio::test]
    async fn exactly_at_limit_is_valid() {
        let text = "x\n".repeat(9_999);
        let r = check(MemoryFile::new("edge.py", text)).await;
        assert_eq!(r.lines, 10_000);
        assert_eq!(r.status, Status::Valid);
    }

    #[tokio::test]
    async fn prefix_read_failure_is_swallowed() {
        let file = MemoryFile::new("odd.py", "a\nb").failing_prefix_read();
        let r = check(file).await;
        assert_eq!(r.status, Status::Valid);
        assert_eq!(r.lines, 2);
    }

    #[tokio::test]
    async fn full_read_failure_is_unreadable() {
        let file = MemoryFile::new("locked.py", "a\nb").failing_text_read();
        let r = check(file).await;
        assert_eq!(r.status, Status::Invalid);
        assert_eq!(r.status_label, "Unreadable");
        assert_eq!(r.message, "Could not read file contents.");
    }

    #[tokio::test]
    async fn custom_limits_apply() {
        let validator = Validator::new(ValidationSettings {
            max_lines: 2,
            binary_check_bytes: 4,
        });
        let r = validator.validate(&MemoryFile::new("a.py", "1\n2\n3")).await;
        assert_eq!(r.status_label, "Too Large");

        let r = validator
            .validate(&MemoryFile::new("b.py", vec![b'a', b'b', b'c', b'd', 0]))
            .await;
        assert_eq!(r.status, Status::Valid);
    }
}
