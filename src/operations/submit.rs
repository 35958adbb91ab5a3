//! Hand-off of accepted files to the analysis stage.
//!
//! The analysis pipeline itself does not exist yet. Submitting logs the
//! accepted files and returns them as a [`ScanRequest`].

use serde::Serialize;

use crate::error::{Result, ShieldError};
use crate::models::FileRecord;
use crate::queue::FileQueue;

/// Non-empty, queue-ordered list of records ready for analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    pub files: Vec<FileRecord>,
}

impl ScanRequest {
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Success message shown after submission.
    #[must_use]
    pub fn announcement(&self) -> String {
        let n = self.len();
        format!(
            "Scan initiated for {n} file{}. (Analysis pipeline not available yet)",
            if n > 1 { "s" } else { "" }
        )
    }
}

/// Build a scan request from the queue's valid records.
pub fn submit_scan(queue: &FileQueue) -> Result<ScanRequest> {
    let files: Vec<FileRecord> = queue.accepted().cloned().collect();
    if files.is_empty() {
        return Err(ShieldError::NoValidFiles);
    }

    tracing::info!(files = files.len(), "scan submitted");
    for f in &files {
        tracing::info!(
            "  {} | {} | {} lines | {}",
            f.language.map_or("?", |l| l.name),
            f.name,
            f.lines,
            f.size_formatted
        );
    }

    Ok(ScanRequest { files })
}
