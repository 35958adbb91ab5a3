//! Queue summary shared between the one-shot commands and the session.

use serde::Serialize;

use crate::queue::{FileQueue, StatusCounts};

/// Aggregated view of the queue for display.
#[derive(Debug, Clone, Serialize)]
pub struct QueueSummary {
    #[serde(flatten)]
    pub counts: StatusCounts,
    /// e.g. "3 files · 2 ready".
    pub headline: String,
    /// e.g. "2 files ready for analysis · 1 warning".
    pub detail: String,
    /// Whether the scan step may proceed.
    pub ready_for_scan: bool,
}

/// Summarize the queue.
#[must_use]
pub fn summarize_queue(queue: &FileQueue) -> QueueSummary {
    let counts = queue.counts();

    let headline = format!(
        "{} file{} · {} ready",
        counts.total,
        if counts.total == 1 { "" } else { "s" },
        counts.valid
    );

    let mut detail = format!(
        "{} file{} ready for analysis",
        counts.valid,
        if counts.valid == 1 { "" } else { "s" }
    );
    if counts.warning > 0 {
        detail.push_str(&format!(
            " · {} warning{}",
            counts.warning,
            if counts.warning == 1 { "" } else { "s" }
        ));
    }
    if counts.invalid > 0 {
        detail.push_str(&format!(" · {} invalid", counts.invalid));
    }

    QueueSummary {
        counts,
        headline,
        detail,
        ready_for_scan: counts.valid > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{FileHandle, MemoryFile, Validator};

    async fn queue_of(files: Vec<MemoryFile>) -> FileQueue {
        let handles: Vec<Box<dyn FileHandle>> = files
            .into_iter()
            .map(|f| Box::new(f) as Box<dyn FileHandle>)
            .collect();
        let mut q = FileQueue::new();
        q.add_files(&Validator::default(), &handles).await;
        q
    }

    #[test]
    fn empty_queue_summary() {
        let s = summarize_queue(&FileQueue::new());
        assert_eq!(s.headline, "0 files · 0 ready");
        assert_eq!(s.detail, "0 files ready for analysis");
        assert!(!s.ready_for_scan);
    }

    #[tokio::test]
    async fn single_valid_file() {
        let q = queue_of(vec![MemoryFile::new("a.py", "x")]).await;
        let s = summarize_queue(&q);
        assert_eq!(s.headline, "1 file · 1 ready");
        assert_eq!(s.detail, "1 file ready for analysis");
        assert!(s.ready_for_scan);
    }

    #[tokio::test]
    async fn mixed_queue_summary() {
        let q = queue_of(vec![
            MemoryFile::new("a.py", "x"),
            MemoryFile::new("b.py", ""),
            MemoryFile::new("c.java", ""),
            MemoryFile::new("d.txt", "x"),
        ])
        .await;
        let s = summarize_queue(&q);
        assert_eq!(s.headline, "4 files · 1 ready");
        assert_eq!(
            s.detail,
            "1 file ready for analysis · 2 warnings · 1 invalid"
        );
        assert_eq!(s.counts.warning, 2);
    }

    #[tokio::test]
    async fn only_rejected_files_block_scan() {
        let q = queue_of(vec![MemoryFile::new("d.txt", "x")]).await;
        let s = summarize_queue(&q);
        assert!(!s.ready_for_scan);
        assert_eq!(s.detail, "0 files ready for analysis · 1 invalid");
    }
}
