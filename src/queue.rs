//! Ordered, deduplicated collection of validated files.

use serde::Serialize;
use uuid::Uuid;

use crate::intake::{FileHandle, Validator};
use crate::models::{FileRecord, Status};

/// Counts from one `add_files` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Records appended (any status).
    pub added: usize,
    /// Handles skipped as duplicates, never validated.
    pub skipped: usize,
    /// Appended records whose status is `invalid`.
    pub invalid: usize,
}

impl BatchOutcome {
    /// Appended records that were not rejected.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.added.saturating_sub(self.invalid)
    }

    /// Fold another batch's counts into this one.
    pub fn merge(&mut self, other: BatchOutcome) {
        self.added += other.added;
        self.skipped += other.skipped;
        self.invalid += other.invalid;
    }
}

/// Queue counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub valid: usize,
    pub warning: usize,
    pub invalid: usize,
}

/// Insertion-ordered queue keyed by (name, size).
#[derive(Debug, Default)]
pub struct FileQueue {
    records: Vec<FileRecord>,
}

impl FileQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append each novel handle, strictly one at a time.
    ///
    /// The duplicate check for a handle sees every record appended
    /// earlier in the same batch.
    pub async fn add_files(
        &mut self,
        validator: &Validator,
        handles: &[Box<dyn FileHandle>],
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for handle in handles {
            let handle: &dyn FileHandle = &**handle;
            if self.contains(handle.name(), handle.size()) {
                tracing::debug!(file = %handle.source(), "duplicate skipped");
                outcome.skipped += 1;
                continue;
            }

            let record = validator.validate(handle).await;
            if record.status == Status::Invalid {
                outcome.invalid += 1;
            }
            self.records.push(record);
            outcome.added += 1;
        }
        outcome
    }

    /// Whether a record with this identity is queued.
    #[must_use]
    pub fn contains(&self, name: &str, size: u64) -> bool {
        self.records.iter().any(|r| r.same_file(name, size))
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn remove_file(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    #[must_use]
    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            total: self.len(),
            valid: self.count(Status::Valid),
            warning: self.count(Status::Warning),
            invalid: self.count(Status::Invalid),
        }
    }

    /// At least one record is ready for analysis.
    #[must_use]
    pub fn has_valid(&self) -> bool {
        self.records.iter().any(|r| r.status == Status::Valid)
    }

    /// Records ready for analysis, in queue order.
    pub fn accepted(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.status == Status::Valid)
    }
}
