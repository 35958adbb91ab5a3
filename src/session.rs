//! The controller that owns one queue and its notifications.

use std::path::PathBuf;
use std::time::Instant;

use uuid::Uuid;

use crate::config::Config;
use crate::error::{Result, ShieldError};
use crate::intake::{DiskFile, FileHandle, Scanner, Validator};
use crate::models::{Notification, NotificationKind, Notifier};
use crate::operations::notices::{batch_notices, cleared_notice, directory_notice};
use crate::operations::{submit_scan, summarize_queue, QueueSummary, ScanRequest};
use crate::queue::{BatchOutcome, FileQueue};

/// A path argument after it has been checked on disk.
enum Selection {
    File(DiskFile),
    Directory(PathBuf),
}

/// Owns the queue for one run; every intake goes through here.
pub struct Session {
    config: Config,
    validator: Validator,
    queue: FileQueue,
    notifier: Notifier,
}

impl Session {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let validator = Validator::new(config.settings.validation);
        let notifier = Notifier::new(config.settings.notifications.dismiss_after());
        Self {
            config,
            validator,
            queue: FileQueue::new(),
            notifier,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn queue(&self) -> &FileQueue {
        &self.queue
    }

    #[must_use]
    pub fn summary(&self) -> QueueSummary {
        summarize_queue(&self.queue)
    }

    /// Add one batch of handles and announce the outcome.
    pub async fn add_files(&mut self, handles: &[Box<dyn FileHandle>]) -> BatchOutcome {
        if handles.is_empty() {
            return BatchOutcome::default();
        }
        let outcome = self.queue.add_files(&self.validator, handles).await;
        tracing::info!(
            added = outcome.added,
            skipped = outcome.skipped,
            invalid = outcome.invalid,
            "batch processed"
        );
        for (kind, message) in batch_notices(&outcome) {
            self.notifier.push(kind, message);
        }
        outcome
    }

    /// Add every supported file under `dir` as one batch.
    pub async fn add_directory(&mut self, dir: impl Into<PathBuf>) -> Result<BatchOutcome> {
        let selection = Scanner::new(dir).select().await?;
        if let Some((kind, message)) =
            directory_notice(selection.supported.len(), selection.skipped)
        {
            self.notifier.push(kind, message);
        }
        let handles: Vec<Box<dyn FileHandle>> = selection
            .supported
            .into_iter()
            .map(|f| Box::new(f) as Box<dyn FileHandle>)
            .collect();
        Ok(self.add_files(&handles).await)
    }

    /// Add user-supplied paths in order.
    ///
    /// Consecutive files form one batch; each directory is its own batch.
    /// Every path is checked before anything is added.
    pub async fn add_paths(&mut self, paths: &[String]) -> Result<BatchOutcome> {
        let mut selections = Vec::with_capacity(paths.len());
        for raw in paths {
            let path = self.config.resolve(raw);
            if path.is_dir() {
                selections.push(Selection::Directory(path));
            } else {
                selections.push(Selection::File(DiskFile::open(path).await?));
            }
        }

        let mut total = BatchOutcome::default();
        let mut pending: Vec<Box<dyn FileHandle>> = Vec::new();
        for selection in selections {
            match selection {
                Selection::File(file) => pending.push(Box::new(file)),
                Selection::Directory(dir) => {
                    total.merge(self.add_files(&pending).await);
                    pending.clear();
                    total.merge(self.add_directory(dir).await?);
                }
            }
        }
        total.merge(self.add_files(&pending).await);
        Ok(total)
    }

    /// Remove a record by id; unknown ids leave the queue untouched.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let removed = self.queue.remove_file(id);
        tracing::debug!(%id, removed, "remove");
        removed
    }

    /// Remove a record by its textual id.
    pub fn remove_str(&mut self, id: &str) -> Result<()> {
        let parsed = Uuid::parse_str(id).map_err(|_| ShieldError::RecordNotFound {
            id: id.to_string(),
        })?;
        if self.remove(parsed) {
            Ok(())
        } else {
            Err(ShieldError::RecordNotFound { id: id.to_string() })
        }
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        let (kind, message) = cleared_notice();
        self.notifier.push(kind, message);
    }

    /// Hand the accepted files to the analysis stage.
    pub fn submit(&mut self) -> Result<ScanRequest> {
        match submit_scan(&self.queue) {
            Ok(request) => {
                self.notifier
                    .push(NotificationKind::Success, request.announcement());
                Ok(request)
            }
            Err(e) => {
                self.notifier.push(NotificationKind::Error, e.to_string());
                Err(e)
            }
        }
    }

    /// Notifications raised since the last call, after expiring old ones.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifier.prune(Instant::now());
        self.notifier.take_new()
    }
}
