use std::time::{Duration, Instant};

use serde::Serialize;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// An ephemeral user-facing message.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    #[serde(skip)]
    pub created_at: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

/// Collects notifications and dismisses them after a fixed interval.
#[derive(Debug)]
pub struct Notifier {
    dismiss_after: Duration,
    active: Vec<Notification>,
    /// Index of the first notification not yet handed out by `take_new`.
    cursor: usize,
}

impl Notifier {
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            dismiss_after,
            active: Vec::new(),
            cursor: 0,
        }
    }

    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let n = Notification::new(kind, message);
        tracing::debug!(kind = n.kind.as_str(), "{}", n.message);
        self.active.push(n);
    }

    /// Notifications that have not been dismissed yet.
    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Notifications pushed since the previous call.
    pub fn take_new(&mut self) -> Vec<Notification> {
        let fresh = self.active[self.cursor..].to_vec();
        self.cursor = self.active.len();
        fresh
    }

    /// Drop notifications older than the dismiss interval.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.dismiss_after;
        let before = self.active.len();
        let mut kept_before_cursor = 0;
        let mut idx = 0;
        let cursor = self.cursor;
        self.active.retain(|n| {
            let keep = now.saturating_duration_since(n.created_at) < ttl;
            if keep && idx < cursor {
                kept_before_cursor += 1;
            }
            idx += 1;
            keep
        });
        self.cursor = kept_before_cursor;
        if self.active.len() < before {
            tracing::trace!(dismissed = before - self.active.len(), "notifications expired");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind() {
        let n = Notification::new(NotificationKind::Warning, "2 duplicates skipped.");
        assert_eq!(n.to_string(), "[warning] 2 duplicates skipped.");
    }

    #[test]
    fn take_new_returns_each_once() {
        let mut notifier = Notifier::new(Duration::from_secs(4));
        notifier.push(NotificationKind::Info, "one");
        assert_eq!(notifier.take_new().len(), 1);
        notifier.push(NotificationKind::Info, "two");
        let fresh = notifier.take_new();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].message, "two");
        assert!(notifier.take_new().is_empty());
        assert_eq!(notifier.active().len(), 2);
    }

    #[test]
    fn prune_drops_expired() {
        let mut notifier = Notifier::new(Duration::from_millis(4000));
        notifier.push(NotificationKind::Success, "added");
        let created = notifier.active()[0].created_at;

        notifier.prune(created + Duration::from_millis(3999));
        assert_eq!(notifier.active().len(), 1);

        notifier.prune(created + Duration::from_millis(4000));
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn prune_keeps_unseen_notifications_new() {
        let mut notifier = Notifier::new(Duration::from_secs(60));
        notifier.push(NotificationKind::Info, "seen");
        let _ = notifier.take_new();
        notifier.push(NotificationKind::Info, "unseen");

        notifier.prune(Instant::now());
        let fresh = notifier.take_new();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].message, "unseen");
    }
}
