//! User-facing notification texts for intake events.

use crate::intake::language::accepted_list;
use crate::models::NotificationKind;
use crate::queue::BatchOutcome;

fn plural(n: usize, word: &str) -> String {
    if n > 1 {
        format!("{n} {word}s")
    } else {
        format!("{n} {word}")
    }
}

/// Notifications summarizing one batch.
#[must_use]
pub fn batch_notices(outcome: &BatchOutcome) -> Vec<(NotificationKind, String)> {
    let mut notices = Vec::new();
    if outcome.added > 0 {
        let accepted = outcome.accepted();
        if accepted > 0 {
            notices.push((
                NotificationKind::Success,
                format!("{} added to queue.", plural(accepted, "file")),
            ));
        }
        if outcome.invalid > 0 {
            notices.push((
                NotificationKind::Error,
                format!(
                    "{} rejected (unsupported or binary).",
                    plural(outcome.invalid, "file")
                ),
            ));
        }
    }
    if outcome.skipped > 0 {
        notices.push((
            NotificationKind::Warning,
            format!("{} skipped.", plural(outcome.skipped, "duplicate")),
        ));
    }
    notices
}

/// Notification for a directory pick, before its files are added.
#[must_use]
pub fn directory_notice(supported: usize, skipped: usize) -> Option<(NotificationKind, String)> {
    if supported + skipped == 0 {
        return None;
    }
    if supported == 0 {
        return Some((
            NotificationKind::Warning,
            format!(
                "No supported files found in the selected directory. Expected: {}",
                accepted_list()
            ),
        ));
    }
    if skipped > 0 {
        return Some((
            NotificationKind::Info,
            format!(
                "Found {} supported file{}, skipped {skipped} unsupported.",
                supported,
                if supported > 1 { "s" } else { "" }
            ),
        ));
    }
    None
}

#[must_use]
pub fn cleared_notice() -> (NotificationKind, String) {
    (NotificationKind::Info, "File queue cleared.".to_string())
}
