pub mod notification;
pub mod record;

pub use notification::{Notification, NotificationKind, Notifier};
pub use record::{FileRecord, Status};
