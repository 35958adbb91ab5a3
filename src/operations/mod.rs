//! Operations shared by the one-shot commands and the interactive session.

pub mod notices;
pub mod submit;
pub mod summary;
pub mod supported;

pub use submit::{submit_scan, ScanRequest};
pub use summary::{summarize_queue, QueueSummary};
pub use supported::{list_supported, ExtensionInfo, SupportedResult};
