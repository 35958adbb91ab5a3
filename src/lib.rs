// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - cast_possible_truncation: File sizes handed to buffer capacities fit in usize
// - cast_precision_loss: Acceptable for human-readable size formatting
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: Types like `QueueSummary` read better in full
// - needless_pass_by_value: Sometimes clearer semantically
// - manual_let_else: if-let with early return is often clearer in context
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::manual_let_else
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod operations;
pub mod queue;
pub mod session;
