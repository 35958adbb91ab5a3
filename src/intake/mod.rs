pub mod handle;
pub mod language;
pub mod scanner;
pub mod sniff;
pub mod validator;

pub use handle::{DiskFile, FileHandle, MemoryFile};
pub use scanner::{DirectorySelection, Scanner};
pub use validator::Validator;
