use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShieldError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("not a regular file: {path}")]
    NotAFile { path: String },

    #[error("No valid files to scan.")]
    NoValidFiles,

    #[error("no queued file with id {id}")]
    RecordNotFound { id: String },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ShieldError>;
