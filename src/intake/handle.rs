//! File handles: a name, a declared size and two fallible content reads.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::error::{Result, ShieldError};

/// Opaque reference to a file's metadata and content.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// File name used for extension lookup and deduplication.
    fn name(&self) -> &str;

    /// Declared size in bytes.
    fn size(&self) -> u64;

    /// Where the handle came from, for display.
    fn source(&self) -> String {
        self.name().to_string()
    }

    /// Read at most `len` leading bytes.
    async fn read_prefix(&self, len: usize) -> Result<Vec<u8>>;

    /// Read the entire content as text. Invalid UTF-8 is replaced, not rejected.
    async fn read_text(&self) -> Result<String>;
}

/// A file on the local disk.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl DiskFile {
    /// Stat `path` and capture its name and size.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let meta = tokio::fs::metadata(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShieldError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ShieldError::Io(e)
            }
        })?;
        if !meta.is_file() {
            return Err(ShieldError::NotAFile {
                path: path.display().to_string(),
            });
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            size: meta.len(),
            name,
            path,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FileHandle for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn source(&self) -> String {
        self.path.display().to_string().replace('\\', "/")
    }

    async fn read_prefix(&self, len: usize) -> Result<Vec<u8>> {
        let file = tokio::fs::File::open(&self.path).await?;
        let mut buf = Vec::with_capacity(len.min(self.size as usize));
        file.take(len as u64).read_to_end(&mut buf).await?;
        Ok(buf)
    }

    async fn read_text(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// An in-memory file, mainly for embedding and tests.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    bytes: Vec<u8>,
    fail_prefix: bool,
    fail_text: bool,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            fail_prefix: false,
            fail_text: false,
        }
    }

    /// Make `read_prefix` fail.
    #[must_use]
    pub fn failing_prefix_read(mut self) -> Self {
        self.fail_prefix = true;
        self
    }

    /// Make `read_text` fail.
    #[must_use]
    pub fn failing_text_read(mut self) -> Self {
        self.fail_text = true;
        self
    }
}

#[async_trait]
impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_prefix(&self, len: usize) -> Result<Vec<u8>> {
        if self.fail_prefix {
            return Err(ShieldError::Other(format!("{}: prefix read failed", self.name)));
        }
        let end = self.bytes.len().min(len);
        Ok(self.bytes[..end].to_vec())
    }

    async fn read_text(&self) -> Result<String> {
        if self.fail_text {
            return Err(ShieldError::Other(format!("{}: text read failed", self.name)));
        }
        Ok(String::from_utf8_lossy(&self.bytes).into_owned())
    }
}
