use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::Result;
use crate::intake::handle::DiskFile;
use crate::intake::language::{extension_of, is_supported_extension};

/// Files picked from a directory, split by whether their extension is accepted.
#[derive(Debug, Default)]
pub struct DirectorySelection {
    /// Supported files in walk order.
    pub supported: Vec<DiskFile>,
    /// Number of files left out because of their extension.
    pub skipped: usize,
}

impl DirectorySelection {
    #[must_use]
    pub fn total(&self) -> usize {
        self.supported.len() + self.skipped
    }
}

/// Directory walker that respects .gitignore.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the directory and open every file with a supported extension.
    pub async fn select(&self) -> Result<DirectorySelection> {
        let mut selection = DirectorySelection::default();
        for path in self.walk() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !is_supported_extension(&extension_of(&name)) {
                selection.skipped += 1;
                continue;
            }
            selection.supported.push(DiskFile::open(path).await?);
        }
        tracing::debug!(
            root = %self.root.display(),
            supported = selection.supported.len(),
            skipped = selection.skipped,
            "directory scanned"
        );
        Ok(selection)
    }

    fn walk(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(true) // skip hidden dirs like .git
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .follow_links(false) // Prevent symlink loops
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                // Skip common non-code directories
                !matches!(
                    name.as_ref(),
                    "node_modules"
                        | "target"
                        | ".codeshield"
                        | ".git"
                        | "vendor"
                        | "dist"
                        | "build"
                        | "__pycache__"
                        | ".venv"
                        | "venv"
                )
            })
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .collect();
        // Stable order so batches are reproducible across platforms.
        paths.sort();
        paths
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
