use std::path::{Path, PathBuf};

use eyre::Result;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated declarations)
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// A generated declaration file waiting to be written
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (always overwrites)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    /// Set how an existing file at the same path is handled
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self) -> Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if self.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}
