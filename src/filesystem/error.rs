// src/filesystem/error.rs

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::permissions::PermissionError;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Path does not exist: {path}")]
    NotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Already exists: {path}")]
    AlreadyExists { path: String },

    #[error("Permission denied: {path}")]
    AccessDenied { path: String },

    #[error("{source}")]
    InvalidFormat {
        #[from]
        source: PermissionError,
    },

    #[error("Failed to move '{from}' to '{to}': {reason}")]
    MoveFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Cannot go back: already at the filesystem root")]
    NoParent,

    #[error("{failed} of {total} entries could not be copied (first: {first})")]
    CopyFailed {
        failed: usize,
        total: usize,
        first: String,
    },

    #[error("I/O error: {reason}")]
    IoError { reason: String },
}

impl FsError {
    /// Classify an `io::Error` raised while touching `path`.
    ///
    /// Only the kinds with a dedicated variant are mapped; everything else
    /// keeps the OS message.
    pub fn from_io(e: io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::PermissionDenied => FsError::AccessDenied { path },
            _ => FsError::IoError {
                reason: format!("'{}': {}", path, e),
            },
        }
    }
}
