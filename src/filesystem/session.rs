// src/filesystem/session.rs
//!
//! Session directory
//!
//! The shell keeps its own current directory instead of mutating the process
//! working directory. Relative command arguments are resolved against it, and
//! only `change_directory` / `go_to_parent` move it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::FsError;

#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    /// Start a session in `start`, which must be an existing directory
    pub fn new(start: &Path) -> Result<Self, FsError> {
        Ok(Self {
            cwd: open_directory(start)?,
        })
    }

    /// Start in the process working directory, falling back to the root
    /// when it can't be determined.
    pub fn from_process_cwd() -> Result<Self, FsError> {
        let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self::new(&start)
    }

    pub fn current_dir(&self) -> &Path {
        &self.cwd
    }

    /// The session directory if it still resolves to a directory.
    /// `None` once it has been removed or renamed underneath us.
    pub fn display_dir(&self) -> Option<&Path> {
        self.cwd.is_dir().then_some(self.cwd.as_path())
    }

    /// Resolve an optional directory argument: empty means the session
    /// directory, absolute paths are used as-is.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        if arg.is_empty() {
            self.cwd.clone()
        } else {
            self.cwd.join(arg)
        }
    }

    /// Resolve a path argument that names a specific target. An empty
    /// argument names nothing and never falls back to the session directory.
    pub fn resolve_target(&self, arg: &str) -> Result<PathBuf, FsError> {
        if arg.is_empty() {
            return Err(FsError::NotFound {
                path: String::new(),
            });
        }
        Ok(self.cwd.join(arg))
    }

    /// Move the session to `target`. On failure the previous directory is kept.
    pub fn change_directory(&mut self, target: &str) -> Result<(), FsError> {
        if target.is_empty() {
            return Ok(());
        }

        let resolved = open_directory(&self.resolve(target))?;
        debug!(from = %self.cwd.display(), to = %resolved.display(), "changed directory");
        self.cwd = resolved;
        Ok(())
    }

    pub fn go_to_parent(&mut self) -> Result<(), FsError> {
        let parent = self.cwd.parent().ok_or(FsError::NoParent)?.to_path_buf();
        let resolved = open_directory(&parent)?;
        self.cwd = resolved;
        Ok(())
    }
}

/// Canonical form of `path` after checking it is a directory we can open.
fn open_directory(path: &Path) -> Result<PathBuf, FsError> {
    let canonical = fs::canonicalize(path).map_err(|e| FsError::from_io(e, path))?;

    if !canonical.is_dir() {
        return Err(FsError::NotADirectory {
            path: path.display().to_string(),
        });
    }

    fs::read_dir(&canonical).map_err(|e| FsError::from_io(e, path))?;

    Ok(canonical)
}
