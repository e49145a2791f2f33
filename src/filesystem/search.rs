// src/filesystem/search.rs
//!
//! Recursive name search
//!

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::error::FsError;

/// Walk the tree below `start` depth-first and collect every path whose base
/// name contains `fragment` (case-sensitive, plain substring).
///
/// Only a start directory that can't be opened is an error. Unreadable
/// subdirectories and entries that disappear mid-walk are skipped.
pub fn search(start: &Path, fragment: &str) -> Result<Vec<PathBuf>, FsError> {
    let metadata = fs::metadata(start).map_err(|e| FsError::from_io(e, start))?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory {
            path: start.display().to_string(),
        });
    }
    // Surface AccessDenied on the root itself instead of skipping it
    fs::read_dir(start).map_err(|e| FsError::from_io(e, start))?;

    let mut matches = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(start).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skipped += 1;
                debug!(error = %e, "search skipping entry");
                continue;
            }
        };

        if entry.file_name().to_string_lossy().contains(fragment) {
            matches.push(entry.into_path());
        }
    }

    debug!(start = %start.display(), fragment, found = matches.len(), skipped, "search finished");
    Ok(matches)
}
