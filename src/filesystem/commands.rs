// src/filesystem/commands.rs
//!
//! Filesystem operations behind the shell commands
//!
//! Every function takes paths that are already resolved against the session
//! directory and converts native I/O failures into `FsError` at its boundary.

use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::error::FsError;
use super::types::{DirEntry, EntryKind};
use crate::permissions::{decode_octal, Permissions};

// ============================================================================
// Listing
// ============================================================================

/// Read directory contents in the order the OS returns them
pub fn list_directory(path: &Path) -> Result<Vec<DirEntry>, FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;

    if !metadata.is_dir() {
        return Err(FsError::NotADirectory {
            path: path.display().to_string(),
        });
    }

    let reader = fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;

    let mut entries = Vec::new();
    for entry in reader {
        match entry {
            Ok(entry) => entries.push(describe_entry(&entry)),
            // Entry vanished or can't be read; keep listing the rest
            Err(e) => debug!(dir = %path.display(), error = %e, "skipping unreadable entry"),
        }
    }

    Ok(entries)
}

fn describe_entry(entry: &fs::DirEntry) -> DirEntry {
    let path = entry.path();
    // Follows symlinks, so a dangling link ends up as Unknown with no permissions
    let target = fs::metadata(&path);

    let kind = match entry.file_type() {
        Ok(file_type) if file_type.is_dir() => EntryKind::Dir,
        Ok(file_type) if file_type.is_file() => EntryKind::File,
        Ok(file_type) if file_type.is_symlink() => match &target {
            Ok(m) if m.is_dir() => EntryKind::Dir,
            Ok(m) if m.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(_) => EntryKind::Unknown,
        },
        Ok(_) => EntryKind::Other,
        Err(_) => EntryKind::Unknown,
    };

    DirEntry {
        name: entry.file_name().to_string_lossy().to_string(),
        permissions: target.ok().map(|m| permissions_of(&m)),
        path,
        kind,
    }
}

// ============================================================================
// Copy / Move / Remove
// ============================================================================

/// Copy a file, or a directory tree recursively, overwriting existing files
pub fn copy_path(from: &Path, to: &Path) -> Result<(), FsError> {
    let metadata = fs::metadata(from).map_err(|e| FsError::from_io(e, from))?;

    if metadata.is_dir() {
        copy_tree(from, to)
    } else {
        copy_file(from, to).map_err(|reason| FsError::IoError {
            reason: format!(
                "Failed to copy '{}' to '{}': {}",
                from.display(),
                to.display(),
                reason
            ),
        })
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<(), String> {
    // Create parent directories for destination if needed
    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create parent directories: {}", e))?;
        }
    }

    // Copying a file onto itself would truncate it first
    if is_same_file(from, to) {
        debug!(path = %from.display(), "source and destination are the same file");
        return Ok(());
    }

    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;
    fs_extra::file::copy(from, to, &options).map_err(|e| e.to_string())?;

    Ok(())
}

/// Recursive copy over a snapshot of the source tree.
///
/// The walk is collected before the first write, so a destination nested
/// inside the source never feeds new entries back into the copy.
fn copy_tree(from: &Path, to: &Path) -> Result<(), FsError> {
    let mut failures: Vec<String> = Vec::new();

    let snapshot: Vec<walkdir::DirEntry> = WalkDir::new(from)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                failures.push(e.to_string());
                None
            }
        })
        .collect();

    let total = snapshot.len() + failures.len();
    let mut copied = 0usize;

    for entry in &snapshot {
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);
        let file_type = entry.file_type();

        let result = if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| e.to_string())
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)
        } else {
            copy_file(entry.path(), &target)
        };

        match result {
            Ok(()) => copied += 1,
            Err(reason) => {
                warn!(source = %entry.path().display(), dest = %target.display(), %reason, "copy failed");
                failures.push(format!("{}: {}", entry.path().display(), reason));
            }
        }
    }

    info!(from = %from.display(), to = %to.display(), copied, total, "directory copied");

    if failures.is_empty() {
        Ok(())
    } else {
        Err(FsError::CopyFailed {
            failed: failures.len(),
            total,
            first: failures.swap_remove(0),
        })
    }
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<(), String> {
    let link = fs::read_link(from).map_err(|e| e.to_string())?;
    if fs::symlink_metadata(to).is_ok() {
        fs::remove_file(to).map_err(|e| e.to_string())?;
    }
    std::os::unix::fs::symlink(link, to).map_err(|e| e.to_string())
}

#[cfg(not(unix))]
fn copy_symlink(_from: &Path, _to: &Path) -> Result<(), String> {
    Err("symbolic links are not copied on this platform".to_string())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Rename/move a file or directory. No copy+delete fallback across devices.
pub fn move_path(from: &Path, to: &Path) -> Result<(), FsError> {
    fs::rename(from, to).map_err(|e| FsError::MoveFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(from = %from.display(), to = %to.display(), "moved");
    Ok(())
}

/// Remove a file or directory, directories recursively. Symlinks are
/// unlinked, never followed.
pub fn remove_path(path: &Path) -> Result<(), FsError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| FsError::from_io(e, path))?;

    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(|e| FsError::IoError {
            reason: format!("Failed to remove directory '{}': {}", path.display(), e),
        })?;
    } else {
        fs::remove_file(path).map_err(|e| FsError::IoError {
            reason: format!("Failed to remove file '{}': {}", path.display(), e),
        })?;
    }

    debug!(path = %path.display(), "removed");
    Ok(())
}

// ============================================================================
// Create
// ============================================================================

/// Create a directory (and parent directories if needed)
pub fn make_directory(path: &Path) -> Result<(), FsError> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(FsError::AlreadyExists {
            path: path.display().to_string(),
        });
    }

    fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))?;

    Ok(())
}

/// Ensure a file exists without touching the content of an existing one
pub fn make_empty_file(path: &Path) -> Result<(), FsError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FsError::from_io(e, path))?;

    Ok(())
}

// ============================================================================
// Permissions
// ============================================================================

pub fn get_permissions(path: &Path) -> Result<Permissions, FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
    Ok(permissions_of(&metadata))
}

/// Replace the rwx bits of `path` with exactly the given octal value
pub fn set_permissions(path: &Path, octal: &str) -> Result<(), FsError> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
    let permissions = decode_octal(octal)?;

    fs::set_permissions(path, native_permissions(&metadata, permissions))
        .map_err(|e| FsError::from_io(e, path))?;

    debug!(path = %path.display(), mode = %permissions.to_octal(), "permissions set");
    Ok(())
}

#[cfg(unix)]
fn permissions_of(metadata: &fs::Metadata) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn permissions_of(metadata: &fs::Metadata) -> Permissions {
    let mut mode = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    if metadata.is_dir() {
        mode |= 0o111;
    }
    Permissions::from_mode(mode)
}

#[cfg(unix)]
fn native_permissions(_metadata: &fs::Metadata, permissions: Permissions) -> fs::Permissions {
    use std::os::unix::fs::PermissionsExt;
    fs::Permissions::from_mode(permissions.mode())
}

#[cfg(not(unix))]
fn native_permissions(metadata: &fs::Metadata, permissions: Permissions) -> fs::Permissions {
    use crate::permissions::{Principal, WRITE};
    let mut native = metadata.permissions();
    native.set_readonly(!permissions.has(Principal::Owner, WRITE));
    native
}
