// src/filesystem/types.rs

use std::fmt;
use std::path::PathBuf;

use crate::permissions::Permissions;

/// Shown instead of the rwx string when an entry's metadata can't be read.
pub const UNKNOWN_PERMISSIONS: &str = "??? ??? ???";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
    /// Type could not be determined (broken symlink, access denied).
    Unknown,
}

impl EntryKind {
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Dir => "DIR",
            EntryKind::File => "FILE",
            EntryKind::Other => "OTHER",
            EntryKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Directory entry
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Entry name (not full path)
    pub name: String,
    /// Full path
    pub path: PathBuf,
    pub kind: EntryKind,
    /// `None` when the entry could not be stat'ed
    pub permissions: Option<Permissions>,
}

impl DirEntry {
    pub fn permissions_display(&self) -> String {
        self.permissions
            .map(|p| p.to_display_string())
            .unwrap_or_else(|| UNKNOWN_PERMISSIONS.to_string())
    }
}
