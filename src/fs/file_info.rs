use std::time::SystemTime;

use crate::core::FileMode;

/// Metadata for a single file system entry, as reported by a driver.
///
/// Returned by `stat` and `read_dir`. The facade never inspects the fields;
/// it only passes the record through from the driver to the caller. The
/// driver decides what the fields mean for its storage (e.g. an in-memory
/// backend may report a synthetic modification time).
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    name: String,
    len: u64,
    perm: FileMode,
    modified: SystemTime,
    is_dir: bool,
}

impl FileInfo {
    pub fn new(
        name: impl Into<String>,
        len: u64,
        perm: FileMode,
        modified: SystemTime,
        is_dir: bool,
    ) -> FileInfo {
        FileInfo {
            name: name.into(),
            len,
            perm,
            modified,
            is_dir,
        }
    }

    /// Base name of the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Permission bits.
    pub fn perm(&self) -> FileMode {
        self.perm
    }

    /// Modification time.
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}
