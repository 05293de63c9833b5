use std::path::Path;
use std::sync::Arc;

use crate::FileInfo;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Unix-style permission bits (e.g. `0o644`).
/// The facade never interprets the value, it is forwarded to the driver as is.
pub type FileMode = u32;

/// The capability set a storage backend must implement to be usable behind
/// [`FileSystem`](crate::FileSystem).
///
/// The contract is intentionally minimal: no append, no rename, no delete,
/// no streaming. There are no provided methods and no optional members;
/// a conforming backend implements all six operations.
///
/// Every path a driver observes is already in the host's native form
/// (the facade converts from portable slash form before delegating).
///
/// All methods take `&self`. The facade performs no synchronization, so a
/// driver shared across threads is responsible for its own interior
/// mutability and thread-safety.
pub trait Driver {
    /// Creates the directory at `path` and any missing parents.
    fn mkdir_all(&self, path: &Path) -> Result<()>;

    /// Lists the entries of the directory at `path`.
    fn read_dir(&self, path: &Path) -> Result<Vec<FileInfo>>;

    /// Returns the entire content of the file at `path`.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Returns metadata for the entry at `path`.
    fn stat(&self, path: &Path) -> Result<FileInfo>;

    /// Creates a symbolic link at `link` pointing to `original`.
    fn symlink(&self, original: &Path, link: &Path) -> Result<()>;

    /// Writes `data` to the file at `path` with permission bits `perm`,
    /// creating the file if needed.
    fn write_file(&self, path: &Path, data: &[u8], perm: FileMode) -> Result<()>;
}

impl<D: Driver + ?Sized> Driver for &D {
    fn mkdir_all(&self, path: &Path) -> Result<()> {
        (**self).mkdir_all(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FileInfo>> {
        (**self).read_dir(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn stat(&self, path: &Path) -> Result<FileInfo> {
        (**self).stat(path)
    }

    fn symlink(&self, original: &Path, link: &Path) -> Result<()> {
        (**self).symlink(original, link)
    }

    fn write_file(&self, path: &Path, data: &[u8], perm: FileMode) -> Result<()> {
        (**self).write_file(path, data, perm)
    }
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn mkdir_all(&self, path: &Path) -> Result<()> {
        (**self).mkdir_all(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FileInfo>> {
        (**self).read_dir(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn stat(&self, path: &Path) -> Result<FileInfo> {
        (**self).stat(path)
    }

    fn symlink(&self, original: &Path, link: &Path) -> Result<()> {
        (**self).symlink(original, link)
    }

    fn write_file(&self, path: &Path, data: &[u8], perm: FileMode) -> Result<()> {
        (**self).write_file(path, data, perm)
    }
}

impl<D: Driver + ?Sized> Driver for Arc<D> {
    fn mkdir_all(&self, path: &Path) -> Result<()> {
        (**self).mkdir_all(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FileInfo>> {
        (**self).read_dir(path)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn stat(&self, path: &Path) -> Result<FileInfo> {
        (**self).stat(path)
    }

    fn symlink(&self, original: &Path, link: &Path) -> Result<()> {
        (**self).symlink(original, link)
    }

    fn write_file(&self, path: &Path, data: &[u8], perm: FileMode) -> Result<()> {
        (**self).write_file(path, data, perm)
    }
}

pub mod utils {
    use std::path::PathBuf;

    /// Converts a portable slash-separated path to the host's native form.
    /// On Unix this is the identity conversion.
    pub fn from_slash(path: &str) -> PathBuf {
        if std::path::MAIN_SEPARATOR == '/' {
            PathBuf::from(path)
        } else {
            PathBuf::from(path.replace('/', std::path::MAIN_SEPARATOR_STR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils;
    use std::path::PathBuf;

    #[test]
    fn test_from_slash_plain() {
        let native = utils::from_slash("a/b/c");
        assert_eq!(
            native,
            PathBuf::from(format!("a{sep}b{sep}c", sep = std::path::MAIN_SEPARATOR))
        );
    }

    #[test]
    fn test_from_slash_no_separator() {
        assert_eq!(utils::from_slash("plain.txt"), PathBuf::from("plain.txt"));
    }

    #[test]
    fn test_from_slash_empty() {
        assert_eq!(utils::from_slash(""), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_slash_is_identity_on_unix() {
        assert_eq!(utils::from_slash("/a/b/c"), PathBuf::from("/a/b/c"));
    }
}
