//! This module provides the facade that fronts a storage driver. The facade
//! owns no policy: it converts portable paths to host-native form, delegates
//! to the bound driver, and hands the driver's result back untouched.

use crate::core::{Driver, FileMode, Result, utils};
use crate::fs::FileInfo;

/// A file system bound to a single storage [`Driver`].
///
/// `FileSystem` is a thin forwarding layer: every operation converts its
/// path arguments from portable slash-separated form to the host's native
/// separator, then delegates to the driver. Results and errors are returned
/// verbatim; the facade performs no retries, no wrapping, and no
/// reinterpretation.
///
/// A driver must be supplied at construction time, so an unusable facade
/// cannot exist. To keep ownership of the driver on the caller's side, pass
/// a reference (`&D` implements `Driver` whenever `D` does), or share it via
/// `Arc<D>`.
///
/// ### Usage notes:
/// - Holds no mutable state beyond the driver binding; `Clone` when the
///   driver is `Clone`, and freely shareable if the driver is.
/// - Thread-safety is entirely the driver's responsibility; the facade adds
///   no synchronization.
/// - Errors are returned via `anyhow::Result` exactly as the driver produced
///   them.
///
/// ### Example:
/// ```
/// use vfs_facade::{Driver, FileSystem, Result};
///
/// fn publish<D: Driver>(drv: &D) -> Result<()> {
///     let fs = FileSystem::new(drv);
///     fs.mkdir_all("reports/2026")?;
///     fs.write_file("reports/2026/summary.txt", b"done", 0o644)?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileSystem<D> {
    drv: D,
}

impl<D: Driver> FileSystem<D> {
    /// Creates a new FileSystem with `drv` as its engine.
    pub fn new(drv: D) -> FileSystem<D> {
        FileSystem { drv }
    }

    /// Creates directories and their parents, if needed.
    pub fn mkdir_all<P: AsRef<str>>(&self, dirname: P) -> Result<()> {
        self.drv.mkdir_all(&utils::from_slash(dirname.as_ref()))
    }

    /// Lists the entries of the directory `dirname`, in whatever order the
    /// driver reports them.
    pub fn read_dir<P: AsRef<str>>(&self, dirname: P) -> Result<Vec<FileInfo>> {
        self.drv.read_dir(&utils::from_slash(dirname.as_ref()))
    }

    /// Returns the content of `filename`.
    pub fn read_file<P: AsRef<str>>(&self, filename: P) -> Result<Vec<u8>> {
        self.drv.read_file(&utils::from_slash(filename.as_ref()))
    }

    /// Returns information about a file.
    pub fn stat<P: AsRef<str>>(&self, filename: P) -> Result<FileInfo> {
        self.drv.stat(&utils::from_slash(filename.as_ref()))
    }

    /// Creates a symlink at `link` pointing to `original`.
    /// Both paths are converted to host-native form independently.
    pub fn symlink<P: AsRef<str>>(&self, original: P, link: P) -> Result<()> {
        self.drv.symlink(
            &utils::from_slash(original.as_ref()),
            &utils::from_slash(link.as_ref()),
        )
    }

    /// Writes `data` to `filename` with permission bits `perm`.
    /// The payload and mode reach the driver unmodified.
    pub fn write_file<P: AsRef<str>>(&self, filename: P, data: &[u8], perm: FileMode) -> Result<()> {
        self.drv
            .write_file(&utils::from_slash(filename.as_ref()), data, perm)
    }
}
