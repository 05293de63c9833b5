//! End-to-end test: the facade wired to a driver backed by a throwaway
//! directory on the host. The driver lives only in this test; the crate
//! itself ships no backends.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Context;
use tempdir::TempDir;

use vfs_facade::{Driver, FileInfo, FileMode, FileSystem, Result};

/// Minimal disk-backed driver rooted at a directory. Incoming paths are
/// host-native and relative; they are joined onto the root.
struct DiskDriver {
    root: PathBuf,
}

impl DiskDriver {
    fn new<P: AsRef<Path>>(root: P) -> DiskDriver {
        DiskDriver {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn host(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn info(path: &Path, meta: &fs::Metadata) -> Result<FileInfo> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);

        #[cfg(unix)]
        let perm = {
            use std::os::unix::fs::PermissionsExt;
            meta.permissions().mode() & 0o777
        };
        #[cfg(not(unix))]
        let perm = if meta.permissions().readonly() { 0o444 } else { 0o666 };

        Ok(FileInfo::new(name, meta.len(), perm, modified, meta.is_dir()))
    }
}

impl Driver for DiskDriver {
    fn mkdir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(self.host(path))?;
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FileInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(self.host(path))? {
            let entry = entry?;
            let meta = entry.metadata()?;
            entries.push(Self::info(&entry.path(), &meta)?);
        }
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let host = self.host(path);
        fs::read(&host).with_context(|| format!("read {}", host.display()))
    }

    fn stat(&self, path: &Path) -> Result<FileInfo> {
        let host = self.host(path);
        let meta = fs::symlink_metadata(&host)?;
        Self::info(&host, &meta)
    }

    fn symlink(&self, original: &Path, link: &Path) -> Result<()> {
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(self.host(original), self.host(link))?;
            Ok(())
        }
        #[cfg(not(unix))]
        {
            let _ = (original, link);
            Err(anyhow::anyhow!("symlinks not supported on this platform"))
        }
    }

    fn write_file(&self, path: &Path, data: &[u8], perm: FileMode) -> Result<()> {
        let host = self.host(path);
        fs::write(&host, data)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&host, fs::Permissions::from_mode(perm))?;
        }
        #[cfg(not(unix))]
        let _ = perm;

        Ok(())
    }
}

#[test]
fn test_full_session_against_real_directory() {
    let tmp = TempDir::new("vfs_facade_it").unwrap();
    let drv = DiskDriver::new(tmp.path());
    let fs = FileSystem::new(&drv);

    fs.mkdir_all("docs/drafts").unwrap();
    fs.write_file("docs/drafts/note.txt", b"Hello", 0o644).unwrap();
    fs.write_file("docs/drafts/todo.txt", b"World", 0o600).unwrap();

    assert_eq!(fs.read_file("docs/drafts/note.txt").unwrap(), b"Hello");

    let info = fs.stat("docs/drafts/note.txt").unwrap();
    assert_eq!(info.name(), "note.txt");
    assert_eq!(info.len(), 5);
    assert!(info.is_file());
    #[cfg(unix)]
    assert_eq!(info.perm(), 0o644);

    let listing = fs.read_dir("docs/drafts").unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].name(), "note.txt");
    assert_eq!(listing[1].name(), "todo.txt");

    let dir_info = fs.stat("docs").unwrap();
    assert!(dir_info.is_dir());
}

#[cfg(unix)]
#[test]
fn test_symlink_on_real_directory() {
    let tmp = TempDir::new("vfs_facade_ln").unwrap();
    let drv = DiskDriver::new(tmp.path());
    let fs = FileSystem::new(&drv);

    fs.write_file("target.txt", b"data", 0o644).unwrap();
    fs.symlink("target.txt", "alias.txt").unwrap();

    // The link resolves through the host file system.
    assert_eq!(fs.read_file("alias.txt").unwrap(), b"data");

    // Re-creating an existing link is the driver's error, passed through.
    assert!(fs.symlink("target.txt", "alias.txt").is_err());
}

#[test]
fn test_missing_file_error_is_the_drivers() {
    let tmp = TempDir::new("vfs_facade_err").unwrap();
    let drv = DiskDriver::new(tmp.path());
    let fs = FileSystem::new(&drv);

    let err = fs.read_file("no/such/file").unwrap_err();
    assert!(err.to_string().contains("no"));
    assert!(fs.stat("missing").is_err());
    assert!(fs.read_dir("missing").is_err());
}
