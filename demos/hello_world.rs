use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::anyhow;

use vfs_facade::{Driver, FileInfo, FileMode, FileSystem, Result};

/// A toy in-memory driver: files in a map, directories implied by keys.
/// Real backends live outside this crate; this one exists to show the
/// facade in action without touching the disk.
struct MemDriver {
    files: RefCell<BTreeMap<PathBuf, (Vec<u8>, FileMode)>>,
}

impl MemDriver {
    fn new() -> MemDriver {
        MemDriver {
            files: RefCell::new(BTreeMap::new()),
        }
    }
}

impl Driver for MemDriver {
    fn mkdir_all(&self, _path: &Path) -> Result<()> {
        // Directories are implicit in the map keys.
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<FileInfo>> {
        let files = self.files.borrow();
        let entries = files
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, (data, perm))| {
                FileInfo::new(
                    p.file_name().unwrap().to_string_lossy(),
                    data.len() as u64,
                    *perm,
                    SystemTime::now(),
                    false,
                )
            })
            .collect();
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .map(|(data, _)| data.clone())
            .ok_or_else(|| anyhow!("no such file: {}", path.display()))
    }

    fn stat(&self, path: &Path) -> Result<FileInfo> {
        let files = self.files.borrow();
        let (data, perm) = files
            .get(path)
            .ok_or_else(|| anyhow!("no such file: {}", path.display()))?;
        Ok(FileInfo::new(
            path.file_name().unwrap_or_default().to_string_lossy(),
            data.len() as u64,
            *perm,
            SystemTime::now(),
            false,
        ))
    }

    fn symlink(&self, original: &Path, link: &Path) -> Result<()> {
        let mut files = self.files.borrow_mut();
        if files.contains_key(link) {
            return Err(anyhow!("already exists: {}", link.display()));
        }
        let entry = files
            .get(original)
            .cloned()
            .ok_or_else(|| anyhow!("no such file: {}", original.display()))?;
        files.insert(link.to_path_buf(), entry);
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8], perm: FileMode) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), (data.to_vec(), perm));
        Ok(())
    }
}

fn main() {
    // The caller keeps the driver; the facade borrows it.
    let drv = MemDriver::new();
    let fs = FileSystem::new(&drv);

    // Portable slash paths on the caller's side...
    fs.mkdir_all("docs").unwrap();
    fs.write_file("docs/first.txt", b"Hello", 0o644).unwrap();
    fs.write_file("docs/second.txt", b"World", 0o644).unwrap();

    // ...host-native paths on the driver's side.
    let first = fs.read_file("docs/first.txt").unwrap();
    let second = fs.read_file("docs/second.txt").unwrap();

    println!(
        "{}, {}!",
        String::from_utf8(first).unwrap(),
        String::from_utf8(second).unwrap()
    );

    for info in fs.read_dir("docs").unwrap() {
        println!("{} ({} bytes, mode {:o})", info.name(), info.len(), info.perm());
    }
}
