use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use derive_more::Display;

use crate::ext::PathExt;

/// What an entry resolves to. Symlinks are classified by their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
    /// Broken symlinks, sockets, FIFOs, devices
    #[display("other")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        Self {
            name: path.entry_name(),
            path,
            kind,
        }
    }
}

/// Source of directory listings for the tree walker.
pub trait DirectoryLister {
    /// Immediate children of `dir`, in whatever order the source yields them.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>>;

    /// Stable identity of a directory, used to recognise cycles.
    fn canonicalize(&self, dir: &Path) -> io::Result<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectoryLister;

impl OsDirectoryLister {
    fn classify(path: &Path) -> EntryKind {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => EntryKind::Directory,
            Ok(metadata) if metadata.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        }
    }
}

impl DirectoryLister for OsDirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        fs::read_dir(dir)?
            .map(|entry| {
                let path = entry?.path();
                let kind = Self::classify(&path);
                Ok(DirectoryEntry::new(path, kind))
            })
            .collect()
    }

    fn canonicalize(&self, dir: &Path) -> io::Result<PathBuf> {
        dir.canonicalize()
    }
}
