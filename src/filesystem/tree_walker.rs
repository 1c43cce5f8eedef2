use std::path::{Path, PathBuf};
use std::vec;

use snafu::{ResultExt, Snafu};
use tracing::{debug, trace, warn};

use crate::application::data::ErrorPolicy;
use crate::ext::PathExt;
use crate::filesystem::{DirectoryEntry, DirectoryLister, EntryKind, FileMap, OsDirectoryLister};

/// A directory whose entries are still being emitted.
struct Frame {
    identity: PathBuf,
    depth: usize,
    entries: vec::IntoIter<DirectoryEntry>,
}

/// Produces a [`FileMap`] by depth-first pre-order traversal.
///
/// Traversal keeps an explicit stack of open directories rather than
/// recursing, so tree depth is bounded by memory only. A directory that
/// resolves to one of its own ancestors (a symlink loop) is listed but not
/// descended into.
pub struct TreeWalker<L = OsDirectoryLister> {
    lister: L,
    error_policy: ErrorPolicy,
}

impl TreeWalker<OsDirectoryLister> {
    pub fn new(error_policy: ErrorPolicy) -> Self {
        Self::with_lister(OsDirectoryLister, error_policy)
    }
}

impl<L: DirectoryLister> TreeWalker<L> {
    pub fn with_lister(lister: L, error_policy: ErrorPolicy) -> Self {
        Self {
            lister,
            error_policy,
        }
    }

    /// Walks everything below `root`. The root itself does not appear in the
    /// map and failing to read it is always an error, whatever the policy.
    pub fn walk(&self, root: &Path) -> Result<FileMap, WalkError> {
        debug!("Walking {}", root.resolved_display());
        let identity = self
            .lister
            .canonicalize(root)
            .context(ResolveSnafu { path: root })?;
        let entries = self.lister.list(root).context(ReadDirSnafu { path: root })?;

        let mut file_map = FileMap::default();
        let mut stack = vec![Frame {
            identity,
            depth: 0,
            entries: entries.into_iter(),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let depth = frame.depth;
            trace!("{} {}", entry.kind, entry.path.display());

            match entry.kind {
                EntryKind::File => file_map.push(depth, entry.name),
                EntryKind::Directory => {
                    file_map.push(depth, entry.name.clone());
                    let child = self.open(&entry.path, depth + 1, &stack, &mut file_map)?;
                    if let Some(child) = child {
                        stack.push(child);
                    }
                }
                EntryKind::Other => {
                    debug!(
                        "Skipping '{}': neither a file nor a directory",
                        entry.path.display()
                    );
                }
            }
        }

        debug!("Walk produced {} lines", file_map.len());
        Ok(file_map)
    }

    /// Prepares a frame for `dir`, or `None` when it must not be descended into.
    fn open(
        &self,
        dir: &Path,
        depth: usize,
        ancestors: &[Frame],
        file_map: &mut FileMap,
    ) -> Result<Option<Frame>, WalkError> {
        let identity = match self.lister.canonicalize(dir) {
            Ok(identity) => identity,
            Err(source) => {
                let error = WalkError::ResolveError {
                    path: dir.to_path_buf(),
                    source,
                };
                return self.on_unreadable(error, dir, file_map);
            }
        };

        if ancestors.iter().any(|frame| frame.identity == identity) {
            warn!(
                "Not descending into '{}': it leads back to '{}'",
                dir.display(),
                identity.display()
            );
            return Ok(None);
        }

        match self.lister.list(dir) {
            Ok(entries) => Ok(Some(Frame {
                identity,
                depth,
                entries: entries.into_iter(),
            })),
            Err(source) => self.on_unreadable(
                WalkError::ReadDirError {
                    path: dir.to_path_buf(),
                    source,
                },
                dir,
                file_map,
            ),
        }
    }

    fn on_unreadable(
        &self,
        error: WalkError,
        dir: &Path,
        file_map: &mut FileMap,
    ) -> Result<Option<Frame>, WalkError> {
        match self.error_policy {
            ErrorPolicy::Abort => Err(error),
            ErrorPolicy::Skip => {
                warn!("{error}, leaving its contents out");
                file_map.mark_skipped(dir);
                Ok(None)
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum WalkError {
    #[snafu(display("Failed to resolve directory {}", path.display()))]
    ResolveError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read directory {}", path.display()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
}
