//! Directory traversal and file map output.
//!
//! [`TreeWalker`] lists a directory tree into a [`FileMap`], an indented
//! pre-order listing with two spaces per nesting level. [`MapWriter`]
//! persists the rendered map, replacing any previous content.

mod entry;
mod file_map;
mod map_writer;
mod tree_walker;

pub use entry::{DirectoryEntry, DirectoryLister, EntryKind, OsDirectoryLister};
pub use file_map::FileMap;
pub use map_writer::{MapWriteError, MapWriter};
pub use tree_walker::{TreeWalker, WalkError};
