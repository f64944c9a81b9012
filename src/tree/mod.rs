//! Entry collection and hierarchy resolution.

mod layout;
pub(crate) mod walk;

use std::path::{Path, PathBuf};

pub use layout::{own_path, Tree};
pub use walk::{collect_entries, size_label};

/// Arena index of an [`Entry`] inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl EntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Immediately preceding and following sibling in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub prev: Option<EntryId>,
    pub next: Option<EntryId>,
}

/// A single filesystem object captured by the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Base name of the filesystem object.
    pub name: String,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    /// Full path as walked.
    pub path: PathBuf,
    /// Path of the containing directory relative to the root, joined with
    /// the platform separator, without leading or trailing separators.
    pub parent_path: String,
    /// Root-relative path without lossy conversion. Parent, child and
    /// sibling links are keyed on this, never on the display strings.
    pub relative: PathBuf,
    /// Display suffix: empty for directories, `" (empty)"` or `" (<N>b)"` for files.
    pub size: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Child entries in display order. Filled in by the resolver.
    pub children: Vec<EntryId>,
    /// Containing directory, `None` for depth-1 entries.
    pub parent: Option<EntryId>,
    /// Sibling links. Filled in by the resolver.
    pub neighbors: Neighbors,
    /// Rendered output line(s) for this entry.
    pub fragment: String,
}

impl Entry {
    /// Create an unlinked entry. `len` is ignored for directories.
    pub fn new(
        name: impl Into<String>,
        depth: usize,
        path: impl Into<PathBuf>,
        parent_path: impl Into<String>,
        is_dir: bool,
        len: u64,
    ) -> Self {
        let name = name.into();
        let parent_path = parent_path.into();
        let relative = Path::new(&parent_path).join(&name);
        Self {
            name,
            depth,
            path: path.into(),
            parent_path,
            relative,
            size: size_label(is_dir, len),
            is_dir,
            children: Vec::new(),
            parent: None,
            neighbors: Neighbors::default(),
            fragment: String::new(),
        }
    }

    /// Replace the root-relative key derived from `parent_path` and `name`.
    pub fn with_relative(mut self, relative: impl Into<PathBuf>) -> Self {
        self.relative = relative.into();
        self
    }

    /// Relative path of the containing directory; empty for depth-1 entries.
    pub fn parent_key(&self) -> &Path {
        self.relative.parent().unwrap_or(Path::new(""))
    }

    /// Whether this entry is the last of its sibling group.
    pub fn is_last(&self) -> bool {
        self.neighbors.next.is_none()
    }
}

/// Configuration for entry collection.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Whether regular files are collected alongside directories.
    pub include_files: bool,
}

/// Abstraction over filesystem enumeration so it can be swapped or mocked.
pub trait EntrySource {
    fn collect(&self, root: &Path, config: &TreeConfig) -> Vec<Entry>;
}

/// Default `EntrySource` that delegates to the walkdir-based collector.
pub struct WalkdirSource;

impl EntrySource for WalkdirSource {
    fn collect(&self, root: &Path, config: &TreeConfig) -> Vec<Entry> {
        collect_entries(root, config)
    }
}
