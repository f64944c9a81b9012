#![forbid(unsafe_code)]
//! dirtree — print a directory hierarchy as a box-drawing tree.
//!
//! The pipeline collects a flat list of entries, resolves parent, child and
//! sibling links over it, renders a connector line per entry and prints the
//! lines depth-first.

pub mod cli;
pub mod error;
pub mod printer;
pub mod render;
pub mod tree;

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

pub use error::TreeError;
use printer::write_tree;
use render::render_fragments;
use tree::{EntrySource, Tree, TreeConfig, WalkdirSource};

/// Render the tree under `root` into `out`, walking the real filesystem.
pub fn dir_tree<W: Write>(out: &mut W, root: &Path, include_files: bool) -> Result<(), TreeError> {
    render_tree(&WalkdirSource, out, root, &TreeConfig { include_files })
}

/// Render the tree under `root` into `out` using entries from `source`.
pub fn render_tree<S, W>(
    source: &S,
    out: &mut W,
    root: &Path,
    config: &TreeConfig,
) -> Result<(), TreeError>
where
    S: EntrySource + ?Sized,
    W: Write,
{
    check_root(root)?;

    let entries = source.collect(root, config);
    let mut tree = Tree::resolve(entries);
    render_fragments(&mut tree);
    write_tree(&tree, out)?;

    debug!(root = %root.display(), entries = tree.len(), "rendered tree");
    Ok(())
}

/// The root must exist, be a directory and be listable.
fn check_root(root: &Path) -> Result<(), TreeError> {
    let meta = fs::metadata(root).map_err(|e| TreeError::root(root, e))?;
    if !meta.is_dir() {
        return Err(TreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    fs::read_dir(root).map_err(|e| TreeError::root(root, e))?;
    Ok(())
}
