#![allow(dead_code)]

use dirtree::printer::print_tree;
use dirtree::render::render_fragments;
use dirtree::tree::{collect_entries, Tree, TreeConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness; enable with `DIRTREE_LOG=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DIRTREE_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}

pub const TEE: &str = "\u{251c}\u{2500}\u{2500}\u{2500}";
pub const CORNER: &str = "\u{2514}\u{2500}\u{2500}\u{2500}";

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            write_file(tmp.path(), p, b"");
        }
    }
    tmp
}

/// Write `contents` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &[u8]) {
    let full = root.join(rel);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full, contents).unwrap();
}

/// The `a/` + `b/` layout with a 5-byte `a/x.txt`.
pub fn two_dir_fixture() -> TempDir {
    let tmp = create_fixture(&["a/", "b/"]);
    write_file(tmp.path(), "a/x.txt", b"hello");
    tmp
}

/// A project-like layout with several levels and mixed sizes.
pub fn project_fixture() -> TempDir {
    let tmp = create_fixture(&[
        "src/",
        "src/tree/",
        "src/tree/mod.rs",
        "tests/",
        "docs/",
        "docs/img/",
        "target/",
        "target/debug/",
        "target/debug/build/",
    ]);
    write_file(tmp.path(), "Cargo.toml", b"[package]\n");
    write_file(tmp.path(), "src/lib.rs", b"pub mod tree;\n");
    write_file(tmp.path(), "src/main.rs", b"fn main() {}\n");
    write_file(tmp.path(), "tests/it.rs", &[b'x'; 1024]);
    write_file(tmp.path(), "docs/img/logo.png", &[0u8; 300]);
    tmp
}

pub fn files_config() -> TreeConfig {
    TreeConfig {
        include_files: true,
    }
}

pub fn dirs_config() -> TreeConfig {
    TreeConfig::default()
}

/// Run the library pipeline and return the output as a string.
pub fn run_pipeline(root: &Path, include_files: bool) -> String {
    let mut out = Vec::new();
    dirtree::dir_tree(&mut out, root, include_files).unwrap();
    String::from_utf8(out).unwrap()
}

/// Collect, resolve and render without printing.
pub fn resolved_tree(root: &Path, config: &TreeConfig) -> Tree {
    let mut tree = Tree::resolve(collect_entries(root, config));
    render_fragments(&mut tree);
    tree
}

/// Printed output for an already resolved tree.
pub fn printed(tree: &Tree) -> String {
    print_tree(tree)
}

/// Strip indentation and branch glyph from a rendered line.
pub fn line_label(line: &str) -> &str {
    line.trim_start_matches(['\t', '\u{2502}'])
        .trim_start_matches(TEE)
        .trim_start_matches(CORNER)
}
