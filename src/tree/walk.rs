use std::collections::HashSet;
use std::path::{Path, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use super::{Entry, TreeConfig};

/// Size suffix shown after an entry's name.
pub fn size_label(is_dir: bool, len: u64) -> String {
    if is_dir {
        String::new()
    } else if len == 0 {
        " (empty)".to_string()
    } else {
        format!(" ({len}b)")
    }
}

/// Walk `root` and collect one unlinked [`Entry`] per visited object.
///
/// The root itself is never collected. Objects that fail to enumerate are
/// skipped along with anything beneath them. Order is whatever the
/// filesystem yields.
pub fn collect_entries(root: &Path, config: &TreeConfig) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for entry_result in WalkDir::new(root).min_depth(1) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                // An unreadable directory is yielded once as Ok, then again as
                // Err when its contents cannot be listed; drop both.
                if let Some(path) = e.path() {
                    forget_entry(&mut entries, path);
                }
                trace!(path = ?e.path(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let is_dir = entry.file_type().is_dir();
        if !config.include_files && !is_dir {
            continue;
        }
        if !seen.insert(entry.path().to_path_buf()) {
            trace!(path = %entry.path().display(), "skipping duplicate entry");
            continue;
        }

        match to_entry(root, &entry, is_dir) {
            Some(e) => entries.push(e),
            None => trace!(path = %entry.path().display(), "skipping entry without metadata"),
        }
    }

    debug!(root = %root.display(), count = entries.len(), "collected entries");
    entries
}

/// Remove a previously collected entry for `path`, if any. Returns whether
/// one was removed.
fn forget_entry(entries: &mut Vec<Entry>, path: &Path) -> bool {
    let before = entries.len();
    entries.retain(|e| e.path.as_path() != path);
    entries.len() != before
}

fn to_entry(root: &Path, entry: &DirEntry, is_dir: bool) -> Option<Entry> {
    let len = if is_dir {
        0
    } else {
        entry.metadata().ok()?.len()
    };

    let name = entry.file_name().to_string_lossy().to_string();
    let relative = entry.path().strip_prefix(root).ok()?;
    let parent_path = relative
        .parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join(MAIN_SEPARATOR_STR)
        })
        .unwrap_or_default();

    Some(
        Entry::new(
            name,
            entry.depth(),
            entry.path(),
            parent_path.trim_matches(MAIN_SEPARATOR),
            is_dir,
            len,
        )
        .with_relative(relative),
    )
}
