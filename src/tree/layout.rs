use std::collections::HashMap;
use std::path::{PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use super::{Entry, EntryId, Neighbors};

/// Owning arena of resolved entries, sorted in display order.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: Vec<Entry>,
}

/// Normalized path of `entry` itself, relative to the walk root.
pub fn own_path(entry: &Entry) -> String {
    format!("{}{}{}", entry.parent_path, MAIN_SEPARATOR, entry.name)
        .trim_matches(MAIN_SEPARATOR)
        .to_string()
}

impl Tree {
    /// Sort `entries` and link parents, children and siblings.
    pub fn resolve(mut entries: Vec<Entry>) -> Self {
        sort_entries(&mut entries);
        let mut tree = Self { entries };

        let groups = tree.sibling_groups();
        tree.link_children(&groups);
        tree.link_neighbors(&groups);

        debug!(
            entries = tree.entries.len(),
            groups = groups.len(),
            "resolved hierarchy"
        );
        tree
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> &Entry {
        &self.entries[id.index()]
    }

    pub fn get_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.entries[id.index()]
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> {
        (0..self.entries.len()).map(EntryId)
    }

    /// Depth-1 entries in display order.
    pub fn roots(&self) -> Vec<EntryId> {
        self.ids().filter(|&id| self.get(id).depth == 1).collect()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: EntryId) -> impl Iterator<Item = EntryId> + '_ {
        std::iter::successors(self.get(id).parent, move |&p| self.get(p).parent)
    }

    /// Look up an entry by its root-relative path.
    pub fn find(&self, path: &str) -> Option<EntryId> {
        self.ids().find(|&id| own_path(self.get(id)) == path)
    }

    /// Index every entry under its parent's relative path, preserving sorted order.
    fn sibling_groups(&self) -> HashMap<PathBuf, Vec<EntryId>> {
        let mut groups: HashMap<PathBuf, Vec<EntryId>> = HashMap::new();
        for id in self.ids() {
            groups
                .entry(self.get(id).parent_key().to_path_buf())
                .or_default()
                .push(id);
        }
        groups
    }

    fn link_children(&mut self, groups: &HashMap<PathBuf, Vec<EntryId>>) {
        for id in self.ids() {
            let dir = self.get(id);
            if !dir.is_dir {
                continue;
            }
            let depth = dir.depth;
            let Some(group) = groups.get(&dir.relative) else {
                continue;
            };

            // Children sit exactly one level below their parent.
            let children: Vec<EntryId> = group
                .iter()
                .copied()
                .filter(|&c| self.get(c).depth == depth + 1)
                .collect();
            for &child in &children {
                self.get_mut(child).parent = Some(id);
            }
            self.get_mut(id).children.extend(children);
        }
    }

    fn link_neighbors(&mut self, groups: &HashMap<PathBuf, Vec<EntryId>>) {
        for group in groups.values() {
            for (i, &id) in group.iter().enumerate() {
                self.get_mut(id).neighbors = Neighbors {
                    prev: i.checked_sub(1).map(|p| group[p]),
                    next: group.get(i + 1).copied(),
                };
            }
        }
    }
}

/// Stable sort by depth, then by name. Names that only differ before lossy
/// conversion fall back to their relative paths.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        a.depth
            .cmp(&b.depth)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.relative.cmp(&b.relative))
    });
}
