//! Box-drawing connectors for resolved entries.

use crate::tree::{EntryId, Tree};

/// Branch for an entry that has following siblings.
pub const TEE: &str = "\u{251c}\u{2500}\u{2500}\u{2500}"; // ├───
/// Branch for the last entry of a sibling group.
pub const CORNER: &str = "\u{2514}\u{2500}\u{2500}\u{2500}"; // └───
/// Indent under an ancestor that still has following siblings.
pub const BAR_UNIT: &str = "\u{2502}\t"; // │\t
/// Indent under an ancestor that was the last of its group.
pub const BLANK_UNIT: &str = "\t";

/// Fill in the fragment of every entry in `tree`.
pub fn render_fragments(tree: &mut Tree) {
    let fragments: Vec<(EntryId, String)> = tree
        .ids()
        .map(|id| (id, render_fragment(tree, id)))
        .collect();
    for (id, fragment) in fragments {
        tree.get_mut(id).fragment = fragment;
    }
}

/// Render the output line for a single entry: ancestor indentation, branch
/// glyph, name and size suffix.
pub fn render_fragment(tree: &Tree, id: EntryId) -> String {
    let entry = tree.get(id);
    let branch = if entry.is_last() { CORNER } else { TEE };

    // Units are collected nearest-first and emitted furthest-first.
    let units: Vec<&str> = tree
        .ancestors(id)
        .map(|a| if tree.get(a).is_last() { BLANK_UNIT } else { BAR_UNIT })
        .collect();

    let mut out = String::new();
    for unit in units.iter().rev() {
        out.push_str(unit);
    }
    out.push_str(branch);
    out.push_str(&entry.name);
    out.push_str(&entry.size);
    out.push('\n');
    out
}
