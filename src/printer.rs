//! Depth-first emission of rendered fragments.

use std::io::{self, Write};

use tracing::debug;

use crate::tree::Tree;

/// Concatenate fragments in display order: each depth-1 entry followed by
/// its whole subtree, pre-order.
pub fn print_tree(tree: &Tree) -> String {
    let mut output = String::new();
    let mut stack: Vec<_> = tree.roots();
    stack.reverse();

    while let Some(id) = stack.pop() {
        let entry = tree.get(id);
        output.push_str(&entry.fragment);
        stack.extend(entry.children.iter().rev().copied());
    }
    output
}

/// Write the printed tree to `out` verbatim. Returns the number of bytes written.
pub fn write_tree<W: Write>(tree: &Tree, out: &mut W) -> io::Result<usize> {
    let output = print_tree(tree);
    out.write_all(output.as_bytes())?;
    out.flush()?;
    debug!(bytes = output.len(), "wrote tree");
    Ok(output.len())
}
