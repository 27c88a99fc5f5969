//! Drawing tree diagrams from entry sequences, the parser's inverse.
//!
//! Output from either renderer parses back to the same entries, which is what
//! the round-trip tests lean on and what makes `--format tree` a faithful
//! preview of a run.

use crate::types::TreeEntry;

/// Renders the canonical connector-glyph diagram (`├── `, `└── `, `│   `
/// continuations). Directories carry a trailing `/`; depth-0 entries are
/// drawn bare.
pub fn connector_tree(entries: &[TreeEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    // last_flags[d] tells whether the entry currently open at depth d was the
    // last among its siblings, which decides the continuation column.
    let mut last_flags: Vec<bool> = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let last = is_last_sibling(entries, index);
        last_flags.truncate(entry.depth);
        while last_flags.len() < entry.depth {
            last_flags.push(true);
        }
        let mut line = String::new();
        if entry.depth > 0 {
            for &ancestor_last in &last_flags[1..entry.depth] {
                line.push_str(if ancestor_last { "    " } else { "│   " });
            }
            line.push_str(if last { "└── " } else { "├── " });
        }
        line.push_str(&entry.name);
        if entry.is_dir {
            line.push('/');
        }
        lines.push(line);
        last_flags.push(last);
    }
    lines.join("\n")
}

/// Renders the indentation-only form, four spaces per level.
pub fn indented_tree(entries: &[TreeEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut line = "    ".repeat(entry.depth);
        line.push_str(&entry.name);
        if entry.is_dir {
            line.push('/');
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn is_last_sibling(entries: &[TreeEntry], index: usize) -> bool {
    let depth = entries[index].depth;
    for later in &entries[index + 1..] {
        if later.depth < depth {
            return true;
        }
        if later.depth == depth {
            return false;
        }
    }
    true
}
