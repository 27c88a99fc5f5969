//! Tree-diagram parsing: recovering an ordered entry sequence from plain text.
//!
//! Diagrams mix two depth signals. Connector-drawn lines carry one vertical,
//! branch, or corner glyph per nesting level; indentation-only lines carry
//! four columns per level. Each accepted line takes the maximum of the two
//! counts, which tolerates mixed or partially malformed input without
//! undercounting depth.
//!
//! Parsing runs a primary pass over a fixed glyph set (light box drawing plus
//! the ASCII `|--`/`` `-- `` convention). A diagram drawn with glyphs outside
//! that set (heavy or double box drawing, say) invalidates the primary pass
//! entirely, and a simpler indentation-only pass takes over: content starts at
//! the first character that is neither whitespace nor box drawing, and depth
//! is the starting column divided by the indentation unit.

use crate::types::TreeEntry;

/// Columns per nesting level. A drawing convention, not configurable.
const INDENT_UNIT: usize = 4;

fn is_primary_glyph(c: char) -> bool {
    matches!(c, '│' | '├' | '└' | '╰' | '─')
}

fn is_connector(c: char) -> bool {
    matches!(c, '│' | '├' | '└' | '╰' | '|' | '+' | '`' | '\\')
}

fn is_ascii_glyph(c: char) -> bool {
    matches!(c, '|' | '+' | '-' | '\\' | '`')
}

fn is_box_drawing(c: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&c)
}

enum LineScan<'a> {
    /// A candidate entry: inferred depth plus the right-trimmed content token.
    Token { depth: usize, token: &'a str },
    /// Empty, or nothing left once glyphs and whitespace are stripped.
    Blank,
    /// Content begins with a box-drawing glyph outside the primary set.
    Foreign,
}

/// Parses the full text of a tree diagram into ordered entries.
///
/// Total and infallible: unparseable lines are dropped and an input with no
/// parseable content yields an empty vector, which is a valid outcome rather
/// than an error.
///
/// # Example
///
/// ```
/// let entries = mktree::parse("project/\n├── src/\n│   └── main.rs\n└── README\n");
/// let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(
///     paths,
///     ["project", "project/src", "project/src/main.rs", "project/README"]
/// );
/// ```
pub fn parse(text: &str) -> Vec<TreeEntry> {
    match connector_pass(text) {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            #[cfg(feature = "logging")]
            tracing::debug!("primary pass yielded nothing, using indentation fallback");
            indent_pass(text)
        }
    }
}

/// Primary pass. Returns `None` when the diagram uses a glyph set the
/// primary scanner does not recognize, handing the whole document to the
/// fallback so every line is measured the same way.
fn connector_pass(text: &str) -> Option<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    let mut ancestors: Vec<String> = Vec::new();
    for line in text.lines() {
        match scan_connector_line(line) {
            LineScan::Token { depth, token } => {
                push_entry(&mut ancestors, &mut entries, depth, token);
            }
            LineScan::Blank => {}
            LineScan::Foreign => {
                #[cfg(feature = "logging")]
                tracing::debug!(line, "unrecognized drawing glyphs, rejecting primary pass");
                return None;
            }
        }
    }
    Some(entries)
}

/// Indentation-only fallback: no connector signal, any box-drawing character
/// counts as one leading column.
fn indent_pass(text: &str) -> Vec<TreeEntry> {
    let mut entries = Vec::new();
    let mut ancestors: Vec<String> = Vec::new();
    for line in text.lines() {
        if let Some((depth, token)) = scan_indent_line(line) {
            push_entry(&mut ancestors, &mut entries, depth, token);
        }
    }
    entries
}

fn scan_connector_line(line: &str) -> LineScan<'_> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut col = 0usize;
    let mut connectors = 0usize;
    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i].1;
        if c == '\t' {
            col = col / INDENT_UNIT * INDENT_UNIT + INDENT_UNIT;
            i += 1;
        } else if c.is_whitespace() {
            col += 1;
            i += 1;
        } else if is_primary_glyph(c) {
            if is_connector(c) {
                connectors += 1;
            }
            col += 1;
            i += 1;
        } else if is_ascii_glyph(c) {
            let mut j = i;
            while j < chars.len() && is_ascii_glyph(chars[j].1) {
                j += 1;
            }
            // An ASCII run counts as drawing only when a separator follows;
            // otherwise it is the start of a name like `+page.svelte`.
            if j < chars.len() && !chars[j].1.is_whitespace() {
                break;
            }
            connectors += chars[i..j].iter().filter(|(_, c)| is_connector(*c)).count();
            col += j - i;
            i = j;
        } else {
            break;
        }
    }
    let token = match chars.get(i) {
        Some(&(start, _)) => line[start..].trim_end(),
        None => "",
    };
    if token.is_empty() {
        return LineScan::Blank;
    }
    if token.chars().next().is_some_and(is_box_drawing) {
        return LineScan::Foreign;
    }
    LineScan::Token {
        depth: connectors.max(col / INDENT_UNIT),
        token,
    }
}

fn scan_indent_line(line: &str) -> Option<(usize, &str)> {
    let mut col = 0usize;
    for (start, c) in line.char_indices() {
        if c == '\t' {
            col = col / INDENT_UNIT * INDENT_UNIT + INDENT_UNIT;
        } else if c.is_whitespace() || is_box_drawing(c) {
            col += 1;
        } else {
            let token = line[start..].trim_end();
            return Some((col / INDENT_UNIT, token));
        }
    }
    None
}

/// Resolves one content token against the open ancestors and emits the entry.
///
/// The stack is truncated to the line's depth (siblings at the same depth
/// replace each other) and directories are appended at the stack's real end.
/// A line deeper than the stack keeps its computed depth but builds its path
/// from the ancestors that exist, so a diagram that skips levels flattens
/// instead of failing.
fn push_entry(ancestors: &mut Vec<String>, entries: &mut Vec<TreeEntry>, depth: usize, token: &str) {
    let (name, is_dir) = match token.strip_suffix('/') {
        Some(stripped) => (stripped, true),
        None => (token, false),
    };
    if name.is_empty() {
        return;
    }
    ancestors.truncate(depth);
    let path = if ancestors.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", ancestors.join("/"), name)
    };
    entries.push(TreeEntry {
        name: name.to_string(),
        path,
        is_dir,
        depth,
    });
    if is_dir {
        ancestors.push(name.to_string());
    }
}
