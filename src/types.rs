use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single entry recovered from a tree diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// The bare directory or file name, with any trailing `/` marker stripped.
    pub name: String,
    /// The slash-joined path from the hierarchy root to this entry.
    ///
    /// Derived from the ancestors open at parse time; never carries a
    /// trailing separator.
    pub path: String,
    /// Whether the source line's content token ended with the `/` marker.
    pub is_dir: bool,
    /// Nesting level relative to the hierarchy root, zero-based.
    pub depth: usize,
}

/// A materialization attempt that failed for one entry.
///
/// Collected into [`MaterializeReport::failures`]; a failed entry never
/// aborts the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryFailure {
    /// The entry that could not be materialized.
    pub entry: TreeEntry,
    /// Human-readable cause, rendered from the underlying error.
    pub cause: String,
}

/// The aggregate outcome of one materialization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterializeReport {
    /// The destination root the run resolved entries against.
    pub root: PathBuf,
    /// Whether the run simulated instead of touching the filesystem.
    pub dry_run: bool,
    /// Entries examined. Always equals
    /// `created_dirs + created_files + skipped + failures.len()`.
    pub processed: usize,
    /// Directories created (or, in a dry run, that would be created).
    pub created_dirs: usize,
    /// Files created (or, in a dry run, that would be created).
    pub created_files: usize,
    /// Entries skipped: already existing, duplicated within the run,
    /// matched by an ignore pattern, or beyond the depth limit.
    pub skipped: usize,
    /// Per-entry failures, in processing order.
    pub failures: Vec<EntryFailure>,
}

/// The complete result of an [`mktree`](crate::mktree) run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MktreeResult {
    /// The entries recovered from the diagram, in source order.
    pub entries: Vec<TreeEntry>,
    /// What materialization did with them.
    pub report: MaterializeReport,
}
