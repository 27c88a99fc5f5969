//! Turning parsed entries into real directories and empty files.

use crate::error::MktreeError;
use crate::options::MktreeOptions;
use crate::parse::parse;
use crate::types::{EntryFailure, MaterializeReport, MktreeResult, TreeEntry};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

enum Outcome {
    Dir,
    File,
    Existing,
}

/// Parses a diagram and materializes it beneath `options.root` in one call.
///
/// When the parse finds no structure the filesystem is left untouched and the
/// result carries an empty entry list with a zeroed report.
pub fn mktree(text: &str, options: MktreeOptions) -> Result<MktreeResult, MktreeError> {
    let entries = parse(text);
    let report = materialize(&options, &entries)?;
    Ok(MktreeResult { entries, report })
}

/// Creates the directories and empty files described by `entries` beneath
/// `options.root`.
///
/// Entries are processed in ascending depth order (stable within a level), so
/// parents exist before their children regardless of diagram line order. The
/// run is idempotent: existing directories satisfy directory entries, and an
/// existing file is never truncated or overwritten. Individual failures are
/// collected in the report and do not stop the batch; the only error returned
/// is a destination root that cannot be set up at all, or an ignore pattern
/// that does not compile.
pub fn materialize(
    options: &MktreeOptions,
    entries: &[TreeEntry],
) -> Result<MaterializeReport, MktreeError> {
    let ignore = build_ignore_set(&options.ignore_patterns)?;
    let mut report = MaterializeReport {
        root: options.root.clone(),
        dry_run: options.dry_run,
        ..Default::default()
    };
    if entries.is_empty() {
        return Ok(report);
    }
    if !options.dry_run {
        fs::create_dir_all(&options.root).map_err(|e| MktreeError::RootUnavailable {
            path: options.root.clone(),
            source: e,
        })?;
    }

    let mut ordered: Vec<&TreeEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.depth);

    let mut visited: HashSet<PathBuf> = HashSet::new();
    for entry in ordered {
        report.processed += 1;
        if options.max_depth.is_some_and(|max| entry.depth > max) {
            report.skipped += 1;
            continue;
        }
        if let Some(set) = &ignore {
            if set.is_match(Path::new(&entry.path)) {
                #[cfg(feature = "logging")]
                tracing::debug!(path = %entry.path, "entry matches ignore pattern");
                report.skipped += 1;
                continue;
            }
        }
        let dest = match resolve_under_root(&options.root, &entry.path) {
            Ok(dest) => dest,
            Err(e) => {
                report.failures.push(EntryFailure {
                    entry: entry.clone(),
                    cause: e.to_string(),
                });
                continue;
            }
        };
        // Attempted destinations are remembered even on failure, so a
        // repeated bad line reports once instead of once per occurrence.
        if !visited.insert(dest.clone()) {
            report.skipped += 1;
            continue;
        }
        let outcome = if options.dry_run {
            plan_entry(entry, &dest)
        } else {
            create_entry(entry, &dest)
        };
        match outcome {
            Ok(Outcome::Dir) => report.created_dirs += 1,
            Ok(Outcome::File) => report.created_files += 1,
            Ok(Outcome::Existing) => report.skipped += 1,
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::debug!(path = %entry.path, error = %e, "entry failed");
                report.failures.push(EntryFailure {
                    entry: entry.clone(),
                    cause: e.to_string(),
                });
            }
        }
    }
    Ok(report)
}

fn build_ignore_set(patterns: &[String]) -> Result<Option<GlobSet>, MktreeError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            MktreeError::Pattern(format!("invalid glob pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|e| MktreeError::Pattern(format!("failed to build glob set: {}", e)))?;
    Ok(Some(set))
}

/// Joins an entry path onto the root, rejecting anything that would resolve
/// outside it. Absolute paths and parent-directory components come straight
/// from diagram text and are never trustworthy.
fn resolve_under_root(root: &Path, relative: &str) -> Result<PathBuf, MktreeError> {
    let rel = Path::new(relative);
    let escapes = rel.is_absolute()
        || rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(MktreeError::InvalidPath(format!(
            "'{}' escapes the destination root",
            relative
        )));
    }
    Ok(root.join(rel))
}

fn create_entry(entry: &TreeEntry, dest: &Path) -> Result<Outcome, MktreeError> {
    if entry.is_dir {
        if dest.is_dir() {
            return Ok(Outcome::Existing);
        }
        fs::create_dir_all(dest).map_err(|e| MktreeError::io(dest, e))?;
        Ok(Outcome::Dir)
    } else {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|e| MktreeError::io(parent, e))?;
            }
        }
        match OpenOptions::new().write(true).create_new(true).open(dest) {
            Ok(_) => Ok(Outcome::File),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(Outcome::Existing),
            Err(e) => Err(MktreeError::io(dest, e)),
        }
    }
}

fn plan_entry(entry: &TreeEntry, dest: &Path) -> Result<Outcome, MktreeError> {
    if dest.exists() {
        Ok(Outcome::Existing)
    } else if entry.is_dir {
        Ok(Outcome::Dir)
    } else {
        Ok(Outcome::File)
    }
}
