//! Output formatting for mktree results.
//!
//! Provides functions to format a [`MktreeResult`] into a human summary,
//! JSON, a re-rendered tree diagram, or a bare path list.

use crate::render;
use crate::MktreeResult;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
    Tree,
    Paths,
}

/// Formats the result of a run into a string.
pub fn format_result(result: &MktreeResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Summary => format_summary(result),
        OutputFormat::Json => format_json(result, pretty),
        OutputFormat::Tree => render::connector_tree(&result.entries),
        OutputFormat::Paths => format_paths(result),
    }
}

// ----------------------- Internal formatting -----------------------

fn format_summary(result: &MktreeResult) -> String {
    let report = &result.report;
    let mut out = String::with_capacity(256);
    let verb = if report.dry_run {
        "would create"
    } else {
        "created"
    };
    out.push_str(&format!(
        "{} entries: {} {} directories, {} files under {} ({} skipped, {} failed)\n",
        report.processed,
        verb,
        report.created_dirs,
        report.created_files,
        report.root.display(),
        report.skipped,
        report.failures.len(),
    ));
    for failure in &report.failures {
        out.push_str(&format!("  {}: {}\n", failure.entry.path, failure.cause));
    }
    out
}

fn format_json(result: &MktreeResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}

fn format_paths(result: &MktreeResult) -> String {
    let mut out = String::with_capacity(256);
    for entry in &result.entries {
        out.push_str(&entry.path);
        if entry.is_dir {
            out.push('/');
        }
        out.push('\n');
    }
    out
}
