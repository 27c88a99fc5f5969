use mktree::{materialize, mktree, parse, MktreeBuilder, MktreeError};
use std::fs;
use tempfile::tempdir;

const DIAGRAM: &str = "project/\n├── src/\n│   └── main.ext\n└── README\n";

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let options = MktreeBuilder::new(dir.path()).build();
    let result = mktree(DIAGRAM, options).unwrap();
    assert!(dir.path().join("project/src").is_dir());
    assert!(dir.path().join("project/src/main.ext").is_file());
    assert!(dir.path().join("project/README").is_file());
    let report = &result.report;
    assert_eq!(report.created_dirs, 2);
    assert_eq!(report.created_files, 2);
    assert_eq!(report.processed, 4);
    assert!(report.failures.is_empty());
    assert_eq!(
        fs::read(dir.path().join("project/src/main.ext")).unwrap().len(),
        0
    );
}

#[test]
fn integration_rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    let entries = parse(DIAGRAM);
    let options = MktreeBuilder::new(dir.path()).build();
    let first = materialize(&options, &entries).unwrap();
    assert_eq!(first.created_dirs + first.created_files, 4);
    let second = materialize(&options, &entries).unwrap();
    assert_eq!(second.created_dirs + second.created_files, 0);
    assert_eq!(second.skipped, 4);
    assert!(second.failures.is_empty());
    assert!(dir.path().join("project/src/main.ext").is_file());
}

#[test]
fn integration_entry_order_does_not_matter() {
    let dir = tempdir().unwrap();
    let mut entries = parse(DIAGRAM);
    entries.reverse();
    let options = MktreeBuilder::new(dir.path()).build();
    let report = materialize(&options, &entries).unwrap();
    assert!(report.failures.is_empty());
    assert!(dir.path().join("project/src/main.ext").is_file());
    assert!(dir.path().join("project/README").is_file());
}

#[test]
fn integration_existing_content_is_preserved() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("project")).unwrap();
    fs::write(dir.path().join("project/README"), "keep me").unwrap();
    let options = MktreeBuilder::new(dir.path()).build();
    let result = mktree(DIAGRAM, options).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("project/README")).unwrap(),
        "keep me"
    );
    assert_eq!(result.report.skipped, 2);
    assert_eq!(result.report.created_dirs, 1);
    assert_eq!(result.report.created_files, 1);
    assert!(result.report.failures.is_empty());
}

#[test]
fn integration_duplicate_lines_materialize_once() {
    let dir = tempdir().unwrap();
    let options = MktreeBuilder::new(dir.path()).build();
    let result = mktree("a/\n├── x.ext\n├── x.ext\n", options).unwrap();
    let report = &result.report;
    assert_eq!(report.processed, 3);
    assert_eq!(report.created_dirs, 1);
    assert_eq!(report.created_files, 1);
    assert_eq!(report.skipped, 1);
}

#[test]
fn integration_escaping_entries_fail_without_writing() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    let options = MktreeBuilder::new(&root).build();
    let result = mktree("../escape.ext\n/abs.ext\nok.ext\n", options).unwrap();
    let report = &result.report;
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.created_files, 1);
    assert!(root.join("ok.ext").is_file());
    assert!(!dir.path().join("escape.ext").exists());
}

#[test]
fn integration_unwritable_root_aborts() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "in the way").unwrap();
    let options = MktreeBuilder::new(&blocker).build();
    let err = materialize(&options, &parse("a/\n")).unwrap_err();
    assert!(matches!(err, MktreeError::RootUnavailable { .. }));
}

#[test]
fn integration_dry_run_touches_nothing() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    let options = MktreeBuilder::new(&root).dry_run(true).build();
    let result = mktree(DIAGRAM, options).unwrap();
    assert!(!root.exists());
    assert_eq!(result.report.created_dirs, 2);
    assert_eq!(result.report.created_files, 2);
    assert!(result.report.dry_run);
}

#[test]
fn integration_ignore_patterns() {
    let dir = tempdir().unwrap();
    let options = MktreeBuilder::new(dir.path())
        .ignore_patterns(vec!["**/*.log".into()])
        .build();
    let result = mktree("project/\n├── src/\n└── notes.log\n", options).unwrap();
    assert!(dir.path().join("project/src").is_dir());
    assert!(!dir.path().join("project/notes.log").exists());
    assert_eq!(result.report.skipped, 1);
}

#[test]
fn integration_bad_ignore_pattern_is_rejected() {
    let dir = tempdir().unwrap();
    let options = MktreeBuilder::new(dir.path())
        .ignore_patterns(vec!["a{".into()])
        .build();
    let err = materialize(&options, &parse("a/\n")).unwrap_err();
    assert!(matches!(err, MktreeError::Pattern(_)));
}

#[test]
fn integration_max_depth_limits_creation() {
    let dir = tempdir().unwrap();
    let options = MktreeBuilder::new(dir.path()).max_depth(1).build();
    let result = mktree(DIAGRAM, options).unwrap();
    assert!(dir.path().join("project/src").is_dir());
    assert!(!dir.path().join("project/src/main.ext").exists());
    assert_eq!(result.report.skipped, 1);
}

#[test]
fn integration_empty_parse_leaves_filesystem_alone() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    let result = mktree("│\n   \n", MktreeBuilder::new(&root).build()).unwrap();
    assert!(result.entries.is_empty());
    assert_eq!(result.report.processed, 0);
    assert!(!root.exists());
}

#[test]
fn integration_file_blocking_directory_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("project"), "not a directory").unwrap();
    let options = MktreeBuilder::new(dir.path()).build();
    let result = mktree(DIAGRAM, options).unwrap();
    let report = &result.report;
    assert_eq!(report.failures.len(), 4);
    assert_eq!(report.created_dirs + report.created_files, 0);
    assert_eq!(
        report.processed,
        report.created_dirs + report.created_files + report.skipped + report.failures.len()
    );
}

#[test]
fn integration_inline_path_segments_are_created() {
    let dir = tempdir().unwrap();
    let options = MktreeBuilder::new(dir.path()).build();
    let result = mktree("pkg/\n└── src/nested/deep.ext\n", options).unwrap();
    assert!(dir.path().join("pkg/src/nested").is_dir());
    assert!(dir.path().join("pkg/src/nested/deep.ext").is_file());
    assert!(result.report.failures.is_empty());
}
