//! # Mktree
//!
//! `mktree` is a library for parsing plain-text tree diagrams, the kind drawn
//! by directory-listing tools with connector glyphs or plain indentation, and
//! materializing them as real directories and empty files.
//!
//! Parsing ([`parse`]) is a pure function from text to an ordered sequence of
//! [`TreeEntry`] values; it tolerates mixed drawing conventions, inconsistent
//! indentation, and malformed lines, and an unparseable input simply yields
//! no entries. Materialization ([`materialize`]) creates the corresponding
//! hierarchy beneath a destination root: idempotent, parents before children,
//! never overwriting existing file content, and collecting per-entry failures
//! instead of aborting the batch. [`mktree`] runs both in one call.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use mktree::{mktree, MktreeBuilder};
//!
//! let diagram = "\
//! project/
//! ├── src/
//! │   └── main.rs
//! └── README
//! ";
//!
//! let options = MktreeBuilder::new("./out")
//!     .dry_run(false)
//!     .ignore_patterns(vec!["**/target/**".into()])
//!     .build();
//!
//! let result = mktree(diagram, options).expect("materialization failed");
//!
//! println!(
//!     "created {} directories and {} files",
//!     result.report.created_dirs, result.report.created_files
//! );
//! for failure in &result.report.failures {
//!     eprintln!("failed: {} ({})", failure.entry.path, failure.cause);
//! }
//! ```

mod error;
mod materialize;
mod options;
mod parse;
mod types;

pub mod output;
pub mod render;

pub use error::MktreeError;
pub use materialize::{materialize, mktree};
pub use options::{MktreeBuilder, MktreeOptions};
pub use parse::parse;
pub use types::{EntryFailure, MaterializeReport, MktreeResult, TreeEntry};
