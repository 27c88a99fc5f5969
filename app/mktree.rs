//! Command-line interface for mktree.
//!
//! Reads a tree diagram from a file or stdin, materializes it beneath a
//! destination root, and prints the outcome in various formats.

use clap::{Parser, ValueEnum};
use mktree::{mktree, output, MktreeBuilder, MktreeOptions};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::exit;

/// mktree — build directory trees from plain-text diagrams
#[derive(Parser)]
#[command(name = "mktree", version, about, long_about = None)]
struct Cli {
    /// Tree diagram file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Destination root [default: the input file's directory]
    #[arg(short = 'd', long)]
    dest: Option<PathBuf>,

    /// Report what would be created without touching the filesystem
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Skip entries whose relative path matches (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Skip entries nested deeper than this
    #[arg(long)]
    max_depth: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Summary,
    Json,
    Tree,
    Paths,
}

impl Format {
    fn into_output(self) -> output::OutputFormat {
        match self {
            Format::Summary => output::OutputFormat::Summary,
            Format::Json => output::OutputFormat::Json,
            Format::Tree => output::OutputFormat::Tree,
            Format::Paths => output::OutputFormat::Paths,
        }
    }
}

impl Cli {
    fn into_options(self) -> (Option<PathBuf>, MktreeOptions, Format, bool) {
        let dest = self
            .dest
            .unwrap_or_else(|| default_dest(self.input.as_deref()));

        let mut builder = MktreeBuilder::new(dest)
            .dry_run(self.dry_run)
            .ignore_patterns(self.ignore_patterns);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (self.input, builder.build(), self.format, self.pretty)
    }
}

/// The original host materialized next to the source file; stdin falls back
/// to the current directory.
fn default_dest(input: Option<&Path>) -> PathBuf {
    input
        .filter(|path| path.as_os_str() != "-")
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let (input, options, format, pretty) = cli.into_options();

    let text = match read_input(input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    run(&text, options, format, pretty);
}

fn run(text: &str, options: MktreeOptions, format: Format, pretty: bool) {
    match mktree(text, options) {
        Ok(result) => {
            let empty = result.entries.is_empty();
            if empty && format == Format::Summary {
                eprintln!("no tree structure found in input");
            } else {
                let out = output::format_result(&result, format.into_output(), pretty);
                match format {
                    Format::Json | Format::Tree => println!("{}", out),
                    Format::Summary | Format::Paths => print!("{}", out),
                }
            }
            if empty || !result.report.failures.is_empty() {
                exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
