use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MktreeOptions {
    pub root: PathBuf,
    pub dry_run: bool,
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
}
impl Default for MktreeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dry_run: false,
            max_depth: None,
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct MktreeBuilder {
    options: MktreeOptions,
}
impl MktreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MktreeOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn dry_run(mut self, yes: bool) -> Self {
        self.options.dry_run = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> MktreeOptions {
        self.options
    }
}
