use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MktreeError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("destination root {path} is unavailable: {source}")]
    RootUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid ignore pattern: {0}")]
    Pattern(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}
impl MktreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MktreeError::Io {
            path: path.into(),
            source,
        }
    }
}
