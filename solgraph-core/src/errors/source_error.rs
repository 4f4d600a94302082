//! Source loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading Solidity source files.
///
/// A path that turns out to be a directory is not an error: the loader logs
/// and skips it. Everything else is fatal.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
