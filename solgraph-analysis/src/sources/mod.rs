//! Source loading — ordered dedup, directory skipping, optional import crawl.

pub mod importer;

use std::path::{Path, PathBuf};

use solgraph_core::config::GraphConfig;
use solgraph_core::constants::LITERAL_ORIGIN;
use solgraph_core::errors::{PipelineError, SourceError};
use solgraph_core::types::collections::FxHashSet;

/// One unit of Solidity source ready for parsing.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path the content came from, or a synthetic label for literal input.
    pub origin: String,
    pub content: String,
}

/// Load the input set according to the configuration.
///
/// Entries are file paths unless `contents_in_file_path` is set. In path
/// mode the list is deduplicated preserving order, unless the importer is
/// enabled — the import crawl deduplicates internally.
pub fn load_sources(
    files: &[String],
    config: &GraphConfig,
) -> Result<Vec<SourceFile>, PipelineError> {
    if config.effective_contents_in_file_path() {
        return Ok(files
            .iter()
            .map(|content| SourceFile {
                origin: LITERAL_ORIGIN.to_string(),
                content: content.clone(),
            })
            .collect());
    }

    let paths = if config.effective_importer() {
        importer::crawl(files)?
    } else {
        dedup_paths(files)
    };

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        if let Some(content) = read_source(&path)? {
            out.push(SourceFile {
                origin: path.display().to_string(),
                content,
            });
        }
    }
    Ok(out)
}

/// Order-preserving dedup of the given path list.
fn dedup_paths(files: &[String]) -> Vec<PathBuf> {
    let mut seen = FxHashSet::default();
    files
        .iter()
        .filter(|f| seen.insert(f.as_str()))
        .map(PathBuf::from)
        .collect()
}

/// Read one source file. A directory is logged and skipped (`None`); any
/// other I/O error is fatal.
pub(crate) fn read_source(path: &Path) -> Result<Option<String>, SourceError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) => {
            if path.is_dir() {
                tracing::warn!(path = %path.display(), "skipping directory");
                Ok(None)
            } else {
                Err(SourceError::Io {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}
