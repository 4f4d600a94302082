//! Transitive import crawling.
//!
//! Breadth-first walk over relative `import` directives: each discovered
//! file is parsed, its imports resolved against the importing file's
//! directory, and unvisited targets are queued. Discovery order is
//! preserved. Non-relative imports (package remappings such as
//! `@openzeppelin/...`) cannot be resolved from source alone and are
//! logged and skipped.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use solang_parser::pt;

use solgraph_core::errors::PipelineError;
use solgraph_core::types::collections::FxHashSet;

use crate::ast;

use super::read_source;

/// Expand the initial path list with every transitively imported file.
pub fn crawl(files: &[String]) -> Result<Vec<PathBuf>, PipelineError> {
    let mut queue: VecDeque<PathBuf> = files.iter().map(PathBuf::from).collect();
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let mut out = Vec::new();

    while let Some(path) = queue.pop_front() {
        let key = path.canonicalize().unwrap_or_else(|_| path.clone());
        if !seen.insert(key) {
            continue;
        }
        let Some(content) = read_source(&path)? else {
            continue;
        };
        let unit = ast::parse_unit(&path.display().to_string(), &content)?;
        for target in import_paths(&unit) {
            if target.starts_with("./") || target.starts_with("../") {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                queue.push_back(base.join(&target));
            } else {
                tracing::warn!(
                    import = %target,
                    from = %path.display(),
                    "skipping non-relative import"
                );
            }
        }
        out.push(path);
    }

    Ok(out)
}

/// Import file names declared in one source unit, in declaration order.
fn import_paths(unit: &pt::SourceUnit) -> Vec<String> {
    let mut out = Vec::new();
    for part in &unit.0 {
        if let pt::SourceUnitPart::ImportDirective(import) = part {
            let path = match import {
                pt::Import::Plain(p, _)
                | pt::Import::GlobalSymbol(p, _, _)
                | pt::Import::Rename(p, _, _) => p,
            };
            if let pt::ImportPath::Filename(lit) = path {
                out.push(lit.string.clone());
            }
        }
    }
    out
}
