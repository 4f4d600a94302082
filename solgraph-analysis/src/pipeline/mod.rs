//! The two-pass graph pipeline.
//!
//! Collection must complete over the whole file set before resolution
//! starts: call sites may reference contracts or members declared in files
//! processed later in file order. Strictly single-threaded and synchronous.

use solgraph_core::config::GraphConfig;
use solgraph_core::errors::{ConfigError, PipelineError};

use crate::ast;
use crate::collect::{self, Declarations};
use crate::graph::{dot, ContractGraph};
use crate::linearize;
use crate::resolve;
use crate::sources;

/// Derive the contract call graph for the given input set and return the
/// rendered DOT document.
///
/// `files` holds paths, or literal source when the config says so. An empty
/// input list is rejected before any processing.
pub fn contract_graph(files: &[String], config: &GraphConfig) -> Result<String, PipelineError> {
    if files.is_empty() {
        return Err(ConfigError::NoInputFiles.into());
    }
    let scheme = config.resolve_color_scheme()?;

    let sources = sources::load_sources(files, config)?;
    let mut units = Vec::with_capacity(sources.len());
    for source in &sources {
        units.push(ast::parse_unit(&source.origin, &source.content)?);
    }

    let mut graph = ContractGraph::new();
    let mut decls = Declarations::new();
    for unit in &units {
        collect::collect_unit(&mut decls, &mut graph, unit);
    }

    let lin = linearize::linearize(&decls)?;

    resolve::resolve_units(
        &decls,
        &lin,
        &mut graph,
        config.effective_libraries(),
        &units,
    );

    tracing::info!(
        contracts = graph.node_count(),
        edges = graph.edge_count(),
        "call graph resolution complete"
    );

    Ok(dot::render(&graph, &scheme))
}
