//! Contract-level call graph derivation for Solidity sources.
//!
//! Two sequential passes over the input file set: the collector records every
//! contract's declarations and the resolver classifies every call expression
//! against the completed cross-file declaration set. The result is a
//! deduplicated directed graph rendered as a Graphviz DOT document.

pub mod ast;
pub mod collect;
pub mod graph;
pub mod linearize;
pub mod pipeline;
pub mod resolve;
pub mod sources;

pub use pipeline::contract_graph;
