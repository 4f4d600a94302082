//! Contract graph accumulator — petgraph StableGraph, indexed edge dedup.
//!
//! Nodes are keyed by contract name and created lazily: the first reference
//! to an unknown name yields an "undefined"-styled node which is upgraded in
//! place when the contract's definition is later collected. At most one edge
//! exists per ordered (caller, callee) pair; membership is tracked in an
//! indexed set rather than by scanning existing edges.

pub mod dot;

use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use solgraph_core::types::collections::{FxHashMap, FxHashSet};
use solgraph_core::types::ContractKind;

/// Whether a contract was declared in the analyzed input set or only
/// referenced as a call target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    Defined,
    Undefined,
}

/// Visual classification of a call edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallStyle {
    /// Internal direct-name call (constructor, event, struct literal).
    Regular,
    /// Call through `this`.
    SelfCall,
    /// External and otherwise-unclassified calls.
    Default,
}

/// A contract node in the graph.
#[derive(Debug, Clone)]
pub struct ContractNode {
    pub name: String,
    /// Known once the contract's definition has been collected.
    pub kind: Option<ContractKind>,
    pub style: NodeStyle,
}

/// A call edge in the graph.
#[derive(Debug, Clone, Copy)]
pub struct CallEdge {
    pub style: CallStyle,
}

// `petgraph::dot::Dot`'s `Display` impl requires the node and edge weights to
// implement `Display`, even though rendering uses `Config::NodeNoLabel` /
// `Config::EdgeNoLabel` together with attribute getters, which suppress these
// default labels. These impls exist only to satisfy that bound.
impl fmt::Display for ContractNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for CallEdge {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// The contract call graph under construction.
pub struct ContractGraph {
    graph: StableGraph<ContractNode, CallEdge, Directed>,
    /// Map from contract name → NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
    /// Ordered (caller, callee) pairs already present.
    edge_seen: FxHashSet<(NodeIndex, NodeIndex)>,
}

impl ContractGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
            edge_seen: FxHashSet::default(),
        }
    }

    /// Number of contract nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of call edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up a node by contract name.
    pub fn get(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    /// The node weight for an index.
    pub fn node(&self, idx: NodeIndex) -> &ContractNode {
        &self.graph[idx]
    }

    /// Styling of a named node, if present.
    pub fn style_of(&self, name: &str) -> Option<NodeStyle> {
        self.get(name).map(|idx| self.graph[idx].style)
    }

    /// Ensure a node exists for a referenced contract name.
    /// Created "undefined"-styled on first reference.
    pub fn ensure_referenced(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(ContractNode {
            name: name.to_string(),
            kind: None,
            style: NodeStyle::Undefined,
        });
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Register a contract definition: create a defined-styled node, or
    /// upgrade an existing undefined node in place.
    pub fn define(&mut self, name: &str, kind: ContractKind) -> NodeIndex {
        let idx = self.ensure_referenced(name);
        let node = &mut self.graph[idx];
        node.style = NodeStyle::Defined;
        node.kind = Some(kind);
        idx
    }

    /// Add a call edge, deduplicated per ordered (caller, callee) pair.
    /// The first call site between a pair determines the edge style.
    pub fn add_call(&mut self, caller: &str, callee: NodeIndex, style: CallStyle) {
        let caller_idx = self.ensure_referenced(caller);
        if self.edge_seen.insert((caller_idx, callee)) {
            self.graph.add_edge(caller_idx, callee, CallEdge { style });
        }
    }

    /// True if an edge caller → callee exists (by name).
    pub fn has_edge(&self, caller: &str, callee: &str) -> bool {
        match (self.get(caller), self.get(callee)) {
            (Some(a), Some(b)) => self.edge_seen.contains(&(a, b)),
            _ => false,
        }
    }

    /// Iterate node weights.
    pub fn nodes(&self) -> impl Iterator<Item = &ContractNode> {
        self.graph.node_weights()
    }

    pub(crate) fn inner(&self) -> &StableGraph<ContractNode, CallEdge, Directed> {
        &self.graph
    }
}

impl Default for ContractGraph {
    fn default() -> Self {
        Self::new()
    }
}
