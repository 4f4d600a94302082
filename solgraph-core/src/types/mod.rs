//! Shared vocabulary types.

pub mod collections;

use serde::{Deserialize, Serialize};

/// Kind of a Solidity contract definition.
///
/// Abstract contracts are recorded as plain contracts; the distinction has no
/// effect on call resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    Contract,
    Interface,
    Library,
}

impl ContractKind {
    /// Suffix appended to a node label in the rendered graph, if any.
    pub fn label_suffix(&self) -> &'static str {
        match self {
            Self::Contract => "",
            Self::Interface => "  (iface)",
            Self::Library => "  (lib)",
        }
    }
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contract => f.write_str("contract"),
            Self::Interface => f.write_str("interface"),
            Self::Library => f.write_str("library"),
        }
    }
}
