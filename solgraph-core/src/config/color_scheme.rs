//! Colour schemes for the rendered graph.
//!
//! A scheme is pure presentation config: graph-level attributes, node styles
//! for defined/undefined contracts, and edge colours per call kind. Two
//! built-in schemes are provided; a TOML config may override either.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::ConfigError;

/// Graph-level attributes applied to the digraph itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DigraphStyle {
    /// Background colour of the whole diagram, if any.
    pub bgcolor: Option<String>,
    /// Default attributes applied to every node.
    pub node_attribs: BTreeMap<String, String>,
    /// Default attributes applied to every edge.
    pub edge_attribs: BTreeMap<String, String>,
}

/// Styling of a single contract node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NodeColors {
    pub color: String,
    pub fontcolor: Option<String>,
    pub style: Option<String>,
    /// Used by the legend swatch for defined contracts.
    pub bgcolor: Option<String>,
}

/// Edge colours per call classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CallColors {
    /// External and otherwise-unclassified calls.
    pub default: String,
    /// Internal direct-name calls.
    pub regular: String,
    /// Calls through `this`.
    #[serde(rename = "this")]
    pub this_call: String,
}

/// A complete colour scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColorScheme {
    pub digraph: DigraphStyle,
    pub defined: NodeColors,
    pub undefined: NodeColors,
    pub call: CallColors,
}

impl ColorScheme {
    /// The light scheme used when nothing else is configured.
    pub fn light() -> Self {
        Self {
            digraph: DigraphStyle::default(),
            defined: NodeColors {
                color: "lightgray".to_string(),
                fontcolor: None,
                style: Some("filled".to_string()),
                bgcolor: Some("lightgray".to_string()),
            },
            undefined: NodeColors {
                color: "gray".to_string(),
                fontcolor: None,
                style: Some("dashed".to_string()),
                bgcolor: None,
            },
            call: CallColors {
                default: "orange".to_string(),
                regular: "green".to_string(),
                this_call: "green".to_string(),
            },
        }
    }

    /// Dark scheme for dark terminal/page backgrounds.
    pub fn dark() -> Self {
        let mut node_attribs = BTreeMap::new();
        node_attribs.insert("style".to_string(), "filled".to_string());
        node_attribs.insert("fillcolor".to_string(), "#3b4b63".to_string());
        Self {
            digraph: DigraphStyle {
                bgcolor: Some("#2e3e56".to_string()),
                node_attribs,
                edge_attribs: BTreeMap::new(),
            },
            defined: NodeColors {
                color: "#445773".to_string(),
                fontcolor: Some("#f0f0f0".to_string()),
                style: Some("filled".to_string()),
                bgcolor: Some("#445773".to_string()),
            },
            undefined: NodeColors {
                color: "#e8726d".to_string(),
                fontcolor: Some("#f0f0f0".to_string()),
                style: Some("dashed".to_string()),
                bgcolor: None,
            },
            call: CallColors {
                default: "#ffa500".to_string(),
                regular: "#1bc6a6".to_string(),
                this_call: "#1bc6a6".to_string(),
            },
        }
    }

    /// Resolve a built-in scheme by name.
    pub fn by_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" | "light" => Ok(Self::light()),
            "dark" => Ok(Self::dark()),
            other => Err(ConfigError::UnknownColorScheme {
                name: other.to_string(),
            }),
        }
    }
}
