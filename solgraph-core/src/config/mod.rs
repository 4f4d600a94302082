//! Configuration system for solgraph.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod color_scheme;
pub mod graph_config;

pub use color_scheme::{CallColors, ColorScheme, DigraphStyle, NodeColors};
pub use graph_config::{CliOverrides, GraphConfig};
