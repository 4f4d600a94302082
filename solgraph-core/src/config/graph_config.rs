//! Graph generation configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ColorScheme;
use crate::constants::DEFAULT_COLOR_SCHEME;
use crate::errors::ConfigError;

/// Options recognized by the graph pipeline.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SOLGRAPH_*`)
/// 3. Project config (`solgraph.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// Name of the colour scheme to render with. Default: "default".
    pub color_scheme: Option<String>,
    /// Crawl transitive import dependencies instead of deduplicating the
    /// given file list. Default: false.
    pub importer: Option<bool>,
    /// Treat input entries as literal Solidity source rather than paths.
    /// Default: false.
    pub contents_in_file_path: Option<bool>,
    /// Suppress call edges derived from using-for library attachments.
    /// Default: false.
    pub libraries: Option<bool>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub color_scheme: Option<String>,
    pub importer: Option<bool>,
    pub contents_in_file_path: Option<bool>,
    pub libraries: Option<bool>,
}

impl GraphConfig {
    /// Load configuration with layered resolution (see type docs).
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("solgraph.toml");
        if project_config_path.exists() {
            let content = std::fs::read_to_string(&project_config_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_config_path.display().to_string(),
                }
            })?;
            let file_config: GraphConfig =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;
            Self::merge(&mut config, &file_config);
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref name) = self.color_scheme {
            ColorScheme::by_name(name)?;
        }
        Ok(())
    }

    /// The colour scheme this config renders with.
    pub fn resolve_color_scheme(&self) -> Result<ColorScheme, ConfigError> {
        let name = self.color_scheme.as_deref().unwrap_or(DEFAULT_COLOR_SCHEME);
        ColorScheme::by_name(name)
    }

    /// Returns whether transitive import crawling is enabled.
    pub fn effective_importer(&self) -> bool {
        self.importer.unwrap_or(false)
    }

    /// Returns whether input entries are literal source content.
    pub fn effective_contents_in_file_path(&self) -> bool {
        self.contents_in_file_path.unwrap_or(false)
    }

    /// Returns whether using-for library edges are suppressed.
    pub fn effective_libraries(&self) -> bool {
        self.libraries.unwrap_or(false)
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut GraphConfig, other: &GraphConfig) {
        if other.color_scheme.is_some() {
            base.color_scheme = other.color_scheme.clone();
        }
        if other.importer.is_some() {
            base.importer = other.importer;
        }
        if other.contents_in_file_path.is_some() {
            base.contents_in_file_path = other.contents_in_file_path;
        }
        if other.libraries.is_some() {
            base.libraries = other.libraries;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SOLGRAPH_COLOR_SCHEME`, `SOLGRAPH_IMPORTER`, `SOLGRAPH_LIBRARIES`.
    fn apply_env_overrides(config: &mut GraphConfig) {
        if let Ok(val) = std::env::var("SOLGRAPH_COLOR_SCHEME") {
            config.color_scheme = Some(val);
        }
        if let Ok(val) = std::env::var("SOLGRAPH_IMPORTER") {
            if let Ok(v) = val.parse::<bool>() {
                config.importer = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SOLGRAPH_LIBRARIES") {
            if let Ok(v) = val.parse::<bool>() {
                config.libraries = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut GraphConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.color_scheme {
            config.color_scheme = Some(v.clone());
        }
        if let Some(v) = cli.importer {
            config.importer = Some(v);
        }
        if let Some(v) = cli.contents_in_file_path {
            config.contents_in_file_path = Some(v);
        }
        if let Some(v) = cli.libraries {
            config.libraries = Some(v);
        }
    }
}
