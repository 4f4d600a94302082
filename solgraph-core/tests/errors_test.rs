//! Error display and conversion tests.

use std::path::PathBuf;

use solgraph_core::errors::{
    ConfigError, LinearizeError, ParseError, PipelineError, SourceError,
};

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::NoInputFiles.to_string(),
        "No files were specified for analysis"
    );
    assert_eq!(
        ConfigError::UnknownColorScheme {
            name: "sepia".to_string()
        }
        .to_string(),
        "Unknown colour scheme: sepia"
    );
}

#[test]
fn parse_error_names_the_origin() {
    let err = ParseError::Solidity {
        origin: "contracts/Token.sol".to_string(),
        message: "unexpected token".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("contracts/Token.sol"));
    assert!(rendered.contains("unexpected token"));
}

#[test]
fn linearize_error_names_the_contract() {
    let err = LinearizeError::Cycle {
        contract: "A".to_string(),
    };
    assert!(err.to_string().contains("A"));
    let err = LinearizeError::Inconsistent {
        contract: "Z".to_string(),
    };
    assert!(err.to_string().contains("Z"));
}

#[test]
fn subsystem_errors_convert_into_pipeline_errors() {
    let config: PipelineError = ConfigError::NoInputFiles.into();
    assert!(matches!(config, PipelineError::Config(_)));

    let source: PipelineError = SourceError::Io {
        path: PathBuf::from("a.sol"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
    .into();
    assert!(matches!(source, PipelineError::Source(_)));

    let parse: PipelineError = ParseError::Solidity {
        origin: "a.sol".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert!(matches!(parse, PipelineError::Parse(_)));

    let linearize: PipelineError = LinearizeError::Cycle {
        contract: "A".to_string(),
    }
    .into();
    assert!(matches!(linearize, PipelineError::Linearize(_)));
}

#[test]
fn pipeline_error_prefixes_subsystem() {
    let err: PipelineError = ConfigError::NoInputFiles.into();
    assert!(err.to_string().starts_with("Configuration error:"));
}
