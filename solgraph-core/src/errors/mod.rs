//! Error handling for solgraph.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod linearize_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use linearize_error::LinearizeError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use source_error::SourceError;
