//! Parser errors.

/// Errors produced when a source unit fails to parse.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The Solidity parser rejected a source unit. `origin` is the file path,
    /// or a generic label when the input was literal content.
    #[error("Error found while parsing {origin}: {message}")]
    Solidity { origin: String, message: String },
}
