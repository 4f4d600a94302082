//! Inheritance linearization errors.

/// Errors produced by C3 linearization of the inheritance hierarchy.
/// Both indicate malformed source; neither is recoverable.
#[derive(Debug, thiserror::Error)]
pub enum LinearizeError {
    #[error("Inheritance cycle involving contract {contract}")]
    Cycle { contract: String },

    #[error("Inheritance hierarchy of contract {contract} cannot be linearized")]
    Inconsistent { contract: String },
}
