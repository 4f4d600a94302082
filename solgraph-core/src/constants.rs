//! Shared constants for the solgraph pipeline.

/// solgraph version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key under which a `using ... for *` attachment is recorded.
pub const USING_FOR_WILDCARD: &str = "*";

/// Name of the built-in colour scheme used when none is configured.
pub const DEFAULT_COLOR_SCHEME: &str = "default";

/// Origin label used for source units handed in as literal content.
pub const LITERAL_ORIGIN: &str = "<provided content>";
