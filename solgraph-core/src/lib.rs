//! Core foundation for the solgraph call graph generator.
//!
//! Shared error enums, configuration, colour schemes, collection re-exports,
//! tracing setup, and constants. Everything here is consumed by
//! `solgraph-analysis` and the CLI; nothing here knows about Solidity syntax.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
