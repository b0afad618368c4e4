//! Command-line handling, configuration defaults, and error types

/// Command-line interface and generation reporting
pub mod cli;
/// Shape constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
