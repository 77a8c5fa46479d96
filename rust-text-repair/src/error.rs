//! Error types for the text repair library.
//!
//! Cleaning itself never fails; errors only come from configuration
//! validation and from the command-line front end.

/// Result type alias for text repair operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by fallible entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
