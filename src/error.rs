//! Error types for address parsing

use thiserror::Error;

/// Errors that can occur while building a parser or writing diagnostics.
///
/// An address that cannot be parsed is not an error: it comes back as a
/// [`ParsedAddress`](crate::ParsedAddress) with `valid == false`.
#[derive(Error, Debug)]
pub enum AddressError {
    /// A derived pattern failed to compile
    #[error("Failed to build {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A canonicalization table is inconsistent
    #[error("Corrupt canonicalization table: {0}")]
    Table(String),

    /// Failed to write to the rejected-address log
    #[error("Failed to write rejected-address log: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a rejected address
    #[error("Failed to serialize rejected address: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for address parsing operations
pub type Result<T> = std::result::Result<T, AddressError>;
