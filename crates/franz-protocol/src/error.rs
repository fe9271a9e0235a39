//! Error types for protocol operations
//!
//! Provides error types for version parsing and payload encoding.

use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors that can occur during protocol operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Text that is not a broker version in either accepted grammar.
    ///
    /// Carries the offending input verbatim.
    #[error("invalid version `{0}`")]
    InvalidVersion(String),

    /// A payload could not be turned into bytes.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl ProtocolError {
    /// The rejected input, if this is a version error.
    pub fn invalid_input(&self) -> Option<&str> {
        match self {
            Self::InvalidVersion(input) => Some(input),
            Self::Encoding(_) => None,
        }
    }
}
