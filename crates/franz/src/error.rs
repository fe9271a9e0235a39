//! Error types for the franz client
//!
//! Follows Rust idioms with the `thiserror` crate: one enum for everything the
//! client-facing layer can fail with, wrapping the protocol crate's errors.

use franz_core::error_boundary;
use franz_protocol::ProtocolError;
use thiserror::Error;

/// Result type alias for operations that can fail with a franz error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the franz client.
#[derive(Debug, Error)]
pub enum Error {
    /// A protocol value (usually a broker version) was rejected.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A configuration setting has an unusable value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration file could not be decoded.
    #[error("Invalid configuration file: {0}")]
    Toml(String),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

error_boundary!(toml::de::Error => Error, |e| {
    Error::Toml(e.to_string())
});

impl Error {
    /// True if the error came from an invalid broker version string.
    pub fn is_invalid_version(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::InvalidVersion(_)))
    }
}
