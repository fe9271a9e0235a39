//! Broker version model and payload encoders for the franz Kafka client
//!
//! This crate holds the protocol-level values the rest of the client agrees
//! on, without performing any I/O.
//!
//! # Type Organization
//!
//! - **Broker versions**: [`version`] - ordered release values, the release
//!   registry, parsing and formatting
//! - **Payloads**: [`encoder`] - turning record keys and values into bytes
//! - **Error types**: [`error`] - protocol errors
//!
//! # Design Principles
//!
//! - **Zero I/O**: All types are pure data structures
//! - **Sealed versions**: a [`KafkaVersion`] comes from the registry or the
//!   parser, never from arbitrary numbers
//! - **Lock-free reads**: the registry is `const` data

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```rust
//! use franz_protocol::{KafkaVersion, V0_11_0_0};
//!
//! let broker: KafkaVersion = "2.8.1".parse().unwrap();
//! // record headers arrived in 0.11
//! assert!(broker.is_at_least(V0_11_0_0));
//! ```

pub mod encoder;
pub mod error;
pub mod version;

// Re-export commonly used types at crate level
pub use encoder::{ByteEncoder, Encoder, StringEncoder};
pub use error::{ProtocolError, Result};
pub use version::registry::*;
pub use version::{KafkaVersion, parse_version_or_default};
