//! # franz
//!
//! Supporting logic for a Kafka-protocol client:
//! - Broker versions: ordering, parsing, formatting and the release registry
//! - KIP-580 retry backoff: exponential growth with jitter, clamped to a cap
//! - Client configuration from TOML files or environment variables
//!
//! Network I/O, the wire codec, and the decision to retry live elsewhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use franz::prelude::*;
//! use std::time::Duration;
//!
//! let config = ClientConfig::default()
//!     .with_version("3.6.2".parse().unwrap())
//!     .with_backoff(Duration::from_millis(100))
//!     .with_max_backoff(Duration::from_secs(1));
//!
//! // record headers need a 0.11 broker
//! assert!(config.supports(V0_11_0_0));
//!
//! let backoff = config.backoff();
//! assert_eq!(backoff.next_delay(0, 3), Duration::from_millis(100));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use config::{ClientConfig, RetryConfig};
pub use error::{Error, Result};

// Module declarations
pub mod config;
pub mod error;

// Tracing subscriber setup (requires trace feature)
#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub mod logging;

/// Convenient re-exports of commonly used items.
pub mod prelude {
    pub use crate::config::{ClientConfig, RetryConfig};
    pub use crate::error::{Error, Result};
    pub use franz_core::retry::{BackoffStrategy, ExponentialBackoff, new_exponential_backoff};
    pub use franz_protocol::version::registry::*;
    pub use franz_protocol::{KafkaVersion, ProtocolError, parse_version_or_default};
}
