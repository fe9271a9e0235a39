#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the franz Kafka client.
//!
//! This crate holds the pieces of the client that have no knowledge of the
//! wire protocol:
//!
//! - **Retry backoff** via the `BackoffStrategy` trait
//!   - KIP-580 exponential backoff with `[0.8, 1.2]` jitter
//!   - Injectable jitter sources (thread-local, seeded, fixed)
//!   - Injectable warning sinks for configuration mistakes
//! - **Declarative error boundaries** via the `error_boundary!` macro
//!
//! Deciding *whether* to retry belongs to the request dispatcher. This crate
//! only answers how long to wait once that decision is made.
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use franz_core::prelude::*;
//! use std::time::Duration;
//!
//! let backoff = ExponentialBackoff::new(Duration::from_millis(100), Duration::from_secs(1));
//!
//! assert_eq!(backoff.next_delay(0, 3), Duration::from_millis(100));
//! assert!(backoff.next_delay(10, 3) <= Duration::from_secs(1));
//! ```

pub mod error;
pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// Import all core abstractions with:
///
/// ```rust
/// use franz_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error_boundary;
    pub use crate::retry::{
        BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder, JitterSource,
        WarningSink, new_exponential_backoff,
    };
}
