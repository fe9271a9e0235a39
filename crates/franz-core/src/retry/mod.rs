//! Retry backoff for resubmitting failed broker requests.
//!
//! This module computes *how long* to wait before the next attempt. Whether
//! another attempt happens, and the sleep itself, belong to the caller.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - Core trait for delay computation
//! - [`ExponentialBackoff`] - KIP-580 exponential backoff with jitter
//! - [`JitterSource`] - Injectable randomness for jitter
//! - [`WarningSink`] - Injectable reporting of corrected settings
//!
//! # Examples
//!
//! ```rust
//! use franz_core::retry::{BackoffStrategy, ExponentialBackoff, FixedJitter};
//! use std::time::Duration;
//!
//! let backoff = ExponentialBackoff::builder()
//!     .base(Duration::from_millis(100))
//!     .max(Duration::from_secs(1))
//!     .jitter_source(FixedJitter::new(0.5))
//!     .build();
//!
//! assert_eq!(backoff.next_delay(3, 5), Duration::from_millis(400));
//! ```

mod exponential;
mod jitter;
mod strategy;
mod warnings;

pub use exponential::{
    DEFAULT_RETRY_BACKOFF, DEFAULT_RETRY_MAX_BACKOFF, ExponentialBackoff,
    ExponentialBackoffBuilder, new_exponential_backoff,
};
pub use jitter::{FixedJitter, JitterSource, SeededJitter, ThreadRngJitter};
pub use strategy::BackoffStrategy;
pub use warnings::{RecordingWarnings, TracingWarnings, WarningSink};
