//! The backoff abstraction shared by every retrying caller.

use std::time::Duration;

/// A policy that says how long to wait before resubmitting a failed request.
///
/// Implementations only compute delays. The dispatcher that owns the request
/// decides whether another attempt happens at all, sleeps for the returned
/// duration, and owns cancellation of that sleep.
///
/// # Examples
///
/// ```rust
/// use franz_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// fn worst_case_wait(strategy: &dyn BackoffStrategy, max_retries: i32) -> Duration {
///     (1..=max_retries)
///         .map(|_| strategy.max_delay())
///         .sum()
/// }
///
/// let backoff = ExponentialBackoff::new(Duration::from_millis(100), Duration::from_secs(1));
/// assert_eq!(worst_case_wait(&backoff, 3), Duration::from_secs(3));
/// ```
pub trait BackoffStrategy: Send + Sync {
    /// Calculate the delay before the next attempt.
    ///
    /// # Parameters
    /// - `retries`: failures so far for this request. Values `<= 0` mean no
    ///   failure has been counted yet.
    /// - `max_retries`: the caller's retry limit, passed through for
    ///   strategies that want it. It never turns a delay into "stop".
    ///
    /// # Returns
    /// A bounded, non-negative duration. Never fails.
    fn next_delay(&self, retries: i32, max_retries: i32) -> Duration;

    /// The delay used before any exponential growth.
    fn initial_delay(&self) -> Duration;

    /// Upper bound on any delay returned by [`next_delay`](Self::next_delay).
    fn max_delay(&self) -> Duration;
}
