//! KIP-580 exponential backoff with jitter.

use super::jitter::{JitterSource, ThreadRngJitter};
use super::strategy::BackoffStrategy;
use super::warnings::{TracingWarnings, WarningSink};
use std::sync::Arc;
use std::time::Duration;

/// Initial delay used when none (or zero) is configured.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// Delay cap used when none (or zero) is configured.
pub const DEFAULT_RETRY_MAX_BACKOFF: Duration = Duration::from_millis(1000);

const JITTER_LOW: f64 = 0.8;
const JITTER_SPREAD: f64 = 0.4;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Exponential backoff strategy following KIP-580.
///
/// # Mathematical Formula
///
/// For `retries` failures so far:
/// ```text
/// retries <= 0:  delay = base
/// otherwise:     delay = min(max, base * 2^(retries - 1) * random(0.8, 1.2))
/// ```
///
/// The `retries <= 0` case skips both growth and jitter, so a caller that asks
/// before counting any failure always sees exactly `base`.
///
/// # Construction
///
/// A zero `base` becomes [`DEFAULT_RETRY_BACKOFF`] and a zero `max` becomes
/// [`DEFAULT_RETRY_MAX_BACKOFF`]. If `base` still exceeds `max`, `base` is
/// lowered to `max` and a warning is reported. Construction never fails.
///
/// # Examples
///
/// ```rust
/// use franz_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::new(Duration::from_millis(100), Duration::from_secs(1));
///
/// assert_eq!(backoff.next_delay(0, 5), Duration::from_millis(100));
///
/// let first = backoff.next_delay(1, 5);
/// assert!(first >= Duration::from_millis(80) && first <= Duration::from_millis(120));
///
/// assert_eq!(backoff.next_delay(10, 5), Duration::from_secs(1));
/// ```
///
/// # Performance Characteristics
///
/// - **Memory**: O(1), no allocations per call
/// - **CPU**: O(1) per call, simple arithmetic plus one random draw
/// - **I/O**: none; sleeping is up to the caller
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    base: Duration,
    max: Duration,
    jitter: Arc<dyn JitterSource>,
}

impl ExponentialBackoff {
    /// Build a policy with thread-local jitter, reporting warnings to `tracing`.
    pub fn new(base: Duration, max: Duration) -> Self {
        Self::builder().base(base).max(max).build()
    }

    /// Create a new builder for configuring exponential backoff.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use franz_core::retry::{ExponentialBackoff, RecordingWarnings};
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// let warnings = Arc::new(RecordingWarnings::default());
    /// let backoff = ExponentialBackoff::builder()
    ///     .base(Duration::from_millis(250))
    ///     .max(Duration::from_secs(5))
    ///     .seed(17)
    ///     .warnings(Arc::clone(&warnings))
    ///     .build();
    ///
    /// assert_eq!(backoff.base(), Duration::from_millis(250));
    /// assert!(warnings.is_empty());
    /// ```
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// The effective initial delay, after defaulting and clamping.
    pub fn base(&self) -> Duration {
        self.base
    }

    /// The effective delay cap, after defaulting.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Compute the delay before resubmitting after `retries` failures.
    ///
    /// `max_retries` is accepted for callers that thread their limit through,
    /// but it does not change the result.
    pub fn delay(&self, retries: i32, _max_retries: i32) -> Duration {
        if retries <= 0 {
            return self.base;
        }

        // 2^(retries - 1); anything past u32 saturates to Duration::MAX.
        let exponent = (retries - 1) as u32;
        let raw = 1u32
            .checked_shl(exponent)
            .and_then(|factor| self.base.checked_mul(factor))
            .unwrap_or(Duration::MAX);

        let factor = JITTER_LOW + JITTER_SPREAD * self.jitter.unit();
        // Products past Duration::MAX saturate before the cap is applied.
        let nanos = (raw.as_nanos() as f64 * factor).round() as u128;
        let jittered = u64::try_from(nanos / NANOS_PER_SEC)
            .map(|secs| Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
            .unwrap_or(Duration::MAX);

        jittered.min(self.max)
    }
}

impl Default for ExponentialBackoff {
    /// 100ms initial delay, 1s cap, thread-local jitter.
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_BACKOFF, DEFAULT_RETRY_MAX_BACKOFF)
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&self, retries: i32, max_retries: i32) -> Duration {
        self.delay(retries, max_retries)
    }

    fn initial_delay(&self) -> Duration {
        self.base
    }

    fn max_delay(&self) -> Duration {
        self.max
    }
}

/// Return a delay function implementing KIP-580 backoff.
///
/// The function is called as `f(retries, max_retries)` after each failed
/// attempt and is safe to share between threads.
///
/// ```rust
/// use franz_core::retry::new_exponential_backoff;
/// use std::time::Duration;
///
/// let backoff = new_exponential_backoff(Duration::ZERO, Duration::ZERO);
/// assert_eq!(backoff(0, 3), Duration::from_millis(100));
/// assert_eq!(backoff(30, 3), Duration::from_millis(1000));
/// ```
pub fn new_exponential_backoff(
    base: Duration,
    max: Duration,
) -> impl Fn(i32, i32) -> Duration + Send + Sync + 'static {
    let policy = ExponentialBackoff::new(base, max);
    move |retries, max_retries| policy.delay(retries, max_retries)
}

/// Builder for configuring [`ExponentialBackoff`].
///
/// Unset or zero durations fall back to the defaults. The jitter source
/// defaults to [`ThreadRngJitter`] and warnings go to [`TracingWarnings`].
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    base: Option<Duration>,
    max: Option<Duration>,
    jitter: Option<Arc<dyn JitterSource>>,
    warnings: Option<Arc<dyn WarningSink>>,
}

impl ExponentialBackoffBuilder {
    /// Set the delay before the first retry.
    ///
    /// Default: 100ms
    pub fn base(mut self, base: Duration) -> Self {
        self.base = Some(base);
        self
    }

    /// Set the upper bound on any delay.
    ///
    /// Default: 1s
    pub fn max(mut self, max: Duration) -> Self {
        self.max = Some(max);
        self
    }

    /// Use a specific randomness source for jitter.
    pub fn jitter_source(mut self, source: impl JitterSource + 'static) -> Self {
        self.jitter = Some(Arc::new(source));
        self
    }

    /// Use a deterministic jitter sequence derived from `seed`.
    pub fn seed(self, seed: u64) -> Self {
        self.jitter_source(super::jitter::SeededJitter::new(seed))
    }

    /// Report construction warnings to `sink` instead of `tracing`.
    pub fn warnings(mut self, sink: impl WarningSink + 'static) -> Self {
        self.warnings = Some(Arc::new(sink));
        self
    }

    /// Build the policy, applying defaults and correcting `base > max`.
    pub fn build(self) -> ExponentialBackoff {
        let mut base = self
            .base
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_RETRY_BACKOFF);
        let max = self
            .max
            .filter(|d| !d.is_zero())
            .unwrap_or(DEFAULT_RETRY_MAX_BACKOFF);

        if base > max {
            let message = format!(
                "backoff {:?} is greater than max backoff {:?}, using max backoff instead",
                base, max
            );
            match &self.warnings {
                Some(sink) => sink.warn(&message),
                None => TracingWarnings.warn(&message),
            }
            base = max;
        }

        ExponentialBackoff {
            base,
            max,
            jitter: self
                .jitter
                .unwrap_or_else(|| Arc::new(ThreadRngJitter) as Arc<dyn JitterSource>),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::{FixedJitter, RecordingWarnings};
    use rstest::rstest;

    fn fixed(base_ms: u64, max_ms: u64, unit: f64) -> ExponentialBackoff {
        ExponentialBackoff::builder()
            .base(Duration::from_millis(base_ms))
            .max(Duration::from_millis(max_ms))
            .jitter_source(FixedJitter::new(unit))
            .build()
    }

    #[test]
    fn test_zero_retries_returns_base_unjittered() {
        // Even the extreme jitter draws must not touch the first delay.
        for unit in [0.0, 0.5, 1.0] {
            let backoff = fixed(100, 1000, unit);
            assert_eq!(backoff.delay(0, 3), Duration::from_millis(100));
            assert_eq!(backoff.delay(-4, 3), Duration::from_millis(100));
        }
    }

    #[rstest]
    #[case(0.0, 80)]
    #[case(0.5, 100)]
    #[case(1.0, 120)]
    fn test_first_retry_jitter_bounds(#[case] unit: f64, #[case] expected_ms: u64) {
        let backoff = fixed(100, 1000, unit);
        assert_eq!(backoff.delay(1, 3), Duration::from_millis(expected_ms));
    }

    #[rstest]
    #[case(1, 100)]
    #[case(2, 200)]
    #[case(3, 400)]
    #[case(4, 800)]
    #[case(5, 1000)]
    fn test_exponential_growth_without_jitter(#[case] retries: i32, #[case] expected_ms: u64) {
        // unit 0.5 makes the jitter factor exactly 1.0
        let backoff = fixed(100, 1000, 0.5);
        assert_eq!(backoff.delay(retries, 10), Duration::from_millis(expected_ms));
    }

    #[test]
    fn test_large_retries_clamp_to_max() {
        let backoff = ExponentialBackoff::new(Duration::from_millis(100), Duration::from_secs(1));
        for retries in [10, 31, 32, 33, 64, i32::MAX] {
            assert_eq!(backoff.delay(retries, 3), Duration::from_secs(1));
        }
    }

    #[test]
    fn test_jitter_can_dip_below_max_near_the_cap() {
        // raw = 1100ms; 0.8 jitter gives 880ms, below the 1s cap
        let backoff = fixed(550, 1000, 0.0);
        assert_eq!(backoff.delay(2, 3), Duration::from_millis(880));
    }

    #[test]
    fn test_max_retries_does_not_affect_delay() {
        let backoff = fixed(100, 1000, 0.25);
        let reference = backoff.delay(3, 0);
        for max_retries in [-1, 1, 3, 100, i32::MAX] {
            assert_eq!(backoff.delay(3, max_retries), reference);
        }
    }

    #[test]
    fn test_zero_durations_use_defaults() {
        let backoff = ExponentialBackoff::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(backoff.base(), DEFAULT_RETRY_BACKOFF);
        assert_eq!(backoff.max(), DEFAULT_RETRY_MAX_BACKOFF);
    }

    #[test]
    fn test_unset_builder_uses_defaults() {
        let backoff = ExponentialBackoff::builder().build();
        assert_eq!(backoff.base(), Duration::from_millis(100));
        assert_eq!(backoff.max(), Duration::from_millis(1000));
    }

    #[test]
    fn test_inverted_bounds_clamp_and_warn_once() {
        let warnings = Arc::new(RecordingWarnings::default());
        let backoff = ExponentialBackoff::builder()
            .base(Duration::from_millis(2000))
            .max(Duration::from_millis(1000))
            .jitter_source(FixedJitter::new(0.0))
            .warnings(Arc::clone(&warnings))
            .build();

        assert_eq!(backoff.base(), Duration::from_millis(1000));
        assert_eq!(backoff.max(), Duration::from_millis(1000));
        assert_eq!(backoff.delay(0, 3), Duration::from_millis(1000));
        // the first retry still jitters around the clamped base
        assert_eq!(backoff.delay(1, 3), Duration::from_millis(800));
        for retries in 2..8 {
            assert_eq!(backoff.delay(retries, 3), Duration::from_millis(1000));
        }

        assert_eq!(warnings.len(), 1);
        assert!(warnings.messages()[0].contains("greater than max backoff"));
    }

    #[test]
    fn test_inverted_bounds_first_retry_stays_in_band() {
        let backoff =
            ExponentialBackoff::new(Duration::from_millis(2000), Duration::from_millis(1000));
        for _ in 0..200 {
            let first = backoff.delay(1, 3);
            assert!(first >= Duration::from_millis(800) && first <= Duration::from_millis(1000));
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    fn test_huge_max_is_not_capped_early(#[case] unit: f64) {
        let backoff = ExponentialBackoff::builder()
            .base(Duration::MAX)
            .max(Duration::MAX)
            .jitter_source(FixedJitter::new(unit))
            .build();

        let floor = Duration::from_secs(u64::MAX / 10 * 7);
        for retries in [1, 5, 64] {
            let delay = backoff.delay(retries, 0);
            assert!(delay >= floor, "retries {retries}: {delay:?}");
            assert!(delay <= Duration::MAX);
        }
    }

    #[test]
    fn test_base_above_default_max_is_clamped() {
        // max unset falls back to 1s, so a 5s base must be lowered
        let warnings = Arc::new(RecordingWarnings::default());
        let backoff = ExponentialBackoff::builder()
            .base(Duration::from_secs(5))
            .warnings(Arc::clone(&warnings))
            .build();

        assert_eq!(backoff.base(), DEFAULT_RETRY_MAX_BACKOFF);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_consistent_bounds_do_not_warn() {
        let warnings = Arc::new(RecordingWarnings::default());
        let _ = ExponentialBackoff::builder()
            .base(Duration::from_millis(1000))
            .max(Duration::from_millis(1000))
            .warnings(Arc::clone(&warnings))
            .build();

        assert!(warnings.is_empty());
    }

    #[test]
    fn test_seeded_policies_agree() {
        let a = ExponentialBackoff::builder().seed(99).build();
        let b = ExponentialBackoff::builder().seed(99).build();

        for retries in 1..6 {
            assert_eq!(a.delay(retries, 5), b.delay(retries, 5));
        }
    }

    #[test]
    fn test_strategy_trait_delegates() {
        let backoff = fixed(100, 1000, 0.5);
        let strategy: &dyn BackoffStrategy = &backoff;

        assert_eq!(strategy.initial_delay(), Duration::from_millis(100));
        assert_eq!(strategy.max_delay(), Duration::from_millis(1000));
        assert_eq!(strategy.next_delay(2, 3), Duration::from_millis(200));
    }

    #[test]
    fn test_closure_form_matches_policy() {
        let backoff =
            new_exponential_backoff(Duration::from_millis(100), Duration::from_millis(1000));

        assert_eq!(backoff(0, 3), Duration::from_millis(100));
        let first = backoff(1, 3);
        assert!(first >= Duration::from_millis(80) && first <= Duration::from_millis(120));
        assert_eq!(backoff(10, 3), Duration::from_millis(1000));
    }

    #[test]
    fn test_default_matches_documented_values() {
        let backoff = ExponentialBackoff::default();
        assert_eq!(backoff.base(), Duration::from_millis(100));
        assert_eq!(backoff.max(), Duration::from_millis(1000));
    }
}
