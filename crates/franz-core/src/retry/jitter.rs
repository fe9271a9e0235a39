//! Randomness sources for backoff jitter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex};

/// A source of uniformly distributed values in `[0, 1)`.
///
/// [`ExponentialBackoff`](super::ExponentialBackoff) maps each draw onto its
/// jitter factor. Implementations must tolerate concurrent draws from many
/// retrying callers at once.
pub trait JitterSource: Send + Sync + fmt::Debug {
    /// Draw the next value in `[0, 1)`.
    fn unit(&self) -> f64;
}

impl<T: JitterSource + ?Sized> JitterSource for Arc<T> {
    fn unit(&self) -> f64 {
        (**self).unit()
    }
}

/// Draws from the calling thread's generator.
///
/// Every thread owns its generator, so concurrent callers never contend.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn unit(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// A deterministic generator seeded up front.
///
/// Draws are serialized behind a mutex, so the sequence observed by a single
/// caller is reproducible for a given seed.
///
/// ```rust
/// use franz_core::retry::{JitterSource, SeededJitter};
///
/// let a = SeededJitter::new(7);
/// let b = SeededJitter::new(7);
/// assert_eq!(a.unit(), b.unit());
/// ```
#[derive(Debug)]
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    /// Create a generator from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl JitterSource for SeededJitter {
    fn unit(&self) -> f64 {
        // A panic while holding the lock cannot leave the generator invalid.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0.0..1.0)
    }
}

/// Always returns the same value.
///
/// `FixedJitter::new(0.0)` yields the lowest jitter factor and
/// `FixedJitter::new(1.0)` the highest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    /// Create a constant source, clamped into `[0, 1]`. NaN becomes `0.5`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.5)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }
}

impl JitterSource for FixedJitter {
    fn unit(&self) -> f64 {
        self.0
    }
}
