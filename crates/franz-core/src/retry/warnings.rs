//! Sinks for non-fatal configuration warnings.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Receives warnings raised while a backoff policy is being built.
///
/// Construction never fails; inconsistent settings are corrected and reported
/// here instead.
pub trait WarningSink: Send + Sync + fmt::Debug {
    /// Report a warning.
    fn warn(&self, message: &str);
}

impl<T: WarningSink + ?Sized> WarningSink for Arc<T> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

/// Forwards warnings to `tracing` at WARN level.
///
/// With the `tracing` feature disabled, warnings are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn warn(&self, message: &str) {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "franz::retry", "{}", message);
        #[cfg(not(feature = "tracing"))]
        let _ = message;
    }
}

/// Keeps every warning in memory.
///
/// ```rust
/// use franz_core::retry::{RecordingWarnings, WarningSink};
///
/// let sink = RecordingWarnings::default();
/// sink.warn("careful");
/// assert_eq!(sink.messages(), vec!["careful".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingWarnings {
    messages: Mutex<Vec<String>>,
}

impl RecordingWarnings {
    /// Snapshot of the warnings received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of warnings received so far.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// True if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarningSink for RecordingWarnings {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
