//! Configuration for the franz client

use crate::error::{Error, Result};
use franz_core::retry::{
    DEFAULT_RETRY_BACKOFF, DEFAULT_RETRY_MAX_BACKOFF, ExponentialBackoff, new_exponential_backoff,
};
use franz_protocol::{DEFAULT_VERSION, KafkaVersion, ProtocolError, parse_version_or_default};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the target broker version.
pub const ENV_KAFKA_VERSION: &str = "FRANZ_KAFKA_VERSION";
/// Environment variable holding the retry limit.
pub const ENV_RETRY_MAX: &str = "FRANZ_RETRY_MAX";
/// Environment variable holding the initial backoff in milliseconds.
pub const ENV_RETRY_BACKOFF_MS: &str = "FRANZ_RETRY_BACKOFF_MS";
/// Environment variable holding the backoff cap in milliseconds.
pub const ENV_RETRY_MAX_BACKOFF_MS: &str = "FRANZ_RETRY_MAX_BACKOFF_MS";

/// Configuration for the franz client.
///
/// Holds the broker version the client should speak and the retry settings
/// for failed requests.
///
/// # Examples
///
/// ```rust
/// use franz::ClientConfig;
/// use franz_protocol::V0_11_0_0;
///
/// let config = ClientConfig::from_toml_str(r#"
///     version = "2.8.1"
///
///     [retry]
///     max = 5
///     backoff_ms = 250
/// "#).unwrap();
///
/// assert_eq!(config.version.to_string(), "2.8.1");
/// assert!(config.supports(V0_11_0_0));
/// assert_eq!(config.retry.max_retries, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Broker version used to pick request and response variants
    pub version: KafkaVersion,

    /// Retry settings for failed requests
    pub retry: RetryConfig,
}

/// Retry settings.
///
/// The client decides whether to retry using `max_retries`; the backoff
/// policy built from `backoff` and `max_backoff` decides how long to wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,

    /// Delay before the first retry. Zero means the 100ms default.
    pub backoff: Duration,

    /// Upper bound on any retry delay. Zero means the 1s default.
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: DEFAULT_RETRY_BACKOFF,
            max_backoff: DEFAULT_RETRY_MAX_BACKOFF,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    version: Option<String>,
    #[serde(default)]
    retry: RawRetry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRetry {
    max: Option<u32>,
    backoff_ms: Option<u64>,
    max_backoff_ms: Option<u64>,
}

impl ClientConfig {
    /// Set the broker version.
    pub fn with_version(mut self, version: KafkaVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the broker version from text, falling back to the default version.
    ///
    /// A rejected string is logged and returned alongside the config, which
    /// then targets [`DEFAULT_VERSION`].
    ///
    /// ```rust
    /// use franz::ClientConfig;
    /// use franz_protocol::DEFAULT_VERSION;
    ///
    /// let (config, err) = ClientConfig::default().with_version_str("latest");
    /// assert_eq!(config.version, DEFAULT_VERSION);
    /// assert!(err.is_some());
    /// ```
    pub fn with_version_str(mut self, version: &str) -> (Self, Option<ProtocolError>) {
        let (parsed, err) = parse_version_or_default(version);
        if let Some(err) = &err {
            tracing::warn!(
                error = %err,
                fallback = %parsed,
                "Unusable broker version, using the default"
            );
        }
        self.version = parsed;
        (self, err)
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Set the delay before the first retry.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.retry.backoff = backoff;
        self
    }

    /// Set the upper bound on retry delays.
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.retry.max_backoff = max_backoff;
        self
    }

    /// Parse a TOML document.
    ///
    /// Every key is optional; missing keys keep their defaults. Unknown keys
    /// and invalid broker versions are errors.
    ///
    /// ```toml
    /// version = "3.6.2"
    ///
    /// [retry]
    /// max = 5
    /// backoff_ms = 100
    /// max_backoff_ms = 2000
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let mut config = Self::default();

        if let Some(version) = raw.version {
            config.version = KafkaVersion::parse(&version)?;
        }
        if let Some(max) = raw.retry.max {
            config.retry.max_retries = max;
        }
        if let Some(ms) = raw.retry.backoff_ms {
            config.retry.backoff = Duration::from_millis(ms);
        }
        if let Some(ms) = raw.retry.max_backoff_ms {
            config.retry.max_backoff = Duration::from_millis(ms);
        }

        tracing::debug!(
            version = %config.version,
            max_retries = config.retry.max_retries,
            backoff = ?config.retry.backoff,
            max_backoff = ?config.retry.max_backoff,
            "Loaded client configuration"
        );
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `FRANZ_KAFKA_VERSION`, `FRANZ_RETRY_MAX`,
    /// `FRANZ_RETRY_BACKOFF_MS` and `FRANZ_RETRY_MAX_BACKOFF_MS`. Unset
    /// variables keep their defaults; set but malformed ones are errors.
    /// With the `env` feature a `.env` file is loaded first.
    pub fn from_env() -> Result<Self> {
        use std::env;

        #[cfg(feature = "env")]
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(version) = env::var(ENV_KAFKA_VERSION) {
            config.version = KafkaVersion::parse(version.trim())?;
        }

        if let Ok(raw) = env::var(ENV_RETRY_MAX) {
            config.retry.max_retries = parse_env_number(ENV_RETRY_MAX, &raw)?;
        }

        if let Ok(raw) = env::var(ENV_RETRY_BACKOFF_MS) {
            config.retry.backoff =
                Duration::from_millis(parse_env_number(ENV_RETRY_BACKOFF_MS, &raw)?);
        }

        if let Ok(raw) = env::var(ENV_RETRY_MAX_BACKOFF_MS) {
            config.retry.max_backoff =
                Duration::from_millis(parse_env_number(ENV_RETRY_MAX_BACKOFF_MS, &raw)?);
        }

        Ok(config)
    }

    /// True if the configured broker is at least `feature_min`.
    ///
    /// `feature_min` is the release that introduced the feature being gated.
    pub fn supports(&self, feature_min: KafkaVersion) -> bool {
        self.version.is_at_least(feature_min)
    }

    /// Build the backoff policy for these retry settings.
    ///
    /// An initial backoff above the cap is lowered to the cap and logged.
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(self.retry.backoff, self.retry.max_backoff)
    }

    /// The backoff policy as a plain `(retries, max_retries) -> delay` function.
    pub fn backoff_fn(&self) -> impl Fn(i32, i32) -> Duration + Send + Sync + 'static {
        new_exponential_backoff(self.retry.backoff, self.retry.max_backoff)
    }
}

fn parse_env_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{name}={raw:?}: {e}")))
}
