//! Error conversion at crate boundaries.
//!
//! Each franz crate owns one `thiserror` enum. Foreign errors that cross into
//! that enum (TOML decoding, integer parsing of environment overrides) are
//! converted with [`error_boundary!`](crate::error_boundary) instead of
//! repeating `map_err` at every call site.

/// Define a `From` conversion from a foreign error into a crate error.
///
/// The generated impl is what lets `?` cross the boundary.
///
/// # Syntax
///
/// ```ignore
/// error_boundary!(SourceError => TargetError, |err_var| {
///     // conversion logic returning TargetError
/// });
/// ```
///
/// # Example
///
/// ```
/// use franz_core::error_boundary;
///
/// #[derive(Debug, thiserror::Error)]
/// enum ConfigError {
///     #[error("bad retry count: {0}")]
///     RetryCount(String),
/// }
///
/// error_boundary!(std::num::ParseIntError => ConfigError, |e| {
///     ConfigError::RetryCount(e.to_string())
/// });
///
/// fn max_retries(raw: &str) -> Result<u32, ConfigError> {
///     Ok(raw.trim().parse::<u32>()?)
/// }
///
/// assert_eq!(max_retries(" 5 ").unwrap(), 5);
/// assert!(max_retries("five").is_err());
/// ```
#[macro_export]
macro_rules! error_boundary {
    ($inner:ty => $outer:ty, |$err:ident| $body:expr) => {
        impl ::std::convert::From<$inner> for $outer {
            fn from($err: $inner) -> $outer {
                $body
            }
        }
    };
}
