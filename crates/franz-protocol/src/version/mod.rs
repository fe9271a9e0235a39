//! Broker versions and version gating.
//!
//! A [`KafkaVersion`] names a broker release. The client compares the
//! configured version against the release that introduced a protocol feature
//! to decide which request and response variants it may use.
//!
//! Values cannot be built from arbitrary numbers outside this crate; they come
//! from the [`registry`] constants or from [`KafkaVersion::parse`].
//!
//! # Textual forms
//!
//! | Releases | Grammar | Example |
//! |----------|---------|---------|
//! | before 1.0 | `0.<minor>.<patch_family>.<patch>` | `0.11.0.3` |
//! | 1.0 and later | `<major>.<minor>.<patch_family>` | `2.8.1` |

pub mod registry;

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub use registry::{DEFAULT_VERSION, MAX_VERSION, MIN_VERSION, SUPPORTED_VERSIONS};

/// Shortest text that can possibly be a version (`x.y.z`).
const MIN_VERSION_TEXT_LEN: usize = 5;

/// A broker release: `(major, minor, patch_family, patch)`.
///
/// Ordering compares components from most to least significant.
///
/// ```rust
/// use franz_protocol::version::{KafkaVersion, registry::{V0_11_0_2, V2_8_1_0}};
///
/// assert!(V2_8_1_0.is_at_least(V0_11_0_2));
/// assert!(!V0_11_0_2.is_at_least(V2_8_1_0));
/// assert!(V2_8_1_0.is_at_least(V2_8_1_0));
///
/// let parsed: KafkaVersion = "2.8.1".parse().unwrap();
/// assert_eq!(parsed, V2_8_1_0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KafkaVersion {
    version: [u32; 4],
}

impl KafkaVersion {
    pub(crate) const fn new(major: u32, minor: u32, patch_family: u32, patch: u32) -> Self {
        Self {
            version: [major, minor, patch_family, patch],
        }
    }

    /// Major component; zero for every pre-1.0 release.
    pub const fn major(&self) -> u32 {
        self.version[0]
    }

    /// Minor component.
    pub const fn minor(&self) -> u32 {
        self.version[1]
    }

    /// Third component, the patch family.
    pub const fn patch_family(&self) -> u32 {
        self.version[2]
    }

    /// Fourth component. Only pre-1.0 releases use it.
    pub const fn patch(&self) -> u32 {
        self.version[3]
    }

    /// True if `self` is the same release as `other` or a later one.
    pub fn is_at_least(&self, other: KafkaVersion) -> bool {
        for (mine, theirs) in self.version.iter().zip(other.version.iter()) {
            if mine > theirs {
                return true;
            }
            if mine < theirs {
                return false;
            }
        }
        true
    }

    /// True if this is one of the [`SUPPORTED_VERSIONS`].
    pub fn is_supported(&self) -> bool {
        SUPPORTED_VERSIONS.contains(self)
    }

    /// Parse a version in either textual grammar.
    ///
    /// A leading `0` selects the pre-1.0 grammar; anything else the post-1.0
    /// one, where the fourth component is always zero.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::InvalidVersion`] carrying `s` when the text is shorter
    /// than five bytes, does not match the grammar picked by its first
    /// character, or has a component that does not fit in `u32`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || ProtocolError::InvalidVersion(s.to_string());

        if s.len() < MIN_VERSION_TEXT_LEN {
            return Err(invalid());
        }

        if s.starts_with('0') {
            let [minor, patch_family, patch] = s
                .strip_prefix("0.")
                .and_then(numeric_fields::<3>)
                .ok_or_else(invalid)?;
            Ok(Self::new(0, minor, patch_family, patch))
        } else {
            let [major, minor, patch_family] = numeric_fields::<3>(s).ok_or_else(invalid)?;
            Ok(Self::new(major, minor, patch_family, 0))
        }
    }
}

/// Split `s` on `.` into exactly `N` non-empty, all-digit fields.
fn numeric_fields<const N: usize>(s: &str) -> Option<[u32; N]> {
    let mut fields = [0u32; N];
    let mut parts = s.split('.');

    for field in fields.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *field = part.parse().ok()?;
    }

    parts.next().is_none().then_some(fields)
}

/// Parse `s`, falling back to [`DEFAULT_VERSION`] on failure.
///
/// The returned version is always usable; the error, if any, says why the
/// fallback was taken.
///
/// ```rust
/// use franz_protocol::version::{parse_version_or_default, DEFAULT_VERSION};
///
/// let (version, err) = parse_version_or_default("not-a-version");
/// assert_eq!(version, DEFAULT_VERSION);
/// assert_eq!(err.unwrap().to_string(), "invalid version `not-a-version`");
/// ```
pub fn parse_version_or_default(s: &str) -> (KafkaVersion, Option<ProtocolError>) {
    match KafkaVersion::parse(s) {
        Ok(version) => (version, None),
        Err(err) => (DEFAULT_VERSION, Some(err)),
    }
}

impl Default for KafkaVersion {
    fn default() -> Self {
        DEFAULT_VERSION
    }
}

impl FromStr for KafkaVersion {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KafkaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch_family, patch] = self.version;
        if major == 0 {
            write!(f, "0.{}.{}.{}", minor, patch_family, patch)
        } else {
            write!(f, "{}.{}.{}", major, minor, patch_family)
        }
    }
}

impl Serialize for KafkaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KafkaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::registry::*;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.8.2.0", V0_8_2_0)]
    #[case("0.11.0.2", V0_11_0_2)]
    #[case("1.0.0", V1_0_0_0)]
    #[case("2.8.1", V2_8_1_0)]
    #[case("4.0.0", V4_0_0_0)]
    fn test_parse_known_releases(#[case] text: &str, #[case] expected: KafkaVersion) {
        assert_eq!(KafkaVersion::parse(text), Ok(expected));
    }

    #[test]
    fn test_parse_pre_one_keeps_all_four_components() {
        let version = KafkaVersion::parse("0.11.0.3").unwrap();
        assert_eq!(version, KafkaVersion::new(0, 11, 0, 3));
        assert!(!version.is_supported());
    }

    #[test]
    fn test_parse_post_one_leaves_patch_zero() {
        let version = KafkaVersion::parse("2.8.1").unwrap();
        assert_eq!(
            (version.major(), version.minor(), version.patch_family(), version.patch()),
            (2, 8, 1, 0)
        );
    }

    #[test]
    fn test_parse_unreleased_is_accepted() {
        let version = KafkaVersion::parse("12.34.56").unwrap();
        assert_eq!(version, KafkaVersion::new(12, 34, 56, 0));
        assert!(version.is_at_least(MAX_VERSION));
    }

    #[rstest]
    #[case("")]
    #[case("1.0")]
    #[case("0.10")]
    #[case("not-a-version")]
    #[case("0.10.2")] // pre-1.0 needs four components
    #[case("0.10.2.1.0")]
    #[case("00.10.2.1")]
    #[case("2.8.1.0")] // post-1.0 takes exactly three
    #[case("2.8")]
    #[case("2..8.1")]
    #[case("2.8.1.")]
    #[case(".2.8.1")]
    #[case("v2.8.1")]
    #[case("2.8.x")]
    #[case("+2.8.1")]
    #[case(" 2.8.1")]
    #[case("2.8.1 ")]
    #[case("2.8.-1")]
    #[case("２.8.1")]
    #[case("4294967296.0.0")]
    fn test_parse_rejects(#[case] text: &str) {
        assert_eq!(
            KafkaVersion::parse(text),
            Err(ProtocolError::InvalidVersion(text.to_string()))
        );
    }

    #[test]
    fn test_error_message_embeds_input() {
        let err = KafkaVersion::parse("banana").unwrap_err();
        assert_eq!(err.to_string(), "invalid version `banana`");
        assert_eq!(err.invalid_input(), Some("banana"));
    }

    #[test]
    fn test_fallback_to_default() {
        let (version, err) = parse_version_or_default("not-a-version");
        assert_eq!(version, DEFAULT_VERSION);
        assert!(matches!(err, Some(ProtocolError::InvalidVersion(ref s)) if s == "not-a-version"));

        let (version, err) = parse_version_or_default("3.6.2");
        assert_eq!(version, V3_6_2_0);
        assert!(err.is_none());

        assert_eq!(KafkaVersion::parse("x").unwrap_or_default(), V2_1_0_0);
    }

    #[rstest]
    #[case(KafkaVersion::new(2, 8, 1, 0), "2.8.1")]
    #[case(KafkaVersion::new(0, 11, 0, 3), "0.11.0.3")]
    #[case(KafkaVersion::new(3, 0, 0, 7), "3.0.0")] // patch is not displayed post-1.0
    #[case(V0_8_2_0, "0.8.2.0")]
    fn test_display(#[case] version: KafkaVersion, #[case] expected: &str) {
        assert_eq!(version.to_string(), expected);
    }

    #[test]
    fn test_is_at_least_walks_components() {
        assert!(V1_0_0_0.is_at_least(V0_11_0_2));
        assert!(!V0_11_0_2.is_at_least(V1_0_0_0));
        assert!(V0_10_2_2.is_at_least(V0_10_2_1));
        assert!(!V0_10_2_1.is_at_least(V0_10_2_2));
        assert!(V2_6_3_0.is_at_least(V2_6_0_0));
        assert!(V4_0_0_0.is_at_least(V3_9_0_0));
    }

    #[test]
    fn test_is_at_least_is_reflexive() {
        for version in SUPPORTED_VERSIONS {
            assert!(version.is_at_least(*version));
        }
    }

    #[test]
    fn test_is_at_least_agrees_with_ord() {
        for a in SUPPORTED_VERSIONS {
            for b in SUPPORTED_VERSIONS {
                assert_eq!(a.is_at_least(*b), a >= b, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_default_is_default_version() {
        assert_eq!(KafkaVersion::default(), DEFAULT_VERSION);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&V2_8_1_0).unwrap();
        assert_eq!(json, "\"2.8.1\"");

        let parsed: KafkaVersion = serde_json::from_str("\"0.10.2.2\"").unwrap();
        assert_eq!(parsed, V0_10_2_2);

        let err = serde_json::from_str::<KafkaVersion>("\"2.8\"").unwrap_err();
        assert!(err.to_string().contains("invalid version `2.8`"));
    }
}
