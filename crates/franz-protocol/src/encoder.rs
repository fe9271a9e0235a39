//! Payload encoders for record keys and values.
//!
//! Anything that can become a byte slice can be a key or value of a produced
//! record. Strings and byte buffers are covered here; applications implement
//! [`Encoder`] for their own types.

use crate::error::Result;
use std::borrow::Cow;

/// A record key or value that can be turned into bytes.
///
/// [`len`](Encoder::len) lets the producer size batches without encoding
/// twice and must equal the length of the bytes returned by
/// [`encode`](Encoder::encode).
///
/// ```rust
/// use franz_protocol::encoder::{Encoder, StringEncoder};
///
/// let key = StringEncoder::from("order-17");
/// assert_eq!(key.len(), 8);
/// assert_eq!(&*key.encode().unwrap(), b"order-17");
/// ```
pub trait Encoder {
    /// The encoded bytes.
    fn encode(&self) -> Result<Cow<'_, [u8]>>;

    /// Number of bytes [`encode`](Encoder::encode) produces.
    fn len(&self) -> usize;

    /// True if the encoded payload is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encodes a UTF-8 string as its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StringEncoder(pub String);

impl Encoder for StringEncoder {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.0.as_bytes()))
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<String> for StringEncoder {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StringEncoder {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Passes a byte buffer through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteEncoder(pub Vec<u8>);

impl Encoder for ByteEncoder {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(&self.0))
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<u8>> for ByteEncoder {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for ByteEncoder {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    fn check_len(encoder: &dyn Encoder) {
        let bytes = encoder.encode().unwrap();
        assert_eq!(encoder.len(), bytes.len());
        assert_eq!(encoder.is_empty(), bytes.is_empty());
    }

    #[test]
    fn test_string_encoder() {
        let encoder = StringEncoder::from("héllo");
        assert_eq!(&*encoder.encode().unwrap(), "héllo".as_bytes());
        // length is in bytes, not characters
        assert_eq!(encoder.len(), 6);
        check_len(&encoder);
    }

    #[test]
    fn test_byte_encoder() {
        let encoder = ByteEncoder::from(&[0u8, 1, 2, 255][..]);
        assert_eq!(&*encoder.encode().unwrap(), &[0, 1, 2, 255]);
        check_len(&encoder);
    }

    #[test]
    fn test_empty_payloads() {
        check_len(&StringEncoder::default());
        check_len(&ByteEncoder::default());
        assert!(ByteEncoder::from(Vec::new()).is_empty());
    }

    #[test]
    fn test_custom_encoder_can_fail() {
        struct Reject;

        impl Encoder for Reject {
            fn encode(&self) -> Result<Cow<'_, [u8]>> {
                Err(ProtocolError::Encoding("unsupported payload".to_string()))
            }

            fn len(&self) -> usize {
                0
            }
        }

        let err = Reject.encode().unwrap_err();
        assert_eq!(err.to_string(), "encoding error: unsupported payload");
        assert_eq!(err.invalid_input(), None);
    }
}
