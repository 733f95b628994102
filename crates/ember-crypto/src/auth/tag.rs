//! Authentication tags and constant-time comparison

use std::fmt;

use subtle::{Choice, ConstantTimeEq};

use crate::error::CryptoError;

/// HMAC-SHA-256 tag size (32 bytes)
pub const TAG_BYTES: usize = 32;

/// Compare two byte strings in constant time.
///
/// Running time depends only on the lengths, never on the position of the
/// first differing byte. Slices of different length compare unequal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// A 32-byte HMAC-SHA-256 authentication tag.
///
/// Equality is constant-time, so comparing a received tag against a computed
/// one with `==` does not leak where they differ.
#[derive(Clone, Copy)]
pub struct Tag([u8; TAG_BYTES]);

impl Tag {
    pub(crate) fn from_array(bytes: [u8; TAG_BYTES]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; TAG_BYTES] {
        &self.0
    }

    /// Consume the tag and return its bytes.
    pub fn into_bytes(self) -> [u8; TAG_BYTES] {
        self.0
    }
}

impl ConstantTimeEq for Tag {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl Eq for Tag {}

impl TryFrom<&[u8]> for Tag {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; TAG_BYTES] = bytes
            .try_into()
            .map_err(|_| CryptoError::invalid_length("tag", TAG_BYTES, bytes.len()))?;
        Ok(Self(array))
    }
}

impl From<[u8; TAG_BYTES]> for Tag {
    fn from(bytes: [u8; TAG_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Tag> for [u8; TAG_BYTES] {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_matches_plain_equality() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }

    #[test]
    fn tag_from_slice_requires_exact_length() {
        assert!(Tag::try_from([0u8; TAG_BYTES].as_slice()).is_ok());

        let short = Tag::try_from([0u8; TAG_BYTES - 1].as_slice());
        assert_eq!(
            short,
            Err(CryptoError::InvalidLength { what: "tag", expected: TAG_BYTES, actual: 31 })
        );

        let long = Tag::try_from([0u8; TAG_BYTES + 1].as_slice());
        assert!(matches!(long, Err(CryptoError::InvalidLength { actual: 33, .. })));
    }

    #[test]
    fn tag_equality_detects_any_byte() {
        let base = Tag::from_array([0x5A; TAG_BYTES]);

        for position in 0..TAG_BYTES {
            let mut bytes = [0x5A; TAG_BYTES];
            bytes[position] ^= 0x01;
            assert_ne!(base, Tag::from_array(bytes), "difference at byte {position} missed");
        }
        assert_eq!(base, Tag::from_array([0x5A; TAG_BYTES]));
    }

    #[test]
    fn tag_from_array_keeps_bytes() {
        let tag = Tag::from([0x11; TAG_BYTES]);
        assert_eq!(tag.into_bytes(), [0x11; TAG_BYTES]);
        assert_eq!(tag, Tag::from_array([0x11; TAG_BYTES]));
    }

    #[test]
    fn debug_prints_hex() {
        let tag = Tag::from_array([0xAB; TAG_BYTES]);
        assert_eq!(format!("{tag:?}"), format!("Tag({})", "ab".repeat(TAG_BYTES)));
    }
}
