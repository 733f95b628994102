//! Secret-key message authentication with HMAC-SHA-256
//!
//! An [`Authenticator`] owns a key and produces 32-byte tags over arbitrary
//! messages. Each call runs its own incremental hash state:
//!
//! ```text
//! Created ──init(key)──▶ Initialized ──update(chunk)*──▶ Updated ──finalize──▶ Tag
//! ```
//!
//! # Security Properties
//!
//! - Keys may have any non-empty length (RFC 2104)
//! - Verification always recomputes the tag and compares in constant time,
//!   independent of key length
//! - Key bytes are zeroized when the authenticator is dropped

mod state;
mod tag;

use std::fmt;

use zeroize::Zeroize;

use self::state::HashState;
pub use self::tag::{TAG_BYTES, Tag, constant_time_eq};
use crate::error::CryptoError;

/// Recommended key length. Any non-empty key is accepted.
pub const KEY_BYTES: usize = 32;

/// Shortest key accepted by [`Authenticator::new`].
pub const MIN_KEY_BYTES: usize = 1;

/// HMAC-SHA-256 authenticator bound to one secret key.
///
/// Holds no mutable state, so a single instance can be shared across threads
/// and used concurrently.
#[derive(Clone)]
pub struct Authenticator {
    key: Vec<u8>,
}

impl Authenticator {
    /// Create an authenticator from a secret key.
    ///
    /// # Errors
    ///
    /// - `InvalidKey`: the key is empty
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() < MIN_KEY_BYTES {
            tracing::debug!(len = key.len(), "rejecting authenticator key");
            return Err(CryptoError::InvalidKey { reason: "key must not be empty" });
        }

        Ok(Self { key: key.to_vec() })
    }

    /// Compute the tag of `message`.
    ///
    /// Deterministic: the same key and message always produce the same tag.
    pub fn authenticate(&self, message: &[u8]) -> Tag {
        let mut state = HashState::init(&self.key);
        state.update(message);
        state.finalize()
    }

    /// Compute the tag of a message supplied in pieces.
    ///
    /// Equal to [`authenticate`](Self::authenticate) over the concatenation of
    /// all chunks.
    pub fn authenticate_chunks<'a, I>(&self, chunks: I) -> Tag
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut state = HashState::init(&self.key);
        for chunk in chunks {
            state.update(chunk);
        }
        state.finalize()
    }

    /// Check that `tag` authenticates `message`.
    ///
    /// Returns `Ok(false)` for a well-formed tag that does not match.
    ///
    /// # Errors
    ///
    /// - `InvalidLength`: `tag` is not exactly [`TAG_BYTES`] long
    pub fn verify(&self, tag: &[u8], message: &[u8]) -> Result<bool, CryptoError> {
        let supplied = Tag::try_from(tag)?;
        Ok(self.authenticate(message) == supplied)
    }

    /// Check a tag over a message supplied in pieces.
    ///
    /// # Errors
    ///
    /// - `InvalidLength`: `tag` is not exactly [`TAG_BYTES`] long
    pub fn verify_chunks<'a, I>(&self, tag: &[u8], chunks: I) -> Result<bool, CryptoError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let supplied = Tag::try_from(tag)?;
        Ok(self.authenticate_chunks(chunks) == supplied)
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator").field("key_len", &self.key.len()).finish_non_exhaustive()
    }
}

impl Drop for Authenticator {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}
