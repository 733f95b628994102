//! Incremental HMAC-SHA-256 state scoped to one authenticate/verify call
//!
//! The state is initialized with the key, updated zero or more times and
//! finalized exactly once. [`HashState::finalize`] consumes the state, so a
//! finalized state cannot be updated or finalized again.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::tag::{TAG_BYTES, Tag};

type HmacSha256 = Hmac<Sha256>;

/// Opaque incremental hash context.
///
/// Never shared between calls or threads. Dropping it releases the inner
/// HMAC context.
pub(crate) struct HashState {
    mac: HmacSha256,
}

impl HashState {
    /// Initialize a fresh state keyed with `key`.
    pub(crate) fn init(key: &[u8]) -> Self {
        let Ok(mac) = HmacSha256::new_from_slice(key) else {
            unreachable!("HMAC-SHA256 accepts any key size");
        };
        Self { mac }
    }

    /// Absorb the next chunk of the message.
    pub(crate) fn update(&mut self, chunk: &[u8]) {
        self.mac.update(chunk);
    }

    /// Finish the computation and produce the tag.
    pub(crate) fn finalize(self) -> Tag {
        let digest = self.mac.finalize().into_bytes();

        let mut tag = [0u8; TAG_BYTES];
        tag.copy_from_slice(&digest);
        Tag::from_array(tag)
    }
}
