//! Fuzz target for the HMAC-SHA-256 authenticator
//!
//! # Strategy
//!
//! - Arbitrary keys (empty, short, block-sized, oversized)
//! - Arbitrary messages split at arbitrary points
//! - Arbitrary candidate tags of any length
//!
//! # Invariants
//!
//! - Empty key is the only rejected key
//! - authenticate is deterministic
//! - verify accepts every tag authenticate produced
//! - Chunked and one-shot tags agree
//! - Flipping any tag bit makes verify return false
//! - Candidate tags of the wrong length error, never panic

#![no_main]

use arbitrary::Arbitrary;
use ember_crypto::{Authenticator, CryptoError, TAG_BYTES};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AuthScenario {
    key: Key,
    message: Vec<u8>,
    split: usize,
    flip_bit: u8,
    candidate: Vec<u8>,
}

#[derive(Debug, Arbitrary)]
enum Key {
    Empty,
    Short([u8; 8]),
    Normal([u8; 32]),
    Block([u8; 64]),
    Oversized([u8; 131]),
    Arbitrary(Vec<u8>),
}

impl Key {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Key::Empty => &[],
            Key::Short(b) => b,
            Key::Normal(b) => b,
            Key::Block(b) => b,
            Key::Oversized(b) => b,
            Key::Arbitrary(b) => b,
        }
    }
}

fuzz_target!(|scenario: AuthScenario| {
    let key = scenario.key.as_bytes();

    // INVARIANT 1: Only the empty key is rejected
    let auth = match Authenticator::new(key) {
        Ok(auth) => auth,
        Err(err) => {
            assert!(key.is_empty(), "non-empty key rejected");
            assert!(matches!(err, CryptoError::InvalidKey { .. }));
            return;
        },
    };

    // INVARIANT 2: Deterministic
    let tag = auth.authenticate(&scenario.message);
    assert_eq!(tag, auth.authenticate(&scenario.message), "authenticate must be deterministic");

    // INVARIANT 3: Own tag verifies
    assert_eq!(auth.verify(tag.as_bytes(), &scenario.message), Ok(true));

    // INVARIANT 4: Chunking does not change the tag
    let at = scenario.split % (scenario.message.len() + 1);
    let (head, tail) = scenario.message.split_at(at);
    assert_eq!(tag, auth.authenticate_chunks([head, tail]), "chunked tag must match");

    // INVARIANT 5: Any bit flip is rejected
    let bit = usize::from(scenario.flip_bit);
    let mut flipped = tag.into_bytes();
    flipped[bit / 8 % TAG_BYTES] ^= 1 << (bit % 8);
    assert_eq!(auth.verify(&flipped, &scenario.message), Ok(false));

    // INVARIANT 6: Arbitrary candidates never panic; wrong length errors
    match auth.verify(&scenario.candidate, &scenario.message) {
        Ok(_) => assert_eq!(scenario.candidate.len(), TAG_BYTES),
        Err(err) => {
            assert_ne!(scenario.candidate.len(), TAG_BYTES);
            assert!(matches!(err, CryptoError::InvalidLength { .. }));
        },
    }
});
