//! Fuzz target for Curve25519 point decoding and multiplication
//!
//! # Strategy
//!
//! - Arbitrary encodings, including wrong lengths and all-zero
//! - Arbitrary scalars, including all-zero
//! - Diffie-Hellman exchanges between arbitrary scalars
//!
//! # Invariants
//!
//! - from_bytes accepts exactly the non-zero 32-byte encodings
//! - Accepted points round-trip through to_bytes
//! - multiply never returns the all-zero point
//! - Both sides of an exchange agree

#![no_main]

use arbitrary::Arbitrary;
use ember_crypto::{CryptoError, POINT_BYTES, Point};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PointScenario {
    encoding: Vec<u8>,
    scalar: [u8; 32],
    peer_scalar: [u8; 32],
}

fuzz_target!(|scenario: PointScenario| {
    let encoding = &scenario.encoding;

    // INVARIANT 1: from_bytes accepts exactly the non-zero 32-byte encodings
    match Point::from_bytes(encoding) {
        Ok(point) => {
            assert_eq!(encoding.len(), POINT_BYTES);
            assert!(encoding.iter().any(|&b| b != 0), "all-zero point accepted");

            // INVARIANT 2: Round-trip
            assert_eq!(point.to_bytes().as_slice(), encoding.as_slice());
            assert_eq!(Point::from_bytes(&point.to_bytes()), Ok(point));

            // INVARIANT 3: Products are never all-zero
            match point.multiply(&scenario.scalar) {
                Ok(product) => assert_ne!(product.to_bytes(), [0u8; POINT_BYTES]),
                Err(err) => assert_eq!(err, CryptoError::DegenerateKey),
            }
        },
        Err(CryptoError::InvalidLength { actual, .. }) => {
            assert_ne!(actual, POINT_BYTES);
        },
        Err(CryptoError::DegenerateKey) => {
            assert!(encoding.iter().all(|&b| b == 0));
        },
        Err(err) => unreachable!("unexpected error: {err}"),
    }

    // INVARIANT 4: Both sides of an exchange agree
    let (Ok(ours), Ok(theirs)) =
        (Point::public_key(&scenario.scalar), Point::public_key(&scenario.peer_scalar))
    else {
        return;
    };
    assert_eq!(theirs.multiply(&scenario.scalar), ours.multiply(&scenario.peer_scalar));
});
