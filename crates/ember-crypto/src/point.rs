//! Curve25519 group elements
//!
//! A [`Point`] is the 32-byte Montgomery u-coordinate encoding used by X25519.
//! Points are public values, so equality and ordering compare encodings
//! directly.
//!
//! # Security
//!
//! The all-zero encoding is never a valid [`Point`]:
//! - [`Point::from_bytes`] rejects it
//! - [`Point::multiply`] rejects the literal all-zero scalar before calling
//!   X25519, since scalar clamping would otherwise turn it into a non-zero
//!   multiplier. Other scalars that clamp to the same multiplier (for example
//!   `[1, 0, .., 0]`) are not detected and multiply normally
//! - [`Point::multiply`] rejects an all-zero product, which X25519 returns
//!   for low-order input points and which would be a worthless shared secret

use std::fmt;

use subtle::ConstantTimeEq;
use x25519_dalek::{X25519_BASEPOINT_BYTES, x25519};
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Scalar size (32 bytes)
pub const SCALAR_BYTES: usize = 32;

/// Point encoding size (32 bytes)
pub const POINT_BYTES: usize = 32;

/// The Curve25519 base point, u = 9.
static BASE_POINT: Point = Point(X25519_BASEPOINT_BYTES);

/// A non-degenerate Curve25519 point.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point([u8; POINT_BYTES]);

impl Point {
    /// The process-wide base point.
    ///
    /// `Point::base().multiply(secret)` yields the Diffie-Hellman public key
    /// for `secret`.
    pub fn base() -> &'static Point {
        &BASE_POINT
    }

    /// Decode a point from its 32-byte encoding.
    ///
    /// # Errors
    ///
    /// - `InvalidLength`: `encoding` is not exactly [`POINT_BYTES`] long
    /// - `DegenerateKey`: `encoding` is all-zero
    pub fn from_bytes(encoding: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; POINT_BYTES] = encoding
            .try_into()
            .map_err(|_| CryptoError::invalid_length("point", POINT_BYTES, encoding.len()))?;
        Self::from_array(array)
    }

    /// Multiply this point by `scalar`.
    ///
    /// The point is the receiver and the scalar the argument, so
    /// `peer_public.multiply(my_secret)` is the shared secret.
    ///
    /// # Errors
    ///
    /// - `InvalidLength`: `scalar` is not exactly [`SCALAR_BYTES`] long
    /// - `DegenerateKey`: `scalar` is exactly 32 zero bytes, or the product is
    ///   all-zero. X25519 clamps the scalar first, so only the literal all-zero
    ///   scalar is rejected; scalars that clamp to the same value are not.
    pub fn multiply(&self, scalar: &[u8]) -> Result<Point, CryptoError> {
        let scalar: Zeroizing<[u8; SCALAR_BYTES]> = Zeroizing::new(
            scalar
                .try_into()
                .map_err(|_| CryptoError::invalid_length("scalar", SCALAR_BYTES, scalar.len()))?,
        );

        if is_all_zero(&scalar) {
            tracing::debug!("rejecting all-zero scalar");
            return Err(CryptoError::DegenerateKey);
        }

        let product = Zeroizing::new(x25519(*scalar, self.0));
        if is_all_zero(&product) {
            tracing::debug!("scalar multiplication produced the all-zero point");
            return Err(CryptoError::DegenerateKey);
        }

        Ok(Self(*product))
    }

    /// Public key for `scalar`, i.e. the base point multiplied by `scalar`.
    ///
    /// # Errors
    ///
    /// Same as [`multiply`](Self::multiply).
    pub fn public_key(scalar: &[u8]) -> Result<Point, CryptoError> {
        Self::base().multiply(scalar)
    }

    /// Canonical 32-byte encoding.
    pub fn to_bytes(&self) -> [u8; POINT_BYTES] {
        self.0
    }

    /// Borrow the 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; POINT_BYTES] {
        &self.0
    }

    fn from_array(bytes: [u8; POINT_BYTES]) -> Result<Self, CryptoError> {
        if is_all_zero(&bytes) {
            tracing::debug!("rejecting all-zero point encoding");
            return Err(CryptoError::DegenerateKey);
        }
        Ok(Self(bytes))
    }
}

/// Constant-time all-zero check; scalars and products are secret.
fn is_all_zero(bytes: &[u8; 32]) -> bool {
    bytes.as_slice().ct_eq([0u8; 32].as_slice()).into()
}

impl TryFrom<&[u8]> for Point {
    type Error = CryptoError;

    fn try_from(encoding: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(encoding)
    }
}

impl TryFrom<[u8; POINT_BYTES]> for Point {
    type Error = CryptoError;

    fn try_from(encoding: [u8; POINT_BYTES]) -> Result<Self, Self::Error> {
        Self::from_array(encoding)
    }
}

impl From<Point> for [u8; POINT_BYTES] {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl AsRef<[u8]> for Point {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", hex::encode(self.0))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
