//! Ember Cryptographic Primitives
//!
//! Two independent building blocks for higher-level protocols. Pure functions
//! over raw bytes with deterministic outputs; callers supply any secret
//! material and handle framing.
//!
//! # Components
//!
//! ```text
//! Authenticator (HMAC-SHA-256)
//!   key ──▶ authenticate(message) ──▶ Tag[32]
//!       ──▶ verify(tag, message)  ──▶ recompute + constant-time compare
//!
//! Point (Curve25519)
//!   Point::base() ──multiply(secret)──▶ public key
//!   peer public   ──multiply(secret)──▶ shared secret
//! ```
//!
//! # Security
//!
//! Authentication:
//! - Keys may be any non-empty length; no fixed-size restriction
//! - `verify` never short-circuits on the first differing byte
//! - A malformed tag (wrong length) is an error, a mismatching tag is `false`
//!
//! Key agreement:
//! - The all-zero point is never accepted as input or returned as output
//! - Low-order peer points are caught through their all-zero product
//! - Scalars and products are zeroized after use

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod auth;
pub mod error;
pub mod point;

pub use auth::{Authenticator, KEY_BYTES, MIN_KEY_BYTES, TAG_BYTES, Tag, constant_time_eq};
pub use error::CryptoError;
pub use point::{POINT_BYTES, Point, SCALAR_BYTES};
