//! Error types for authenticator and group element operations

use thiserror::Error;

/// Errors from authenticator and point operations.
///
/// Every variant describes bad input from the caller. None of them are
/// transient, so none are retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Byte sequence does not have the exact size required
    #[error("invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Which input was rejected (tag, scalar, point)
        what: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Key failed the construction sanity check
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: &'static str,
    },

    /// Point encoding, scalar or multiplication result is all-zero
    #[error("degenerate key: all-zero value rejected")]
    DegenerateKey,
}

impl CryptoError {
    pub(crate) fn invalid_length(what: &'static str, expected: usize, actual: usize) -> Self {
        tracing::debug!(what, expected, actual, "rejecting input with wrong length");
        Self::InvalidLength { what, expected, actual }
    }

    /// Returns true if this error is the all-zero rejection.
    ///
    /// A degenerate result from a well-formed point usually means the peer
    /// sent a low-order point, which protocols may want to report apart from
    /// plain length errors.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateKey)
    }
}
