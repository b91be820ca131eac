//! Signing primitives for session tokens
//!
//! Security-critical: signature checks must not leak where two values
//! diverge, so all comparison goes through `constant_time_eq`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

/// Pre-validated HMAC-SHA256 key for session signing.
#[derive(Clone)]
pub struct SigningKey {
    key_bytes: Arc<[u8]>,
}

impl SigningKey {
    /// Minimum allowed key length in bytes (256 bits)
    pub const MIN_KEY_LENGTH: usize = 32;

    /// Create a new signing key from bytes.
    ///
    /// # Errors
    /// Returns an error if the key is shorter than 32 bytes.
    pub fn new(key: impl AsRef<[u8]>) -> Result<Self, SigningKeyError> {
        let key_bytes = key.as_ref();
        if key_bytes.len() < Self::MIN_KEY_LENGTH {
            return Err(SigningKeyError::KeyTooShort {
                actual: key_bytes.len(),
                minimum: Self::MIN_KEY_LENGTH,
            });
        }
        Ok(Self {
            key_bytes: Arc::from(key_bytes),
        })
    }

    /// Sign data and return the MAC bytes
    pub fn sign(&self, data: &[u8]) -> [u8; 32] {
        // Cannot fail: key length was validated in new()
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.key_bytes)
            .expect("key length already validated");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }

    /// Verify a signature in constant time
    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        constant_time_eq(&self.sign(data), signature)
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("key_length", &self.key_bytes.len())
            .finish_non_exhaustive()
    }
}

/// Errors that can occur when creating a signing key
#[derive(Debug, Clone, thiserror::Error)]
pub enum SigningKeyError {
    #[error("signing key too short: got {actual} bytes, need at least {minimum}")]
    KeyTooShort { actual: usize, minimum: usize },
}

/// Constant-time byte slice comparison.
///
/// Comparison time depends only on slice length, never on content.
/// A length mismatch returns early (length is not secret).
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // XOR accumulator: zero only when every byte pair matches,
    // and every byte pair is visited regardless of differences
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
