//! Password hashing policy
//!
//! Argon2id with explicit, non-zero work parameters and a fresh salt
//! per hash. Verification distinguishes a mismatch (`Ok(false)`) from
//! a hashing subsystem failure (`Err`) so callers can answer 401 vs
//! 500 correctly.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

/// Default memory cost in KiB (argon2id deployment tuning)
const DEFAULT_M_COST: u32 = 19 * 1024;
/// Default iteration count
const DEFAULT_T_COST: u32 = 2;
/// Default parallelism
const DEFAULT_P_COST: u32 = 1;

/// Hashing subsystem failure, distinct from a credential mismatch
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hashing parameters: {0}")]
    Params(String),

    #[error("hashing failed: {0}")]
    Hash(String),
}

/// Adaptive password hasher with a fixed deployment cost
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Hasher with the deployment default cost
    pub fn new() -> Self {
        Self::with_params(DEFAULT_M_COST, DEFAULT_T_COST, DEFAULT_P_COST)
            .expect("default parameters are valid")
    }

    /// Hasher with explicit cost parameters
    ///
    /// # Errors
    /// Returns an error if the parameters fall outside argon2's bounds.
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, HashError> {
        let params =
            Params::new(m_cost, t_cost, p_cost, None).map_err(|e| HashError::Params(e.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password into a PHC string with a fresh salt.
    /// Non-deterministic: two hashes of the same plaintext differ.
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HashError::Hash(e.to_string()))?;
        Ok(phc.to_string())
    }

    /// Verify a plaintext against a stored PHC string.
    ///
    /// `Ok(false)` is a mismatch; `Err` means the subsystem failed
    /// (malformed stored hash, parameter errors).
    pub fn verify(&self, hash: &str, plaintext: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError::Hash(e.to_string()))?;
        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::Hash(e.to_string())),
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}
