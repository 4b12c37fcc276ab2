//! Password hashing with bcrypt.

use crate::errors::{DomainError, DomainResult};

/// One-way credential hasher.
///
/// bcrypt embeds a per-call random salt in the produced hash, so hashing the
/// same plaintext twice yields different hashes while `verify` still matches
/// both.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Lower costs are only appropriate for tests
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A mismatch returns `Ok(false)`; only a malformed stored hash is an
    /// error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("Malformed password hash: {}", e),
        })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
