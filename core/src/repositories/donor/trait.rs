//! Donor repository trait defining the interface for donor persistence.
//!
//! Implementations handle the actual database operations while keeping the
//! abstraction boundary between the domain and infrastructure layers. The
//! store enforces the email/phone unique indexes, so two concurrent signups
//! racing to the same email resolve with the second writer receiving a
//! uniqueness violation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::donor::Donor;
use crate::errors::DomainError;

/// Repository trait for Donor entity persistence operations
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Find a donor by email address (matched case-insensitively; stored
    /// emails are lowercase)
    ///
    /// # Returns
    /// * `Ok(Some(Donor))` - Donor found
    /// * `Ok(None)` - No donor with that email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Donor>, DomainError>;

    /// Find a donor by unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Donor>, DomainError>;

    /// Persist a new donor
    ///
    /// # Returns
    /// * `Ok(Donor)` - The created donor
    /// * `Err(DomainError)` - Creation failed; a unique-index violation on
    ///   email surfaces as `AccountError::EmailAlreadyRegistered`, on phone
    ///   as `ValidationError::DuplicateValue`
    async fn create(&self, donor: Donor) -> Result<Donor, DomainError>;

    /// Update an existing donor
    async fn update(&self, donor: Donor) -> Result<Donor, DomainError>;

    /// Delete every donor left unverified past its code expiry
    ///
    /// # Arguments
    /// * `cutoff` - Donors with `verification_expires` before this instant
    ///   and `is_verified = false` are removed
    ///
    /// # Returns
    /// The number of donors deleted
    async fn delete_unverified_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Count all donors
    async fn count(&self) -> Result<u64, DomainError>;
}
