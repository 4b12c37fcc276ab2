//! In-memory implementation of DonorRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::donor::Donor;
use crate::errors::{AccountError, DomainError, ValidationError};

use super::trait_::DonorRepository;

/// Mock donor repository enforcing the same email/phone uniqueness the
/// database indexes would
pub struct MockDonorRepository {
    donors: Arc<RwLock<HashMap<Uuid, Donor>>>,
}

impl MockDonorRepository {
    pub fn new() -> Self {
        Self {
            donors: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockDonorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DonorRepository for MockDonorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Donor>, DomainError> {
        let email = email.to_lowercase();
        let donors = self.donors.read().await;
        Ok(donors.values().find(|d| d.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Donor>, DomainError> {
        let donors = self.donors.read().await;
        Ok(donors.get(&id).cloned())
    }

    async fn create(&self, donor: Donor) -> Result<Donor, DomainError> {
        let mut donors = self.donors.write().await;

        if donors.values().any(|d| d.email == donor.email) {
            return Err(AccountError::EmailAlreadyRegistered.into());
        }
        if donors.values().any(|d| d.phone_number == donor.phone_number) {
            return Err(ValidationError::DuplicateValue {
                field: "phoneNumber".to_string(),
            }
            .into());
        }

        donors.insert(donor.id, donor.clone());
        Ok(donor)
    }

    async fn update(&self, donor: Donor) -> Result<Donor, DomainError> {
        let mut donors = self.donors.write().await;

        if !donors.contains_key(&donor.id) {
            return Err(AccountError::AccountNotFound.into());
        }

        donors.insert(donor.id, donor.clone());
        Ok(donor)
    }

    async fn delete_unverified_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut donors = self.donors.write().await;
        let before = donors.len();
        donors.retain(|_, d| {
            d.is_verified
                || d.verification_expires
                    .map_or(true, |expires| expires >= cutoff)
        });
        Ok((before - donors.len()) as u64)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let donors = self.donors.read().await;
        Ok(donors.len() as u64)
    }
}
