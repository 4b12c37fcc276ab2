//! MySQL implementation of the DonorRepository trait.
//!
//! Concrete donor persistence using SQLx. Enum fields are stored as their
//! wire strings and the preferred-centers list as a JSON text column. The
//! unique indexes `uq_donors_email` and `uq_donors_phone` back the
//! duplicate checks in the lifecycle service.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use bb_core::domain::entities::donor::{
    BloodGroup, DonationRadius, DonationRecency, Donor, Gender, Genotype, MedicalCondition,
};
use bb_core::errors::{AccountError, DomainError, ValidationError};
use bb_core::repositories::DonorRepository;

/// MySQL implementation of DonorRepository
pub struct MySqlDonorRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlDonorRepository {
    /// Create a new MySQL donor repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn column_error(column: &str, e: impl std::fmt::Display) -> DomainError {
        DomainError::Database {
            message: format!("Failed to get {}: {}", column, e),
        }
    }

    fn enum_error(column: &str, value: &str) -> DomainError {
        DomainError::Database {
            message: format!("Unknown {} value in store: {}", column, value),
        }
    }

    /// Convert a database row to a Donor entity
    fn row_to_donor(row: &sqlx::mysql::MySqlRow) -> Result<Donor, DomainError> {
        let id: String = row.try_get("id").map_err(|e| Self::column_error("id", e))?;
        let gender: String = row
            .try_get("gender")
            .map_err(|e| Self::column_error("gender", e))?;
        let blood_group: String = row
            .try_get("blood_group")
            .map_err(|e| Self::column_error("blood_group", e))?;
        let genotype: String = row
            .try_get("genotype")
            .map_err(|e| Self::column_error("genotype", e))?;
        let medical_condition: String = row
            .try_get("medical_condition")
            .map_err(|e| Self::column_error("medical_condition", e))?;
        let last_donation_date: String = row
            .try_get("last_donation_date")
            .map_err(|e| Self::column_error("last_donation_date", e))?;
        let preferred_radius: String = row
            .try_get("preferred_donation_radius")
            .map_err(|e| Self::column_error("preferred_donation_radius", e))?;
        let centers_json: String = row
            .try_get("preferred_donation_centers")
            .map_err(|e| Self::column_error("preferred_donation_centers", e))?;

        Ok(Donor {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid donor UUID: {}", e),
            })?,
            name: row
                .try_get("name")
                .map_err(|e| Self::column_error("name", e))?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| Self::column_error("date_of_birth", e))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| Self::column_error("phone_number", e))?,
            email: row
                .try_get("email")
                .map_err(|e| Self::column_error("email", e))?,
            gender: Gender::parse(&gender).ok_or_else(|| Self::enum_error("gender", &gender))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| Self::column_error("password_hash", e))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| Self::column_error("is_verified", e))?,
            verification_code: row
                .try_get("verification_code")
                .map_err(|e| Self::column_error("verification_code", e))?,
            verification_expires: row
                .try_get::<Option<DateTime<Utc>>, _>("verification_expires")
                .map_err(|e| Self::column_error("verification_expires", e))?,
            blood_group: BloodGroup::parse(&blood_group)
                .ok_or_else(|| Self::enum_error("blood_group", &blood_group))?,
            genotype: Genotype::parse(&genotype)
                .ok_or_else(|| Self::enum_error("genotype", &genotype))?,
            medical_condition: MedicalCondition::parse(&medical_condition)
                .ok_or_else(|| Self::enum_error("medical_condition", &medical_condition))?,
            last_donation_date: DonationRecency::parse(&last_donation_date)
                .ok_or_else(|| Self::enum_error("last_donation_date", &last_donation_date))?,
            current_location: row
                .try_get("current_location")
                .map_err(|e| Self::column_error("current_location", e))?,
            preferred_donation_radius: DonationRadius::parse(&preferred_radius)
                .ok_or_else(|| Self::enum_error("preferred_donation_radius", &preferred_radius))?,
            preferred_donation_centers: serde_json::from_str(&centers_json).map_err(|e| {
                DomainError::Database {
                    message: format!("Invalid centers JSON in store: {}", e),
                }
            })?,
            agree_to_donate: row
                .try_get("agree_to_donate")
                .map_err(|e| Self::column_error("agree_to_donate", e))?,
            allow_contact: row
                .try_get("allow_contact")
                .map_err(|e| Self::column_error("allow_contact", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| Self::column_error("created_at", e))?,
        })
    }

    /// Map a SQLx error, turning unique-index violations into the typed
    /// duplicate errors the service expects
    fn map_write_error(e: sqlx::Error, context: &str) -> DomainError {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                let message = db.message();
                if message.contains("uq_donors_phone") {
                    return ValidationError::DuplicateValue {
                        field: "phoneNumber".to_string(),
                    }
                    .into();
                }
                // email index, or an unnamed unique constraint on it
                return AccountError::EmailAlreadyRegistered.into();
            }
        }
        DomainError::Database {
            message: format!("{}: {}", context, e),
        }
    }

    fn centers_json(donor: &Donor) -> Result<String, DomainError> {
        serde_json::to_string(&donor.preferred_donation_centers).map_err(|e| {
            DomainError::Database {
                message: format!("Failed to encode centers: {}", e),
            }
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, date_of_birth, phone_number, email, gender,
           password_hash, is_verified, verification_code, verification_expires,
           blood_group, genotype, medical_condition, last_donation_date,
           current_location, preferred_donation_radius,
           preferred_donation_centers, agree_to_donate, allow_contact,
           created_at
    FROM donors
"#;

#[async_trait]
impl DonorRepository for MySqlDonorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Donor>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email.to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find donor by email: {}", e),
            })?;

        result.as_ref().map(Self::row_to_donor).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Donor>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find donor by id: {}", e),
            })?;

        result.as_ref().map(Self::row_to_donor).transpose()
    }

    async fn create(&self, donor: Donor) -> Result<Donor, DomainError> {
        let query = r#"
            INSERT INTO donors (
                id, name, date_of_birth, phone_number, email, gender,
                password_hash, is_verified, verification_code,
                verification_expires, blood_group, genotype,
                medical_condition, last_donation_date, current_location,
                preferred_donation_radius, preferred_donation_centers,
                agree_to_donate, allow_contact, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(donor.id.to_string())
            .bind(&donor.name)
            .bind(donor.date_of_birth)
            .bind(&donor.phone_number)
            .bind(&donor.email)
            .bind(donor.gender.as_str())
            .bind(&donor.password_hash)
            .bind(donor.is_verified)
            .bind(&donor.verification_code)
            .bind(donor.verification_expires)
            .bind(donor.blood_group.as_str())
            .bind(donor.genotype.as_str())
            .bind(donor.medical_condition.as_str())
            .bind(donor.last_donation_date.as_str())
            .bind(&donor.current_location)
            .bind(donor.preferred_donation_radius.as_str())
            .bind(Self::centers_json(&donor)?)
            .bind(donor.agree_to_donate)
            .bind(donor.allow_contact)
            .bind(donor.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, "Failed to create donor"))?;

        Ok(donor)
    }

    async fn update(&self, donor: Donor) -> Result<Donor, DomainError> {
        // Signup fixes the profile; only the lifecycle fields change
        let query = r#"
            UPDATE donors
            SET is_verified = ?, verification_code = ?, verification_expires = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(donor.is_verified)
            .bind(&donor.verification_code)
            .bind(donor.verification_expires)
            .bind(donor.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error(e, "Failed to update donor"))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::AccountNotFound.into());
        }

        Ok(donor)
    }

    async fn delete_unverified_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let query = r#"
            DELETE FROM donors
            WHERE is_verified = FALSE AND verification_expires < ?
        "#;

        let result = sqlx::query(query)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete expired donors: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) as total FROM donors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to count donors: {}", e),
            })?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| Self::column_error("total", e))?;

        Ok(total as u64)
    }
}
