//! Donor entity representing a registered blood donor.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::ValidationError;

/// Donor gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// ABO/Rh blood group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A+" => Some(BloodGroup::APositive),
            "A-" => Some(BloodGroup::ANegative),
            "B+" => Some(BloodGroup::BPositive),
            "B-" => Some(BloodGroup::BNegative),
            "AB+" => Some(BloodGroup::AbPositive),
            "AB-" => Some(BloodGroup::AbNegative),
            "O+" => Some(BloodGroup::OPositive),
            "O-" => Some(BloodGroup::ONegative),
            _ => None,
        }
    }
}

/// Haemoglobin genotype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genotype {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AS")]
    As,
    #[serde(rename = "SS")]
    Ss,
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "SC")]
    Sc,
}

impl Genotype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genotype::Aa => "AA",
            Genotype::As => "AS",
            Genotype::Ss => "SS",
            Genotype::Ac => "AC",
            Genotype::Sc => "SC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AA" => Some(Genotype::Aa),
            "AS" => Some(Genotype::As),
            "SS" => Some(Genotype::Ss),
            "AC" => Some(Genotype::Ac),
            "SC" => Some(Genotype::Sc),
            _ => None,
        }
    }
}

/// Self-reported medical condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicalCondition {
    None,
    Diabetes,
    Hypertension,
    Other,
}

impl Default for MedicalCondition {
    fn default() -> Self {
        MedicalCondition::None
    }
}

impl MedicalCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalCondition::None => "None",
            MedicalCondition::Diabetes => "Diabetes",
            MedicalCondition::Hypertension => "Hypertension",
            MedicalCondition::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "None" => Some(MedicalCondition::None),
            "Diabetes" => Some(MedicalCondition::Diabetes),
            "Hypertension" => Some(MedicalCondition::Hypertension),
            "Other" => Some(MedicalCondition::Other),
            _ => None,
        }
    }
}

/// How long ago the donor last gave blood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationRecency {
    #[serde(rename = "First Time Donor")]
    FirstTimeDonor,
    #[serde(rename = "3 months ago")]
    ThreeMonthsAgo,
    #[serde(rename = "6 months ago")]
    SixMonthsAgo,
    #[serde(rename = "1 year ago")]
    OneYearAgo,
    #[serde(rename = "More than 1 year")]
    MoreThanOneYear,
}

impl DonationRecency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationRecency::FirstTimeDonor => "First Time Donor",
            DonationRecency::ThreeMonthsAgo => "3 months ago",
            DonationRecency::SixMonthsAgo => "6 months ago",
            DonationRecency::OneYearAgo => "1 year ago",
            DonationRecency::MoreThanOneYear => "More than 1 year",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "First Time Donor" => Some(DonationRecency::FirstTimeDonor),
            "3 months ago" => Some(DonationRecency::ThreeMonthsAgo),
            "6 months ago" => Some(DonationRecency::SixMonthsAgo),
            "1 year ago" => Some(DonationRecency::OneYearAgo),
            "More than 1 year" => Some(DonationRecency::MoreThanOneYear),
            _ => None,
        }
    }
}

/// Preferred donation travel radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationRadius {
    #[serde(rename = "5km")]
    FiveKm,
    #[serde(rename = "10km")]
    TenKm,
    #[serde(rename = "25km")]
    TwentyFiveKm,
    #[serde(rename = "50km")]
    FiftyKm,
}

impl DonationRadius {
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationRadius::FiveKm => "5km",
            DonationRadius::TenKm => "10km",
            DonationRadius::TwentyFiveKm => "25km",
            DonationRadius::FiftyKm => "50km",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "5km" => Some(DonationRadius::FiveKm),
            "10km" => Some(DonationRadius::TenKm),
            "25km" => Some(DonationRadius::TwentyFiveKm),
            "50km" => Some(DonationRadius::FiftyKm),
            _ => None,
        }
    }
}

/// Profile data supplied at signup, before credentials are attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorProfile {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub genotype: Genotype,
    #[serde(default)]
    pub medical_condition: MedicalCondition,
    pub last_donation_date: DonationRecency,
    pub current_location: String,
    pub preferred_donation_radius: DonationRadius,
    pub preferred_donation_centers: Vec<String>,
    pub agree_to_donate: bool,
    #[serde(default)]
    pub allow_contact: bool,
}

impl DonorProfile {
    /// Validate field-level invariants before any persistence attempt
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            });
        }
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "phoneNumber".to_string(),
            });
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(ValidationError::InvalidValue {
                field: "email".to_string(),
            });
        }
        if self.current_location.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "currentLocation".to_string(),
            });
        }
        if self.preferred_donation_centers.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "preferredDonationCenters".to_string(),
            });
        }
        if !self.agree_to_donate {
            return Err(ValidationError::BusinessRule {
                rule: "You must agree to donate voluntarily.".to_string(),
            });
        }
        Ok(())
    }
}

/// Donor entity: one record per registrant
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    /// Unique identifier for the donor
    pub id: Uuid,

    pub name: String,
    pub date_of_birth: NaiveDate,

    /// Unique across all donors
    pub phone_number: String,

    /// Unique across all donors, stored lowercase
    pub email: String,

    pub gender: Gender,

    /// bcrypt hash, never empty; the plaintext is never persisted
    pub password_hash: String,

    /// Once true, never reverts
    pub is_verified: bool,

    /// Pending email verification code, present only while unverified
    pub verification_code: Option<String>,

    /// Expiry paired with `verification_code`
    pub verification_expires: Option<DateTime<Utc>>,

    pub blood_group: BloodGroup,
    pub genotype: Genotype,
    pub medical_condition: MedicalCondition,
    pub last_donation_date: DonationRecency,
    pub current_location: String,
    pub preferred_donation_radius: DonationRadius,
    pub preferred_donation_centers: Vec<String>,
    pub agree_to_donate: bool,
    pub allow_contact: bool,

    pub created_at: DateTime<Utc>,
}

impl Donor {
    /// Creates a new unverified donor from a validated profile and a
    /// password hash
    pub fn new(profile: DonorProfile, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: profile.name,
            date_of_birth: profile.date_of_birth,
            phone_number: profile.phone_number,
            email: profile.email.to_lowercase(),
            gender: profile.gender,
            password_hash,
            is_verified: false,
            verification_code: None,
            verification_expires: None,
            blood_group: profile.blood_group,
            genotype: profile.genotype,
            medical_condition: profile.medical_condition,
            last_donation_date: profile.last_donation_date,
            current_location: profile.current_location,
            preferred_donation_radius: profile.preferred_donation_radius,
            preferred_donation_centers: profile.preferred_donation_centers,
            agree_to_donate: profile.agree_to_donate,
            allow_contact: profile.allow_contact,
            created_at: Utc::now(),
        }
    }

    /// Attach a fresh verification code, replacing any previous one
    pub fn set_verification_code(&mut self, code: &VerificationCode) {
        self.verification_code = Some(code.code.clone());
        self.verification_expires = Some(code.expires_at);
    }

    /// Whether the supplied code matches the stored one and is still live
    pub fn accepts_code(&self, input: &str, now: DateTime<Utc>) -> bool {
        match (&self.verification_code, &self.verification_expires) {
            (Some(code), Some(expires)) => code == input && now <= *expires,
            _ => false,
        }
    }

    /// Marks the donor as verified and clears the pending code
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.verification_code = None;
        self.verification_expires = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    pub(crate) fn sample_profile() -> DonorProfile {
        DonorProfile {
            name: "Amina Bello".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 4, 12).unwrap(),
            phone_number: "+2348012345678".to_string(),
            email: "Amina@Example.com".to_string(),
            gender: Gender::Female,
            blood_group: BloodGroup::OPositive,
            genotype: Genotype::As,
            medical_condition: MedicalCondition::None,
            last_donation_date: DonationRecency::FirstTimeDonor,
            current_location: "Lagos".to_string(),
            preferred_donation_radius: DonationRadius::TenKm,
            preferred_donation_centers: vec!["LUTH".to_string()],
            agree_to_donate: true,
            allow_contact: false,
        }
    }

    #[test]
    fn test_new_donor_is_unverified_with_lowercase_email() {
        let donor = Donor::new(sample_profile(), "hash".to_string());

        assert!(!donor.is_verified);
        assert_eq!(donor.email, "amina@example.com");
        assert!(donor.verification_code.is_none());
        assert!(donor.verification_expires.is_none());
    }

    #[test]
    fn test_profile_validation_rejects_missing_agreement() {
        let mut profile = sample_profile();
        profile.agree_to_donate = false;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_validation_rejects_empty_centers() {
        let mut profile = sample_profile();
        profile.preferred_donation_centers.clear();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_verify_clears_code_and_expiry() {
        let mut donor = Donor::new(sample_profile(), "hash".to_string());
        let code = VerificationCode::generate(15);
        donor.set_verification_code(&code);
        assert!(donor.verification_code.is_some());

        donor.verify();

        assert!(donor.is_verified);
        assert!(donor.verification_code.is_none());
        assert!(donor.verification_expires.is_none());
    }

    #[test]
    fn test_accepts_code_only_before_expiry() {
        let mut donor = Donor::new(sample_profile(), "hash".to_string());
        let code = VerificationCode::generate(15);
        donor.set_verification_code(&code);

        let now = Utc::now();
        assert!(donor.accepts_code(&code.code, now));
        assert!(!donor.accepts_code("000000", now));
        assert!(!donor.accepts_code(&code.code, code.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_enum_wire_strings_round_trip() {
        for group in [
            BloodGroup::APositive,
            BloodGroup::ANegative,
            BloodGroup::AbPositive,
            BloodGroup::ONegative,
        ] {
            assert_eq!(BloodGroup::parse(group.as_str()), Some(group));
        }
        assert_eq!(
            serde_json::to_string(&BloodGroup::AbNegative).unwrap(),
            "\"AB-\""
        );
        assert_eq!(
            serde_json::to_string(&DonationRecency::ThreeMonthsAgo).unwrap(),
            "\"3 months ago\""
        );
        assert!(serde_json::from_str::<BloodGroup>("\"C+\"").is_err());
    }
}
