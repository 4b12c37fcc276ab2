//! Request and response bodies for the account endpoints.
//!
//! The wire format is camelCase JSON. Responses never carry the password
//! hash or the pending verification code.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use bb_core::domain::entities::donor::{
    BloodGroup, DonationRadius, DonationRecency, Donor, DonorProfile, Gender, Genotype,
    MedicalCondition,
};

/// Request body for POST /api/auth/signup
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 7, max = 20, message = "Phone number must be 7-20 characters."))]
    pub phone_number: String,

    #[validate(email(message = "Email must be a valid address."))]
    pub email: String,

    pub gender: Gender,

    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,

    pub confirm_password: String,

    pub blood_group: BloodGroup,

    pub genotype: Genotype,

    #[serde(default)]
    pub medical_condition: MedicalCondition,

    pub last_donation_date: DonationRecency,

    #[validate(length(min = 1, message = "Current location is required."))]
    pub current_location: String,

    pub preferred_donation_radius: DonationRadius,

    pub preferred_donation_centers: Vec<String>,

    pub agree_to_donate: bool,

    #[serde(default)]
    pub allow_contact: bool,
}

impl SignupRequest {
    /// Split the request into the donor profile and the password pair
    pub fn into_parts(self) -> (DonorProfile, String, String) {
        let profile = DonorProfile {
            name: self.name,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email: self.email,
            gender: self.gender,
            blood_group: self.blood_group,
            genotype: self.genotype,
            medical_condition: self.medical_condition,
            last_donation_date: self.last_donation_date,
            current_location: self.current_location,
            preferred_donation_radius: self.preferred_donation_radius,
            preferred_donation_centers: self.preferred_donation_centers,
            agree_to_donate: self.agree_to_donate,
            allow_contact: self.allow_contact,
        };
        (profile, self.password, self.confirm_password)
    }
}

/// Request body for POST /api/auth/verify-email
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    #[validate(email(message = "Email must be a valid address."))]
    pub email: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits."))]
    pub code: String,
}

/// Request body for POST /api/auth/resend-code
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendCodeRequest {
    #[validate(email(message = "Email must be a valid address."))]
    pub email: String,
}

/// Request body for POST /api/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address."))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

/// Public view of a donor account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorResponse {
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub genotype: Genotype,
    pub medical_condition: MedicalCondition,
    pub last_donation_date: DonationRecency,
    pub current_location: String,
    pub preferred_donation_radius: DonationRadius,
    pub preferred_donation_centers: Vec<String>,
    pub agree_to_donate: bool,
    pub allow_contact: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Donor> for DonorResponse {
    fn from(donor: Donor) -> Self {
        Self {
            id: donor.id.to_string(),
            name: donor.name,
            date_of_birth: donor.date_of_birth,
            phone_number: donor.phone_number,
            email: donor.email,
            gender: donor.gender,
            blood_group: donor.blood_group,
            genotype: donor.genotype,
            medical_condition: donor.medical_condition,
            last_donation_date: donor.last_donation_date,
            current_location: donor.current_location,
            preferred_donation_radius: donor.preferred_donation_radius,
            preferred_donation_centers: donor.preferred_donation_centers,
            agree_to_donate: donor.agree_to_donate,
            allow_contact: donor.allow_contact,
            is_verified: donor.is_verified,
            created_at: donor.created_at,
        }
    }
}

/// Response body for a successful login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: DonorResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup_json() -> serde_json::Value {
        json!({
            "name": "Amina Yusuf",
            "dateOfBirth": "1995-04-12",
            "phoneNumber": "+2348012345678",
            "email": "amina@example.com",
            "gender": "Female",
            "password": "s3cretpass",
            "confirmPassword": "s3cretpass",
            "bloodGroup": "O-",
            "genotype": "AA",
            "lastDonationDate": "First Time Donor",
            "currentLocation": "Lagos",
            "preferredDonationRadius": "10km",
            "preferredDonationCenters": ["Lagos Central Blood Bank"],
            "agreeToDonate": true
        })
    }

    #[test]
    fn test_signup_request_deserializes_camel_case() {
        let request: SignupRequest = serde_json::from_value(signup_json()).unwrap();

        assert_eq!(request.name, "Amina Yusuf");
        assert_eq!(request.blood_group, BloodGroup::ONegative);
        assert_eq!(request.genotype, Genotype::Aa);
        assert_eq!(request.medical_condition, MedicalCondition::None);
        assert!(!request.allow_contact);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signup_request_rejects_unknown_blood_group() {
        let mut body = signup_json();
        body["bloodGroup"] = json!("C+");

        assert!(serde_json::from_value::<SignupRequest>(body).is_err());
    }

    #[test]
    fn test_signup_request_validation_flags_bad_email() {
        let mut body = signup_json();
        body["email"] = json!("not-an-email");

        let request: SignupRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_parts_preserves_profile_fields() {
        let request: SignupRequest = serde_json::from_value(signup_json()).unwrap();
        let (profile, password, confirm) = request.into_parts();

        assert_eq!(profile.email, "amina@example.com");
        assert_eq!(profile.preferred_donation_centers.len(), 1);
        assert_eq!(password, "s3cretpass");
        assert_eq!(confirm, "s3cretpass");
    }

    #[test]
    fn test_donor_response_omits_credentials() {
        let request: SignupRequest = serde_json::from_value(signup_json()).unwrap();
        let (profile, _, _) = request.into_parts();
        let donor = Donor::new(profile, "hash".to_string());

        let body = serde_json::to_value(DonorResponse::from(donor)).unwrap();
        let object = body.as_object().unwrap();

        assert!(object.contains_key("isVerified"));
        assert!(!object.contains_key("passwordHash"));
        assert!(!object.contains_key("verificationCode"));
        assert_eq!(body["bloodGroup"], "O-");
    }

    #[test]
    fn test_verify_email_request_code_length() {
        let request = VerifyEmailRequest {
            email: "amina@example.com".to_string(),
            code: "12345".to_string(),
        };
        assert!(request.validate().is_err());

        let request = VerifyEmailRequest {
            email: "amina@example.com".to_string(),
            code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
