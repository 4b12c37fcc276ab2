//! Domain entities for the donor registry.

pub mod donor;
pub mod verification_code;

pub use donor::{
    BloodGroup, DonationRadius, DonationRecency, Donor, DonorProfile, Gender, Genotype,
    MedicalCondition,
};
pub use verification_code::VerificationCode;
