pub mod donor;

pub use donor::{DonorRepository, MockDonorRepository};
