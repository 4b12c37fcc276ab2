pub mod donor_repository_impl;

pub use donor_repository_impl::MySqlDonorRepository;
