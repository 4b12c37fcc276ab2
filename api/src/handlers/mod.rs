//! HTTP error handling

pub mod error;
