//! BloodBridge HTTP API.
//!
//! Exposes the donor account lifecycle over REST: signup, email
//! verification, code resend, and login.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
