//! Domain models for CarRent.
//!
//! These are the core types shared across all crates.

pub mod booking;
pub mod car;
pub mod dashboard;
pub mod principal;
pub mod user;
