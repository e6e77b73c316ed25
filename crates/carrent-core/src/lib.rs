//! CarRent Core: domain models, error types, repository traits and
//! the ownership guard shared by every other crate.

pub mod error;
pub mod image;
pub mod models;
pub mod ownership;
pub mod repository;

pub use error::{CarRentError, CarRentResult};
