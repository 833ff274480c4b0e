//! SaveMission Core - Domain entities, plan derivation, services, and traits.
//!
//! This crate contains the business logic for savings goals and their
//! weekly missions. It is database-agnostic and defines the repository and
//! identity traits that the `storage-sqlite` crate and the server implement.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod missions;
pub mod plans;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
