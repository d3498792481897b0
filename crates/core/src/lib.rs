//! Nestegg Core - Savings goal domain entities, calculator, and traits.
//!
//! This crate contains the core business logic for the savings goal
//! ("piggy bank") feature. It is storage-agnostic and defines traits that
//! are implemented by the `storage-memory` crate or by an embedding
//! application's own data layer.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod money;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the tenant identity type
pub use users::UserId;
