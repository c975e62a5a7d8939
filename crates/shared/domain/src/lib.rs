//! Domain layer - Core business entities and validation rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user record, the create-request schema and every business rule
//! applied before a mutation live here.

pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{CreateUserRequest, User};
pub use validation::{ensure_deletable_id, validate_password};
