//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the [`User`] entity, its validation rules and the shapes used to move users
//! across process boundaries.

pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{UpdateUser, User, UserRecord, UserResponse};
