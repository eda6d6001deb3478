//! Field validation rules for user attributes.
//!
//! Each rule is a pure function so setters, bulk updates and deserialization
//! all share a single implementation.

use crate::constants::{
    FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_PASSWORD, FIELD_USERNAME, MIN_PASSWORD_LENGTH,
};
use crate::error::{DomainError, DomainResult};

/// Username must be non-empty
pub fn validate_username(username: &str) -> DomainResult<()> {
    require_non_empty(FIELD_USERNAME, username, "No username provided")
}

/// Password must hold at least [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_password(password: &str) -> DomainResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::invalid_attribute(
            FIELD_PASSWORD,
            format!(
                "Invalid password. Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
        ));
    }
    Ok(())
}

/// First name must be non-empty
pub fn validate_first_name(first_name: &str) -> DomainResult<()> {
    require_non_empty(FIELD_FIRST_NAME, first_name, "First name must be provided")
}

/// Last name must be non-empty
pub fn validate_last_name(last_name: &str) -> DomainResult<()> {
    require_non_empty(FIELD_LAST_NAME, last_name, "Last name must be provided")
}

fn require_non_empty(field: &'static str, value: &str, message: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::invalid_attribute(field, message));
    }
    Ok(())
}
