//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identity
// =============================================================================

/// Identifier carried by users that have not been persisted yet
pub const NEW_USER_ID: i32 = 0;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement, in characters
pub const MIN_PASSWORD_LENGTH: usize = 5;

// =============================================================================
// Attribute names
// =============================================================================

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
