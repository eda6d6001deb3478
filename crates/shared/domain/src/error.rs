//! Domain-level errors.
//!
//! These errors represent business rule violations. They are independent of
//! how the caller reports them (CLI, logs, HTTP).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A user attribute failed its validation rule
    #[error("{message}")]
    InvalidAttribute {
        field: &'static str,
        message: String,
    },
}

impl DomainError {
    /// Create an invalid attribute error
    pub fn invalid_attribute(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::InvalidAttribute {
            field,
            message: message.into(),
        }
    }

    /// Name of the attribute that was rejected
    pub fn field(&self) -> &'static str {
        match self {
            DomainError::InvalidAttribute { field, .. } => field,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = DomainError::invalid_attribute("username", "No username provided");
        assert_eq!(err.to_string(), "No username provided");
        assert_eq!(err.field(), "username");
    }
}
