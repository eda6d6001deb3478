//! Application error handling.
//!
//! Wraps domain errors together with the I/O and parsing failures that occur
//! around them, and maps each to a stable code and process exit status.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get process exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            AppError::BadRequest(_) => 3,
            AppError::Io(_) => 4,
            AppError::Internal(_) => 1,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for input errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(_) => self.to_string(),

            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                format!("Could not read input: {}", e)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidAttribute { message, .. } => AppError::Validation(message),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Io => AppError::Io(err.into()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
