//! Error types and handling for ClaimPulse Core

use thiserror::Error;

/// Result type alias for ClaimPulse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ClaimPulse Core
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation rejections
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors (config file reading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Input-validation rejections.
///
/// This is the entire error taxonomy of the demo: once input validation
/// passes, no operation can fail. Each variant renders as a user-facing
/// message; nothing is retried or escalated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File too large: {size_bytes} bytes (limit is {limit_bytes} bytes)")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("Unsupported file type '{mime}' (expected {expected})")]
    UnsupportedFileType { mime: String, expected: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

impl ValidationError {
    /// Short message suitable for an inline notice in the UI.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::FileTooLarge { limit_bytes, .. } => {
                format!(
                    "Please upload a file smaller than {}MB.",
                    limit_bytes / (1024 * 1024)
                )
            }
            ValidationError::UnsupportedFileType { expected, .. } => {
                format!("Please upload a {} file.", expected)
            }
            ValidationError::MissingField { field } => {
                format!("Please provide {} before continuing.", field)
            }
            ValidationError::InvalidValue { field, value } => {
                format!("'{}' is not a valid {}.", value, field)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ValidationError::FileTooLarge {
            size_bytes: 11 * 1024 * 1024,
            limit_bytes: 10 * 1024 * 1024,
        };
        assert_eq!(err.user_message(), "Please upload a file smaller than 10MB.");

        let err = ValidationError::UnsupportedFileType {
            mime: "text/plain".to_string(),
            expected: "PDF".to_string(),
        };
        assert_eq!(err.user_message(), "Please upload a PDF file.");

        let err = ValidationError::MissingField {
            field: "a rating".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Please provide a rating before continuing."
        );
    }
}
