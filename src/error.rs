//! Error types for Mail Composer
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::domain::draft::DraftField;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Required draft fields are empty at submit time
    #[snafu(display("Please fill in all required fields (missing: {})", list_fields(missing)))]
    Validation { missing: Vec<DraftField> },

    /// The send collaborator failed instead of answering accept/reject
    #[snafu(display("Send failed: {message}"))]
    SendFailed { message: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl Error {
    /// Whether this error should surface to the user as a blocking notice
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

fn list_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_missing_fields() {
        let err = Error::Validation {
            missing: vec![DraftField::To, DraftField::Subject],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (missing: To, Subject)"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn send_failed_is_not_validation() {
        let err = Error::SendFailed {
            message: "smtp down".to_string(),
        };
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Send failed: smtp down");
    }
}
