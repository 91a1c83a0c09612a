//! # Command Error Handling
//!
//! This module provides error handling utilities for polarisctl commands
//! using the handled crate for consistent error property extraction.

use handled::Handle;

use crate::errors::CatalogError;
use crate::http_utils::HttpError;
use crate::validate::ValidationError;

/// User-friendly error information that can be extracted from various error types
#[derive(Debug, Clone)]
pub struct UserError {
    /// The main error message to display to the user
    pub message: String,
    /// Optional usage hint to help the user correct the error
    pub usage_hint: Option<String>,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Implements Handle<UserError> for itself to allow extraction
impl Handle<UserError> for UserError {
    fn handle(&self) -> Option<UserError> {
        Some(self.clone())
    }
}

impl Handle<UserError> for ValidationError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self {
            ValidationError::InvalidValue { flag, .. } => {
                Some(format!("Check the value passed to {}", flag))
            }
            ValidationError::MissingArgument { .. }
            | ValidationError::UnsupportedStorageOptions { .. } => None,
        };
        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

impl Handle<UserError> for HttpError {
    fn handle(&self) -> Option<UserError> {
        let usage_hint = match self.status {
            Some(400) => Some("Invalid request. Check your input data and try again.".to_string()),
            Some(401) => Some("Authentication required. Check your access token.".to_string()),
            Some(403) => Some(
                "Access forbidden. You may not have permission for this operation.".to_string(),
            ),
            Some(404) => Some(
                "The requested catalog was not found. Check the name and try again.".to_string(),
            ),
            Some(409) => Some(
                "The catalog already exists or was modified concurrently. Fetch it again and retry."
                    .to_string(),
            ),
            Some(429) => Some("Too many requests. Wait a moment and try again.".to_string()),
            Some(500..=599) => {
                Some("Server error. The service may be temporarily unavailable.".to_string())
            }
            Some(_) => None,
            None => Some(
                "Could not reach the management service. Check --host and --port.".to_string(),
            ),
        };

        Some(UserError {
            message: self.to_string(),
            usage_hint,
        })
    }
}

impl Handle<UserError> for CatalogError {
    fn handle(&self) -> Option<UserError> {
        match self {
            CatalogError::Validation(e) => e.handle(),
            CatalogError::Remote(e) => e.handle(),
            CatalogError::UnsupportedSubcommand(_) => Some(UserError {
                message: self.to_string(),
                usage_hint: Some(
                    "Supported subcommands: create, update, get, list, delete".to_string(),
                ),
            }),
            CatalogError::Configuration(_) => Some(UserError {
                message: self.to_string(),
                usage_hint: Some("Check --host and --port.".to_string()),
            }),
            CatalogError::Serialization(_) => None,
        }
    }
}

/// Enhanced error formatting for CLI output
pub fn format_cli_error<E>(error: &E) -> String
where
    E: Handle<UserError> + std::fmt::Display,
{
    if let Some(user_error) = error.handle() {
        let mut output = format!("Error: {}", user_error.message);
        if let Some(hint) = user_error.usage_hint {
            output.push_str(&format!("\nHint: {}", hint));
        }
        output
    } else {
        format!("Error: {}", error)
    }
}
