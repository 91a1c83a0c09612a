//! Error types for catalog operations.

use crate::http_utils::HttpError;
use crate::validate::ValidationError;

/// Errors that can occur while handling a `catalogs` command.
#[derive(Debug)]
pub enum CatalogError {
    /// The command options were incomplete or inconsistent.
    Validation(ValidationError),
    /// The subcommand is not one the CLI supports.
    UnsupportedSubcommand(String),
    /// The management service or the transport to it failed.
    Remote(HttpError),
    /// The client could not be configured.
    Configuration(String),
    /// A catalog could not be rendered for output.
    Serialization(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::UnsupportedSubcommand(name) => {
                write!(f, "{} is not supported in the CLI", name)
            }
            Self::Remote(e) => write!(f, "{}", e),
            Self::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(e: ValidationError) -> Self {
        CatalogError::Validation(e)
    }
}

impl From<HttpError> for CatalogError {
    fn from(e: HttpError) -> Self {
        CatalogError::Remote(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
