//! CLI error types

use membership_types::MembershipError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API error response
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected before reaching the API
    #[error("{0}")]
    Membership(#[from] MembershipError),

    /// Some entries of a change request were rejected
    #[error("{failed} of {total} membership changes failed")]
    ChangesRejected {
        /// Rejected entries
        failed: usize,
        /// All entries in the request
        total: usize,
    },

    /// Confirmation prompt declined
    #[error("Aborted: no members were removed")]
    Aborted,

    /// Confirmation prompt could not be shown
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
