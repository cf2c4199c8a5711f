/*
[INPUT]:  Error sources (key file, HTTP, server response, token, signing)
[OUTPUT]: Structured error types with a coarse failure category
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the wallet login adapter
#[derive(Error, Debug)]
pub enum AuthError {
    /// Reading a local file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Keypair file content is unusable
    #[error("Invalid keypair file: {0}")]
    KeyFile(String),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A required field is absent from the server response
    #[error("Response is missing field '{0}'")]
    MissingField(&'static str),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bearer token could not be decoded
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Wallet refused or failed to sign
    #[error("Signing failed: {0}")]
    Signing(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Trust anchor could not be loaded
    #[error("TLS configuration error: {0}")]
    Tls(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure classes reported to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Credential,
    Transport,
    MalformedResponse,
    Rejected,
    Signing,
}

impl AuthError {
    /// Map the error onto the failure class it belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            AuthError::Io { .. } | AuthError::KeyFile(_) | AuthError::Config(_) => {
                ErrorCategory::Credential
            }
            AuthError::Http(_) | AuthError::UrlParse(_) | AuthError::Tls(_) => {
                ErrorCategory::Transport
            }
            AuthError::MissingField(_)
            | AuthError::Serialization(_)
            | AuthError::InvalidToken(_) => ErrorCategory::MalformedResponse,
            AuthError::Api { .. } => ErrorCategory::Rejected,
            AuthError::Signing(_) => ErrorCategory::Signing,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        AuthError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuthError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for wallet login operations
pub type Result<T> = std::result::Result<T, AuthError>;
