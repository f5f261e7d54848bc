//! Error types for URL assembly and signing
//!
//! Every failure is raised at the call that caused it: a modifier setter,
//! `build()`, `chain()` or config loading. Nothing is deferred or retried.

use thiserror::Error;

/// Errors that can occur while assembling or signing a URL
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UrlError {
    /// Signing key or salt is not a valid hex string
    #[error("Invalid {field} encoding: {message}")]
    InvalidEncoding { field: String, message: String },

    /// Requested signature length is zero or longer than the digest
    #[error("Invalid signature size {size}: must be between 1 and {max}")]
    InvalidSignatureSize { size: usize, max: usize },

    /// A modifier parameter violates the feature's constraints
    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),
}

impl UrlError {
    pub fn invalid_param(param: impl Into<String>, message: impl Into<String>) -> Self {
        UrlError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn invalid_encoding(field: impl Into<String>, message: impl Into<String>) -> Self {
        UrlError::InvalidEncoding {
            field: field.into(),
            message: message.into(),
        }
    }
}
