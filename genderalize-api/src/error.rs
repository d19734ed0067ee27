//! API error types

use genderalize_core::CoreError;
use genderalize_nlp::NlpError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Lexicon or rewriting error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Pipeline configuration error
    #[error(transparent)]
    Pipeline(#[from] NlpError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Target gender other than `m` or `f`
    #[error("invalid target gender '{0}': expected 'm' or 'f'")]
    InvalidGender(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
