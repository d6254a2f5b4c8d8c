//! Error types for the multiselect field.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid field attribute: {0}")]
    InvalidAttribute(#[source] serde_json::Error),

    #[error("translation file {path}: {source}")]
    TranslationIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("translation file {path} is not a flat string map: {source}")]
    TranslationFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
