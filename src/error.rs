//! Error types for the PVC converter
//!
//! Provides structured error types for quantity parsing, API object
//! conversion, patch generation and configuration loading.

use thiserror::Error;

/// Unified error type for the converter
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Conversion Errors
    // =========================================================================
    #[error("Malformed storage quantity: {quantity:?}")]
    MalformedQuantity { quantity: String },

    #[error("Missing required field on API object: {field}")]
    MissingRequiredField { field: &'static str },

    // =========================================================================
    // Patch Errors
    // =========================================================================
    #[error("Documents cannot be compared: {reason}")]
    IncomparableDocuments { reason: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed_quantity(quantity: impl Into<String>) -> Self {
        Error::MalformedQuantity {
            quantity: quantity.into(),
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Error::MissingRequiredField { field }
    }

    /// Check if the caller can fix this error by correcting its input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedQuantity { .. }
                | Error::MissingRequiredField { .. }
                | Error::IncomparableDocuments { .. }
                | Error::Json(_)
                | Error::Yaml(_)
        )
    }
}

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing("metadata.uid");
        assert_eq!(
            err.to_string(),
            "Missing required field on API object: metadata.uid"
        );

        let err = Error::malformed_quantity("10GB");
        assert_eq!(err.to_string(), "Malformed storage quantity: \"10GB\"");
    }

    #[test]
    fn test_input_errors() {
        assert!(Error::malformed_quantity("x").is_input_error());
        assert!(Error::missing("spec").is_input_error());

        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_input_error());
        assert!(!Error::Configuration("bad".into()).is_input_error());
    }
}
