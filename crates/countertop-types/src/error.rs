//! Error types for countertop pricing

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("'{0}' is not configured")]
    MissingSetting(String),
}

/// Failures of the pricing core.
///
/// None of these are fatal: every pricing operation returns one of them as a
/// typed value and leaves the installed catalog untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Bad or missing numeric input, reported with the offending field
    #[error("Invalid '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Unknown material (or other catalog key)
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    /// External tabular source could not be read at all
    #[error("Failed to load {source_name}: {reason}")]
    Load { source_name: String, reason: String },

    /// Upstream attribute payload was not parseable
    #[error("Attribute analysis unavailable: {0}")]
    AnalysisUnavailable(String),
}

impl PricingError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        PricingError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::Load {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = PricingError::validation("lengthInches", "must be a positive number");
        assert_eq!(
            err.to_string(),
            "Invalid 'lengthInches': must be a positive number"
        );
    }

    #[test]
    fn test_pricing_error_is_transparent_in_umbrella() {
        let err: Error = PricingError::not_found("material", "Frost-N").into();
        assert_eq!(err.to_string(), "material 'Frost-N' not found");
    }
}
