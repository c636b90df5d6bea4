//! Error types for recettes-core

use thiserror::Error;

/// Result type alias for recettes-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning raw submitted values into typed inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A category count was not a non-negative integer.
    #[error("invalid count for category '{category}': '{value}'")]
    InvalidCount {
        /// Category label the value was submitted for
        category: String,
        /// The raw submitted value
        value: String,
    },

    /// A required field was absent or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },
}

impl Error {
    /// Creates an invalid count error.
    pub fn invalid_count(category: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidCount {
            category: category.into(),
            value: value.into(),
        }
    }

    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Error::MissingField { field }
    }
}
