//! Custom error types for tally-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tally-cli operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Validation errors for data models and inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Removal position outside the record list
    #[error("Index {index} out of range for {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Parse errors for user-entered values
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors (prompt reading, report writing)
    #[error("I/O error: {0}")]
    Io(String),
}

impl TallyError {
    /// Create a "not found" error for products
    pub fn product_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Product",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for products
    pub fn duplicate_product(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Product",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an out-of-range index error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for tally-cli operations
pub type TallyResult<T> = Result<T, TallyError>;
