//! Error types for the engine.
//!
//! Missing optional measurements are not errors: formulas that cannot run on
//! the data they were given return `None`. Errors are reserved for invalid
//! mandatory inputs and malformed identifiers.

use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A mandatory numeric input was zero or negative
    #[error("{field} must be positive, got {value}")]
    NonPositiveInput { field: &'static str, value: f64 },

    /// A protocol identifier did not match any known energy protocol
    #[error("unknown energy protocol: {0}")]
    UnknownProtocol(String),

    /// Macro percentages did not add up to 100
    #[error("macro percentages must sum to 100, got {0}")]
    BadMacroSplit(f64),
}

impl EngineError {
    /// Shorthand used by input validation.
    pub(crate) fn non_positive(field: &'static str, value: f64) -> Self {
        EngineError::NonPositiveInput { field, value }
    }
}
