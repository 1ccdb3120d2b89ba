//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing payroll.

use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// Validation errors are always raised before any calculation proceeds;
/// calculation errors indicate an internal invariant violation (a schedule
/// or configuration defect) rather than bad input.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ValidationError {
///     message: "period start 2026-02-01 is after end 2026-01-31".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Validation error: period start 2026-02-01 is after end 2026-01-31"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed input: invalid period, negative salary, mismatched
    /// employee identifiers, duplicate attendance dates.
    #[error("Validation error: {message}")]
    ValidationError {
        /// A description of what made the input invalid.
        message: String,
    },

    /// An internal invariant was violated during calculation.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the violated invariant.
        message: String,
    },

    /// A collaborator lookup found nothing for the given identifier.
    #[error("{entity} not found: {id}")]
    NotFoundError {
        /// The kind of record that was looked up (e.g., "Employee").
        entity: String,
        /// The identifier that was looked up.
        id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its tables are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::ValidationError`].
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::ValidationError {
            message: message.into(),
        }
    }

    /// Shorthand for building a [`EngineError::CalculationError`].
    pub fn calculation(message: impl Into<String>) -> Self {
        EngineError::CalculationError {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
