//! # Error Types
//!
//! Structured error types for elec_core. Every error is a caller input
//! problem surfaced synchronously; there is nothing to retry. The variants
//! carry enough context (field name, offending value, reason) for a UI or
//! an LLM to point at the exact input that needs fixing.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::errors::{CalcError, CalcResult};
//!
//! fn validate_fault_current(amps: f64) -> CalcResult<()> {
//!     if amps <= 0.0 {
//!         return Err(CalcError::validation(
//!             "earthFaultCurrent",
//!             amps.to_string(),
//!             "Earth fault current must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for elec_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value is not one of the recognised options (soil preset,
    /// electrode type, occupancy, fixture, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A physical quantity is out of range (zero, negative, NaN, ...)
    #[error("Validation failed for '{field}': {value} - {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Inputs passed validation but the formula still produced an
    /// unusable value
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error for a value outside a closed option set.
    ///
    /// The reason lists every accepted key so the caller can self-correct.
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>, allowed: &[&str]) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: format!("Expected one of: {}", allowed.join(", ")),
        }
    }

    /// Create a Validation error
    pub fn validation(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. }
            | CalcError::Validation { field, .. }
            | CalcError::MissingField { field } => Some(field),
            CalcError::CalculationFailed { .. } | CalcError::SerializationError { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Validation { .. } => "VALIDATION_ERROR",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde reports absent struct fields as "missing field `name` at ..."
        if let Some(rest) = message.strip_prefix("missing field `") {
            if let Some(end) = rest.find('`') {
                return CalcError::missing_field(&rest[..end]);
            }
        }
        CalcError::serialization(message)
    }
}

/// Reject zero, negative and non-finite values for a physical quantity.
pub(crate) fn require_positive(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::validation(field, value.to_string(), format!("{} must be a finite number", what)));
    }
    if value <= 0.0 {
        return Err(CalcError::validation(field, value.to_string(), format!("{} must be positive", what)));
    }
    Ok(())
}
