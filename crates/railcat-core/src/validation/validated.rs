//! Accept-or-reject outcome of input validation

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
///
/// `invalid_value` carries the rejected input verbatim. It is surfaced
/// to callers for diagnostics and must never be swapped for a
/// placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path of the offending field
    pub field_name: String,
    /// Human-readable message
    pub error_message: String,
    /// The rejected value, unchanged
    pub invalid_value: serde_json::Value,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(
        field_name: impl Into<String>,
        error_message: impl Into<String>,
        invalid_value: impl Into<serde_json::Value>,
    ) -> ValidationError {
        ValidationError {
            field_name: field_name.into(),
            error_message: error_message.into(),
            invalid_value: invalid_value.into(),
        }
    }
}

/// Outcome of validating an input: the accepted input, or the
/// violations found, sorted by field name.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    /// Input accepted
    Valid(T),
    /// Input rejected with field-level errors
    Invalid(Vec<ValidationError>),
}

impl<T> Validated<T> {
    /// True when the input was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// True when the input was rejected
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(_))
    }

    /// The violations of a rejected input; empty for an accepted one
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Validated::Valid(_) => &[],
            Validated::Invalid(errors) => errors,
        }
    }

    /// Bridge into a std `Result`
    pub fn into_result(self) -> Result<T, Vec<ValidationError>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => Err(errors),
        }
    }
}
