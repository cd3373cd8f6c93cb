//! Input validation against pluggable field constraints

use std::fmt;

use super::validated::{Validated, ValidationError};

/// A field-level constraint: inspects the input and yields the
/// violations it finds.
pub type Constraint<T> = Box<dyn Fn(&T) -> Vec<ValidationError> + Send + Sync>;

/// Runs a set of field constraints against an input.
///
/// Every constraint runs — validation never short-circuits on the
/// first failure — and the collected violations are sorted by field
/// name for deterministic output.
pub struct InputValidator<T> {
    constraints: Vec<Constraint<T>>,
}

impl<T> InputValidator<T> {
    /// Create a validator with no constraints
    pub fn new() -> InputValidator<T> {
        InputValidator {
            constraints: Vec::new(),
        }
    }

    /// Add a constraint
    pub fn with_constraint<F>(mut self, constraint: F) -> InputValidator<T>
    where
        F: Fn(&T) -> Vec<ValidationError> + Send + Sync + 'static,
    {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Validate `input`, consuming it into the outcome.
    pub fn validate(&self, input: T) -> Validated<T> {
        let mut errors: Vec<ValidationError> = self
            .constraints
            .iter()
            .flat_map(|constraint| constraint(&input))
            .collect();
        if errors.is_empty() {
            Validated::Valid(input)
        } else {
            // Stable sort keeps per-field violation order
            errors.sort_by(|a, b| a.field_name.cmp(&b.field_name));
            Validated::Invalid(errors)
        }
    }
}

impl<T> Default for InputValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for InputValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputValidator")
            .field("constraints", &self.constraints.len())
            .finish()
    }
}
