//! Use case result algebra
//!
//! Business operations return [`UseCaseResult`] instead of raising:
//! domain failures are data the caller must match on, never exceptions
//! crossing the use case boundary.

use crate::validation::{InputValidator, Validated, ValidationError};

/// Outcome of a business operation: its output, or a domain error.
///
/// All combinators are pure; none perform I/O or touch shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum UseCaseResult<O, E> {
    /// The operation produced its output
    Output(O),
    /// The operation failed with a domain error
    Error(E),
}

impl<O, E> UseCaseResult<O, E> {
    /// Wrap an operation output
    pub fn output(value: O) -> UseCaseResult<O, E> {
        UseCaseResult::Output(value)
    }

    /// Wrap a domain error
    pub fn error(value: E) -> UseCaseResult<O, E> {
        UseCaseResult::Error(value)
    }

    /// True for the output variant
    pub fn is_output(&self) -> bool {
        matches!(self, UseCaseResult::Output(_))
    }

    /// True for the error variant
    pub fn is_error(&self) -> bool {
        matches!(self, UseCaseResult::Error(_))
    }

    /// The output, if any
    pub fn as_output(&self) -> Option<&O> {
        match self {
            UseCaseResult::Output(value) => Some(value),
            UseCaseResult::Error(_) => None,
        }
    }

    /// The error, if any
    pub fn as_error(&self) -> Option<&E> {
        match self {
            UseCaseResult::Output(_) => None,
            UseCaseResult::Error(value) => Some(value),
        }
    }

    /// Transform the output; an error passes through unchanged.
    pub fn map<O2, F>(self, f: F) -> UseCaseResult<O2, E>
    where
        F: FnOnce(O) -> O2,
    {
        match self {
            UseCaseResult::Output(value) => UseCaseResult::Output(f(value)),
            UseCaseResult::Error(error) => UseCaseResult::Error(error),
        }
    }

    /// Transform the error; an output passes through unchanged.
    pub fn map_error<E2, F>(self, f: F) -> UseCaseResult<O, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            UseCaseResult::Output(value) => UseCaseResult::Output(value),
            UseCaseResult::Error(error) => UseCaseResult::Error(f(error)),
        }
    }

    /// Chain another operation over the output; an error
    /// short-circuits.
    pub fn and_then<O2, F>(self, f: F) -> UseCaseResult<O2, E>
    where
        F: FnOnce(O) -> UseCaseResult<O2, E>,
    {
        match self {
            UseCaseResult::Output(value) => f(value),
            UseCaseResult::Error(error) => UseCaseResult::Error(error),
        }
    }
}

impl<T> UseCaseResult<T, T> {
    /// Extract the common value of a same-typed result, whichever
    /// variant holds it. Only defined when output and error share a
    /// type; the type system enforces this, not a runtime check.
    pub fn into_inner(self) -> T {
        match self {
            UseCaseResult::Output(value) => value,
            UseCaseResult::Error(value) => value,
        }
    }
}

/// A business operation over validated input.
pub trait UseCase {
    /// Request type
    type Input;
    /// Success payload
    type Output;
    /// Domain error payload
    type Error;

    /// Execute the operation
    fn execute(&self, input: Self::Input) -> UseCaseResult<Self::Output, Self::Error>;
}

/// The validation funnel every create use case runs through: validate
/// the input, map field violations into the use case's error type, and
/// hand the accepted input to the handler.
pub fn run_validated<T, O, E, I, H>(
    validator: &InputValidator<T>,
    input: T,
    on_invalid: I,
    handler: H,
) -> UseCaseResult<O, E>
where
    I: FnOnce(Vec<ValidationError>) -> E,
    H: FnOnce(T) -> UseCaseResult<O, E>,
{
    match validator.validate(input) {
        Validated::Valid(accepted) => handler(accepted),
        Validated::Invalid(errors) => UseCaseResult::Error(on_invalid(errors)),
    }
}
