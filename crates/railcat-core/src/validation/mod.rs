//! Input validation pipeline
//!
//! Every use case funnels its request through this module: a set of
//! pluggable field constraints runs against the input, and the outcome
//! is either the accepted input or the full list of field-level
//! violations.

pub mod constraints;
pub mod validated;
pub mod validator;

pub use validated::{Validated, ValidationError};
pub use validator::InputValidator;
