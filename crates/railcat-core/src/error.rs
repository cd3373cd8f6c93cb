//! Error types for the railcat domain core

use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::measure::MeasureUnit;

/// Domain error type
///
/// Construction-invariant violations are local and fatal to the call:
/// a caller holding an `Err` must not proceed as if it had a value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A length was constructed with a negative value
    #[error("length value cannot be negative: {0}")]
    NegativeLength(BigDecimal),

    /// A ratio was constructed with a zero or negative denominator
    #[error("ratio value must be positive")]
    NonPositiveRatio(BigDecimal),

    /// A length pair was constructed over a single unit
    #[error("the two units of a length pair must differ: {0:?}")]
    SameUnits(MeasureUnit),

    /// No conversion rate is registered for the unit pair
    #[error("conversion from {from:?} to {to:?} is not supported")]
    UnsupportedConversion {
        /// Source unit
        from: MeasureUnit,
        /// Target unit
        to: MeasureUnit,
    },
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
