//! Unit-tagged length quantities

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;

use super::unit::MeasureUnit;
use crate::error::{DomainError, Result};

/// A non-negative decimal quantity tagged with its unit.
///
/// Two lengths are equal only when both the value and the unit match;
/// conversion is used for ordering across units, never for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Length {
    value: BigDecimal,
    unit: MeasureUnit,
}

impl Length {
    /// Create a length from a value and unit.
    ///
    /// Negative values are rejected, never clamped.
    pub fn new(value: BigDecimal, unit: MeasureUnit) -> Result<Length> {
        if value < BigDecimal::zero() {
            return Err(DomainError::NegativeLength(value));
        }
        Ok(Length { value, unit })
    }

    /// Create a length in millimetres
    pub fn millimetres(value: BigDecimal) -> Result<Length> {
        Length::new(value, MeasureUnit::Millimetres)
    }

    /// Create a length in inches
    pub fn inches(value: BigDecimal) -> Result<Length> {
        Length::new(value, MeasureUnit::Inches)
    }

    /// Create a length in kilometres
    pub fn kilometres(value: BigDecimal) -> Result<Length> {
        Length::new(value, MeasureUnit::Kilometres)
    }

    /// Create a length in miles
    pub fn miles(value: BigDecimal) -> Result<Length> {
        Length::new(value, MeasureUnit::Miles)
    }

    /// The numeric value
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// The unit of measurement
    pub fn unit(&self) -> MeasureUnit {
        self.unit
    }

    /// Convert this length into `unit`.
    ///
    /// Returns the length unchanged when it already is in `unit`;
    /// otherwise multiplies by the registered rate at the default
    /// scale. A pair with no registered rate is an error.
    pub fn convert_to(&self, unit: MeasureUnit) -> Result<Length> {
        if self.unit == unit {
            return Ok(self.clone());
        }
        let converted = self.unit.converter_to(unit).convert(&self.value)?;
        Length::new(converted, unit)
    }

    /// Convert this length into `unit` at an explicit number of
    /// fractional digits.
    pub fn convert_to_with_scale(&self, unit: MeasureUnit, decimals: i64) -> Result<Length> {
        if self.unit == unit {
            return Ok(self.clone());
        }
        let converted = self
            .unit
            .converter_to(unit)
            .convert_with_scale(&self.value, decimals)?;
        Length::new(converted, unit)
    }
}

impl PartialOrd for Length {
    // Convert the other operand into this length's unit, then compare
    // numerically. Converting rounds, so a<=>b and b<=>a agree only to
    // rounding tolerance; that asymmetry is part of the contract.
    fn partial_cmp(&self, other: &Length) -> Option<Ordering> {
        if self.unit == other.unit {
            return self.value.partial_cmp(&other.value);
        }
        match other.convert_to(self.unit) {
            Ok(converted) => self.value.partial_cmp(&converted.value),
            Err(_) => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
