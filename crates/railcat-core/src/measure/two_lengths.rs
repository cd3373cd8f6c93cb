//! Dual-unit length inference

use bigdecimal::BigDecimal;

use super::length::Length;
use super::unit::MeasureUnit;
use crate::error::{DomainError, Result};

/// A pair of distinct length units that can infer one measurement from
/// the other.
///
/// Given exactly one of the two values, the missing one is derived by
/// conversion. Given both, they are wrapped as supplied with no
/// consistency check; the caller is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoLengths {
    unit_a: MeasureUnit,
    unit_b: MeasureUnit,
}

impl TwoLengths {
    /// Create an inference pair over two distinct units.
    pub fn new(unit_a: MeasureUnit, unit_b: MeasureUnit) -> Result<TwoLengths> {
        if unit_a == unit_b {
            return Err(DomainError::SameUnits(unit_a));
        }
        Ok(TwoLengths { unit_a, unit_b })
    }

    /// First unit of the pair
    pub fn unit_a(&self) -> MeasureUnit {
        self.unit_a
    }

    /// Second unit of the pair
    pub fn unit_b(&self) -> MeasureUnit {
        self.unit_b
    }

    /// Resolve both lengths from the values supplied.
    ///
    /// Returns `Ok(None)` when neither value is present: absence is
    /// not an error.
    pub fn resolve(
        &self,
        lhs: Option<BigDecimal>,
        rhs: Option<BigDecimal>,
    ) -> Result<Option<(Length, Length)>> {
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => {
                let first = Length::new(lhs, self.unit_a)?;
                let second = Length::new(rhs, self.unit_b)?;
                Ok(Some((first, second)))
            }
            (Some(lhs), None) => {
                let first = Length::new(lhs, self.unit_a)?;
                let second = first.convert_to(self.unit_b)?;
                Ok(Some((first, second)))
            }
            (None, Some(rhs)) => {
                let second = Length::new(rhs, self.unit_b)?;
                let first = second.convert_to(self.unit_a)?;
                Ok(Some((first, second)))
            }
            (None, None) => Ok(None),
        }
    }
}
