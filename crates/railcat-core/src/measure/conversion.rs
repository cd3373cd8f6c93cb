//! Unit conversion table and converters
//!
//! The rate table is process-wide immutable configuration: built once,
//! never registered into at runtime.

use std::collections::HashMap;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};
use once_cell::sync::Lazy;

use super::unit::MeasureUnit;
use crate::error::{DomainError, Result};

/// Default number of fractional digits a rate conversion keeps.
pub const DEFAULT_SCALE: i64 = 2;

/// Pairwise conversion rates.
///
/// Only inches<->millimetres and kilometres<->miles are defined; any
/// other cross-unit pair resolves to an unsupported converter.
static RATES: Lazy<HashMap<(MeasureUnit, MeasureUnit), BigDecimal>> = Lazy::new(|| {
    let mut rates = HashMap::new();
    rates.insert(
        (MeasureUnit::Inches, MeasureUnit::Millimetres),
        BigDecimal::new(BigInt::from(254), 1),
    );
    rates.insert(
        (MeasureUnit::Millimetres, MeasureUnit::Inches),
        BigDecimal::new(BigInt::from(393_701), 7),
    );
    rates.insert(
        (MeasureUnit::Kilometres, MeasureUnit::Miles),
        BigDecimal::new(BigInt::from(621_371), 6),
    );
    rates.insert(
        (MeasureUnit::Miles, MeasureUnit::Kilometres),
        BigDecimal::new(BigInt::from(160_934), 5),
    );
    rates
});

pub(crate) fn rate_between(from: MeasureUnit, to: MeasureUnit) -> Option<&'static BigDecimal> {
    RATES.get(&(from, to))
}

/// A converter between two length units.
///
/// Obtained from [`MeasureUnit::converter_to`]; the lookup itself
/// never fails. A pair with no registered rate fails only when
/// `convert` is invoked, so a missing rate can never be mistaken for
/// zero or identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Converter {
    /// Source and target unit are the same
    Identity,
    /// Multiply by the registered rate
    Rate {
        /// Conversion multiplier
        rate: BigDecimal,
    },
    /// No rate registered for the pair
    Unsupported {
        /// Source unit
        from: MeasureUnit,
        /// Target unit
        to: MeasureUnit,
    },
}

impl Converter {
    /// Convert `value`, rounding half-up to [`DEFAULT_SCALE`]
    /// fractional digits.
    pub fn convert(&self, value: &BigDecimal) -> Result<BigDecimal> {
        self.convert_with_scale(value, DEFAULT_SCALE)
    }

    /// Convert `value`, rounding half-up to `decimals` fractional
    /// digits.
    ///
    /// Precision-sensitive round-trips pick their own scale here:
    /// 0.65 in maps back onto 16.5 mm only at one decimal.
    pub fn convert_with_scale(&self, value: &BigDecimal, decimals: i64) -> Result<BigDecimal> {
        match self {
            Converter::Identity => Ok(value.clone()),
            Converter::Rate { rate } => {
                Ok((value * rate).with_scale_round(decimals, RoundingMode::HalfUp))
            }
            Converter::Unsupported { from, to } => Err(DomainError::UnsupportedConversion {
                from: *from,
                to: *to,
            }),
        }
    }
}
