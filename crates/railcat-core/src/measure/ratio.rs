//! Model scale ratios

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Zero};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{DomainError, Result};

/// Scale ratios shared across the catalog: 1:32, 1:43.5, 1:87, 1:120,
/// 1:160. Sharing is an optimization; equality is always by value.
static CANONICAL: Lazy<Vec<Ratio>> = Lazy::new(|| {
    vec![
        Ratio {
            value: BigDecimal::from(32),
        },
        Ratio {
            value: BigDecimal::new(BigInt::from(435), 1),
        },
        Ratio {
            value: BigDecimal::from(87),
        },
        Ratio {
            value: BigDecimal::from(120),
        },
        Ratio {
            value: BigDecimal::from(160),
        },
    ]
});

/// The scale ratio "1:N" between a model and its prototype.
///
/// A larger denominator means a smaller model, so ordering is the
/// reverse of numeric ordering on the value: 1:87 sorts after 1:43.5.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ratio {
    value: BigDecimal,
}

impl Ratio {
    /// Create a ratio from its denominator.
    ///
    /// Zero and negative values are rejected. Trailing zeros are
    /// stripped, so `of(87.0)` equals `of(87)`; well-known
    /// denominators resolve through the canonical table.
    pub fn of(value: BigDecimal) -> Result<Ratio> {
        if value <= BigDecimal::zero() {
            return Err(DomainError::NonPositiveRatio(value));
        }
        let value = value.normalized();
        if let Some(known) = CANONICAL.iter().find(|ratio| ratio.value == value) {
            return Ok(known.clone());
        }
        Ok(Ratio { value })
    }

    /// The denominator of the ratio
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Ratio) -> Ordering {
        other.value.cmp(&self.value)
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Ratio) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_of_positive_value() {
        let ratio = Ratio::of(dec("87")).unwrap();
        assert_eq!(ratio.value(), &dec("87"));
    }

    #[test]
    fn test_zero_is_rejected() {
        let err = Ratio::of(dec("0")).unwrap_err();
        assert_eq!(err.to_string(), "ratio value must be positive");
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = Ratio::of(dec("-1")).unwrap_err();
        assert_eq!(err.to_string(), "ratio value must be positive");
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        assert_eq!(Ratio::of(dec("87.00")).unwrap(), Ratio::of(dec("87")).unwrap());
        assert_eq!(Ratio::of(dec("87.00")).unwrap().to_string(), "1:87");
    }

    #[test]
    fn test_distinct_values_are_not_equal() {
        assert_ne!(Ratio::of(dec("87")).unwrap(), Ratio::of(dec("43.5")).unwrap());
    }

    #[test]
    fn test_ordering_is_inverted() {
        let ho = Ratio::of(dec("87")).unwrap();
        let zero_scale = Ratio::of(dec("43.5")).unwrap();
        assert!(ho < zero_scale);
        assert!(zero_scale > ho);
    }

    #[test]
    fn test_canonical_values_resolve_equal() {
        assert_eq!(Ratio::of(dec("43.50")).unwrap(), Ratio::of(dec("43.5")).unwrap());
        assert_eq!(Ratio::of(dec("160")).unwrap().to_string(), "1:160");
    }

    #[test]
    fn test_display() {
        assert_eq!(Ratio::of(dec("43.5")).unwrap().to_string(), "1:43.5");
        assert_eq!(Ratio::of(dec("120")).unwrap().to_string(), "1:120");
    }

    #[test]
    fn test_sorting_a_collection() {
        let mut ratios = vec![
            Ratio::of(dec("160")).unwrap(),
            Ratio::of(dec("43.5")).unwrap(),
            Ratio::of(dec("87")).unwrap(),
        ];
        ratios.sort();
        let displayed: Vec<String> = ratios.iter().map(ToString::to_string).collect();
        assert_eq!(displayed, vec!["1:160", "1:87", "1:43.5"]);
    }
}
