//! Length units of measurement

use std::fmt;

use serde::{Deserialize, Serialize};

use super::conversion::{rate_between, Converter};

/// A unit of length measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureUnit {
    /// Millimetres (mm)
    Millimetres,
    /// Inches (in)
    Inches,
    /// Kilometres (km)
    Kilometres,
    /// Miles (mi)
    Miles,
}

impl MeasureUnit {
    /// Display symbol for this unit
    pub fn symbol(&self) -> &'static str {
        match self {
            MeasureUnit::Millimetres => "mm",
            MeasureUnit::Inches => "in",
            MeasureUnit::Kilometres => "km",
            MeasureUnit::Miles => "mi",
        }
    }

    /// Parse a unit from its display symbol
    pub fn from_symbol(symbol: &str) -> Option<MeasureUnit> {
        match symbol {
            "mm" => Some(MeasureUnit::Millimetres),
            "in" => Some(MeasureUnit::Inches),
            "km" => Some(MeasureUnit::Kilometres),
            "mi" => Some(MeasureUnit::Miles),
            _ => None,
        }
    }

    /// Look up the converter from this unit into `other`.
    ///
    /// The lookup always succeeds: the same unit yields the identity
    /// converter, and a pair with no registered rate yields a
    /// converter that fails on use.
    pub fn converter_to(self, other: MeasureUnit) -> Converter {
        if self == other {
            return Converter::Identity;
        }
        match rate_between(self, other) {
            Some(rate) => Converter::Rate { rate: rate.clone() },
            None => Converter::Unsupported {
                from: self,
                to: other,
            },
        }
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
