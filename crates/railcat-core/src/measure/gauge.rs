//! Track gauges
//!
//! A gauge carries the rail spacing redundantly in millimetres and
//! inches, plus a coarse qualitative classification.

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::length::Length;
use super::unit::MeasureUnit;
use crate::error::Result;

/// Qualitative track gauge classification, supplied by callers rather
/// than derived from the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackGauge {
    /// Wider than standard gauge
    Broad,
    /// Between narrow and standard
    Medium,
    /// The smallest modelled gauges
    Minimum,
    /// Narrower than standard gauge
    Narrow,
    /// Standard gauge (1435 mm prototype)
    Standard,
}

// Derive scales are asymmetric: 16.5 mm and 0.65 in must map onto each
// other in both directions.
const INCHES_SCALE: i64 = 2;
const MILLIMETRES_SCALE: i64 = 1;

/// Rail-track spacing, in millimetres and inches.
///
/// The derive constructors keep the two lengths mutual conversions of
/// each other to within rounding tolerance; `new` trusts the caller to
/// do the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Gauge {
    millimetres: Length,
    inches: Length,
    track_gauge: TrackGauge,
}

impl Gauge {
    /// Build a gauge from two independently supplied lengths.
    pub fn new(millimetres: Length, inches: Length, track_gauge: TrackGauge) -> Gauge {
        Gauge {
            millimetres,
            inches,
            track_gauge,
        }
    }

    /// Build a gauge from the millimetres measurement, deriving the
    /// inches companion by conversion.
    pub fn of_millimetres(value: BigDecimal, track_gauge: TrackGauge) -> Result<Gauge> {
        let millimetres = Length::millimetres(value)?;
        let inches = millimetres.convert_to_with_scale(MeasureUnit::Inches, INCHES_SCALE)?;
        Ok(Gauge {
            millimetres,
            inches,
            track_gauge,
        })
    }

    /// Build a gauge from the inches measurement, deriving the
    /// millimetres companion by conversion.
    pub fn of_inches(value: BigDecimal, track_gauge: TrackGauge) -> Result<Gauge> {
        let inches = Length::inches(value)?;
        let millimetres =
            inches.convert_to_with_scale(MeasureUnit::Millimetres, MILLIMETRES_SCALE)?;
        Ok(Gauge {
            millimetres,
            inches,
            track_gauge,
        })
    }

    /// The spacing in millimetres
    pub fn millimetres(&self) -> &Length {
        &self.millimetres
    }

    /// The spacing in inches
    pub fn inches(&self) -> &Length {
        &self.inches
    }

    /// The qualitative classification
    pub fn track_gauge(&self) -> TrackGauge {
        self.track_gauge
    }
}

impl PartialOrd for Gauge {
    // Ordering delegates to the millimetres measurement.
    fn partial_cmp(&self, other: &Gauge) -> Option<Ordering> {
        self.millimetres.partial_cmp(&other.millimetres)
    }
}
