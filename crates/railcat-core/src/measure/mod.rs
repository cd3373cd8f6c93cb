//! Measurement value objects for the catalog domain
//!
//! This module contains the physical measurement algebra:
//! - Length units and their conversion table
//! - Unit-tagged length quantities
//! - Dual-unit length inference
//! - Model scale ratios
//! - Track gauges

pub mod conversion;
pub mod gauge;
pub mod length;
pub mod ratio;
pub mod two_lengths;
pub mod unit;

pub use conversion::Converter;
pub use gauge::{Gauge, TrackGauge};
pub use length::Length;
pub use ratio::Ratio;
pub use two_lengths::TwoLengths;
pub use unit::MeasureUnit;
