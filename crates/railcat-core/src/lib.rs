//! Railcat Core - Domain core for the railcat model-railway catalog
//!
//! This crate provides the pure computation types shared across the
//! catalog:
//! - Measurement value objects (units, lengths, scale ratios, gauges)
//! - The input validation pipeline every use case funnels through
//! - The use case result algebra
//! - Pagination and sorting vocabulary for read operations
//!
//! Everything here is immutable data and referentially transparent
//! functions, safe to call from any number of threads without
//! coordination. HTTP handlers, persistence and wiring live in the
//! outer layers and consume these types.

pub mod error;
pub mod measure;
pub mod queries;
pub mod usecase;
pub mod validation;

// Re-export commonly used types
pub use error::{DomainError, Result};
pub use measure::{Converter, Gauge, Length, MeasureUnit, Ratio, TrackGauge, TwoLengths};
pub use queries::{
    Direction, Page, PaginatedResultSet, QueryError, Results, SingleResult, SortCriteria, Sorting,
};
pub use usecase::{run_validated, UseCase, UseCaseResult};
pub use validation::{InputValidator, Validated, ValidationError};
