//! Query vocabulary for read operations
//!
//! This module contains the types read use cases and their callers
//! share:
//! - Offset/limit pagination cursors
//! - Sorting criteria
//! - Result-set wrappers carrying either data or a query error

pub mod pagination;
pub mod result_set;
pub mod sorting;

pub use pagination::Page;
pub use result_set::{PaginatedResultSet, QueryError, Results, SingleResult};
pub use sorting::{Direction, SortCriteria, Sorting, SortingBuilder};
