//! Result-set wrappers for read operations

use thiserror::Error;

use super::pagination::Page;

/// A failure while executing a query.
///
/// The underlying cause is never propagated to callers: read paths
/// redact infrastructure detail to a generic reason, in contrast with
/// validation errors, which carry the offending value verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct QueryError {
    reason: String,
}

const REDACTED_REASON: &str = "an error occurred while executing the query";

impl QueryError {
    /// Create a query error with an explicit reason
    pub fn new(reason: impl Into<String>) -> QueryError {
        QueryError {
            reason: reason.into(),
        }
    }

    /// Wrap an underlying failure, logging the cause and keeping only
    /// a generic reason for the caller.
    pub fn from_cause(cause: &dyn std::error::Error) -> QueryError {
        log::error!("query failed: {cause}");
        QueryError {
            reason: REDACTED_REASON.to_string(),
        }
    }

    /// The caller-facing reason
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Outcome of a query for at most one item: the (possibly absent)
/// value, or a query error.
#[derive(Debug, Clone, PartialEq)]
pub enum SingleResult<T> {
    /// The query ran; the item may or may not exist
    Value(Option<T>),
    /// The query failed
    Error(QueryError),
}

impl<T> SingleResult<T> {
    /// A found item
    pub fn of(value: T) -> SingleResult<T> {
        SingleResult::Value(Some(value))
    }

    /// No item matched
    pub fn empty() -> SingleResult<T> {
        SingleResult::Value(None)
    }

    /// A failed query
    pub fn error(error: QueryError) -> SingleResult<T> {
        SingleResult::Error(error)
    }
}

/// One page of query results.
///
/// `has_next` is derived from page fullness, not from a lookahead
/// count: a final page holding exactly `limit` items still reports
/// `true`. Known limitation, kept deliberately instead of paying for a
/// count query.
#[derive(Debug, Clone, PartialEq)]
pub struct Results<T> {
    /// The cursor the items were fetched with
    pub page: Page,
    /// The items of this page
    pub items: Vec<T>,
}

impl<T> Results<T> {
    /// Create a result page
    pub fn new(page: Page, items: Vec<T>) -> Results<T> {
        Results { page, items }
    }

    /// Whether a next page is assumed to exist
    pub fn has_next(&self) -> bool {
        self.items.len() >= self.page.limit
    }

    /// Whether a previous page exists
    pub fn has_previous(&self) -> bool {
        self.page.start > 0
    }

    /// Cursor for the next page, if one is assumed to exist
    pub fn next_page(&self) -> Option<Page> {
        self.has_next().then(|| self.page.next())
    }

    /// Cursor for the previous page, if one exists
    pub fn previous_page(&self) -> Option<Page> {
        self.has_previous().then(|| self.page.previous())
    }
}

/// Outcome of a paginated query: a page of items, or a query error.
#[derive(Debug, Clone, PartialEq)]
pub enum PaginatedResultSet<T> {
    /// The query ran
    Results(Results<T>),
    /// The query failed
    Error(QueryError),
}

impl<T> PaginatedResultSet<T> {
    /// A successful page of results
    pub fn results(page: Page, items: Vec<T>) -> PaginatedResultSet<T> {
        PaginatedResultSet::Results(Results::new(page, items))
    }

    /// A failed query
    pub fn error(error: QueryError) -> PaginatedResultSet<T> {
        PaginatedResultSet::Error(error)
    }
}
