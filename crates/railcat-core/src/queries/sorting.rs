//! Sorting criteria for read operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("asc"),
            Direction::Desc => f.write_str("desc"),
        }
    }
}

/// A single sort criterion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortCriteria {
    /// Property to sort by
    pub property_name: String,
    /// Sort direction
    pub direction: Direction,
}

/// An ordered list of sort criteria.
///
/// The list order is semantically meaningful: it is the tie-break
/// sequence the storage layer must apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    criteria: Vec<SortCriteria>,
}

impl Sorting {
    /// Start a fluent builder with the primary criterion.
    pub fn by(property_name: impl Into<String>, direction: Direction) -> SortingBuilder {
        SortingBuilder {
            criteria: vec![SortCriteria {
                property_name: property_name.into(),
                direction,
            }],
        }
    }

    /// An empty sorting (storage order)
    pub fn unsorted() -> Sorting {
        Sorting::default()
    }

    /// Look up the first criterion for `property_name`,
    /// case-insensitively. Absence is not an error.
    pub fn get(&self, property_name: &str) -> Option<&SortCriteria> {
        self.criteria
            .iter()
            .find(|criteria| criteria.property_name.eq_ignore_ascii_case(property_name))
    }

    /// The criteria in tie-break order
    pub fn iter(&self) -> impl Iterator<Item = &SortCriteria> {
        self.criteria.iter()
    }

    /// Number of criteria
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// True when no criteria were supplied
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// Fluent builder for [`Sorting`]
#[derive(Debug, Clone)]
pub struct SortingBuilder {
    criteria: Vec<SortCriteria>,
}

impl SortingBuilder {
    /// Append the next tie-break criterion.
    pub fn and_then_by(
        mut self,
        property_name: impl Into<String>,
        direction: Direction,
    ) -> SortingBuilder {
        self.criteria.push(SortCriteria {
            property_name: property_name.into(),
            direction,
        });
        self
    }

    /// Finish the builder
    pub fn build(self) -> Sorting {
        Sorting {
            criteria: self.criteria,
        }
    }
}
