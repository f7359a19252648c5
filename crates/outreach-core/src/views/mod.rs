//! Derived views: pure functions over already-loaded collections.
//!
//! Nothing here touches a repository. Every function takes the records a view
//! has already fetched and computes counts, rates, buckets, or filtered
//! subsets from them.

pub mod appointments;
pub mod campaigns;
pub mod dashboard;
pub mod interactions;
pub mod leads;
pub mod lookups;

use std::str::FromStr;

/// A status or type filter with an "all" bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    /// Match everything.
    #[default]
    All,
    /// Match records with exactly this value.
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Whether a record's value passes this filter.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Parse a filter from query input; `"all"` (or empty) is the bypass.
    pub fn parse(s: &str) -> Result<Self, T::Err> {
        if s.is_empty() || s == "all" {
            return Ok(Filter::All);
        }
        Ok(Filter::Only(s.parse()?))
    }
}
