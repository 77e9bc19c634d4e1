//! Search and sort utilities over record collections
//!
//! These are pure functions: they never mutate their input and always
//! return a fresh collection.

use crate::core::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction applied to the filtered records
///
/// # Format
/// - `asc` or `ascending`
/// - `desc` or `descending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Get the opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known sort direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort order '{0}', expected 'asc' or 'desc'")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Keep the records whose name contains `query`, ignoring case
///
/// An empty query matches everything. Relative order is preserved.
pub fn search_records<T: Record>(records: &[T], query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// Order records by their case-folded name
///
/// The sort is stable in both directions: records with equal keys keep
/// their input order even when sorting descending.
pub fn sort_records<T: Record>(records: &[T], order: SortOrder) -> Vec<T> {
    let mut keyed: Vec<(String, &T)> = records
        .iter()
        .map(|record| (record.sort_key(), record))
        .collect();

    match order {
        SortOrder::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}
