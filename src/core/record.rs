//! Record trait defining the core abstraction for catalog items

use std::fmt::Debug;
use std::hash::Hash;

/// Base trait for all records managed by a [`SearchStore`](crate::core::SearchStore).
///
/// A record is a plain value: it is fetched, held, and replaced as part of a
/// whole collection, never mutated in place. Every record has:
/// - id: A stable identifier
/// - name: The human-readable field used for searching and sorting
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier type (numeric or string)
    type Id: Clone + Eq + Hash + Debug + Send + Sync;

    /// Get the stable identifier for this record
    fn id(&self) -> Self::Id;

    /// Get the searchable field of this record
    ///
    /// Queries match against this value case-insensitively and sorting
    /// orders by it.
    fn name(&self) -> &str;

    /// Case-folded form of [`name`](Record::name), used as the sort key
    fn sort_key(&self) -> String {
        self.name().to_lowercase()
    }

    /// Check whether this record matches an already lowercased query
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name().to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Track {
        id: String,
        title: String,
    }

    impl Record for Track {
        type Id = String;

        fn id(&self) -> String {
            self.id.clone()
        }

        fn name(&self) -> &str {
            &self.title
        }
    }

    fn track(title: &str) -> Track {
        Track {
            id: title.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_sort_key_is_case_folded() {
        assert_eq!(track("Come Together").sort_key(), "come together");
    }

    #[test]
    fn test_matches_empty_needle() {
        assert!(track("Something").matches(""));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let t = track("Here Comes The Sun");
        assert!(t.matches("comes the"));
        assert!(!t.matches("moon"));
    }

    #[test]
    fn test_string_ids() {
        assert_eq!(track("Because").id(), "Because");
    }
}
