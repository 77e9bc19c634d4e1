//! Search state and the views derived from it

use crate::core::query::{SortOrder, search_records, sort_records};
use crate::core::Record;
use serde::Serialize;

/// Snapshot of everything a [`SearchStore`](crate::core::SearchStore) owns
///
/// `records` is only ever replaced as a whole. `loading` is true for the
/// whole span of an outstanding fetch. `query` and `order` can change at
/// any time, including while loading.
///
/// The derived views (`filtered_records`, `total_count`, `show_spinner`)
/// are recomputed from the snapshot on every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState<T> {
    pub records: Vec<T>,
    pub loading: bool,
    pub query: String,
    pub order: SortOrder,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            query: String::new(),
            order: SortOrder::Asc,
        }
    }
}

impl<T: Record> SearchState<T> {
    /// Records matching the query, ordered by the current sort order
    pub fn filtered_records(&self) -> Vec<T> {
        sort_records(&search_records(&self.records, &self.query), self.order)
    }

    /// Number of records in [`filtered_records`](Self::filtered_records)
    pub fn total_count(&self) -> usize {
        let needle = self.query.to_lowercase();
        self.records.iter().filter(|r| r.matches(&needle)).count()
    }

    /// Whether the initial-load spinner should be shown
    ///
    /// Only true while loading with nothing loaded yet; a refresh over
    /// existing data keeps showing the data instead.
    pub fn show_spinner(&self) -> bool {
        self.loading && self.records.is_empty()
    }

    /// Whether a progress indicator should be shown (any outstanding load)
    pub fn show_progress(&self) -> bool {
        self.loading
    }

    /// Look up a loaded record by id
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| &record.id() == id)
    }
}
