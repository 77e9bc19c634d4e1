//! Core module containing the record abstraction, ports and the search store

pub mod error;
pub mod query;
pub mod record;
pub mod service;
pub mod state;
pub mod store;

pub use error::{FetchError, StoreError};
pub use query::{ParseSortOrderError, SortOrder, search_records, sort_records};
pub use record::Record;
pub use service::{Notifier, RecordFetcher};
pub use state::SearchState;
pub use store::{LoadOutcome, SearchStore, SearchStoreBuilder};
