//! # Album Search
//!
//! A client-side state container for searching a record catalog.
//!
//! ## Features
//!
//! - **Typed State**: records, loading flag, query and sort order in one snapshot
//! - **Derived Views**: filtered/sorted records, count and spinner policy recomputed on read
//! - **Single-Flight Loading**: at most one fetch in flight, duplicate requests are dropped
//! - **Failure Isolation**: a failed fetch becomes a notification, never an error for the caller
//! - **Pluggable Ports**: any `RecordFetcher` transport and any `Notifier` surface
//! - **Change Streams**: observe every state transition through a watch channel
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use album_search::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = InMemoryFetcher::new(vec![
//!         Album::new(1, "Abbey Road", "The Beatles"),
//!         Album::new(2, "Revolver", "The Beatles"),
//!     ]);
//!
//!     // Building the store starts the initial load
//!     let store = SearchStore::new(fetcher, LogNotifier::new())?;
//!     store.subscribe().wait_for(|state| !state.loading).await?;
//!
//!     store.update_query("rev");
//!     assert_eq!(store.total_count(), 1);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod notify;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        FetchError, LoadOutcome, Notifier, Record, RecordFetcher, SearchState, SearchStore,
        SearchStoreBuilder, SortOrder, StoreError, search_records, sort_records,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::Album;

    // === Fetchers ===
    pub use crate::storage::{FailingFetcher, InMemoryFetcher};

    // === Notifiers ===
    pub use crate::notify::{BroadcastNotifier, LogNotifier, Notification};

    // === Config ===
    pub use crate::config::{NotificationConfig, StoreConfig};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
