//! Search store: owned state, derived views and a single-flight loader
//!
//! The store keeps its [`SearchState`] inside a `tokio::sync::watch`
//! channel. Every mutation goes through the channel's sender, so readers
//! always observe whole transitions: a completed load swaps `records` and
//! clears `loading` in one step.
//!
//! # Loading
//!
//! ```text
//! idle ──load──▶ in-flight ──success──▶ idle (records replaced)
//!                    │
//!                    └──failure──▶ idle (records kept, notifier called)
//! ```
//!
//! `loading` doubles as the single-flight guard. It is set synchronously,
//! before the fetch future is spawned or polled, and any load requested
//! while it is set is dropped.
//!
//! # Usage
//!
//! ```rust,ignore
//! let store = SearchStore::<Album>::builder()
//!     .with_fetcher(InMemoryFetcher::new(albums))
//!     .with_notifier(LogNotifier::new())
//!     .build()?;
//!
//! store.update_query("rev");
//! store.update_order(SortOrder::Desc);
//! store.refresh();
//!
//! let mut rx = store.subscribe();
//! rx.wait_for(|state| !state.loading).await?;
//! println!("{} albums", store.total_count());
//! ```

use crate::config::StoreConfig;
use crate::core::query::SortOrder;
use crate::core::service::{Notifier, RecordFetcher};
use crate::core::state::SearchState;
use crate::core::{FetchError, Record, StoreError};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Result of a single load request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were replaced with this many fetched records
    Loaded(usize),
    /// The fetch failed; records were left untouched
    Failed(FetchError),
    /// Another load was already in flight, so this request was dropped
    Skipped,
}

struct StoreInner<T: Record> {
    state: watch::Sender<SearchState<T>>,
    fetcher: Arc<dyn RecordFetcher<T>>,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
}

/// State container for a searchable record collection
///
/// Cheap to clone; clones share the same state.
pub struct SearchStore<T: Record> {
    inner: Arc<StoreInner<T>>,
}

impl<T: Record> Clone for SearchStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> std::fmt::Debug for SearchStore<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchStore")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl<T: Record> SearchStore<T> {
    /// Create a store with the default configuration and start loading
    pub fn new(
        fetcher: impl RecordFetcher<T> + 'static,
        notifier: impl Notifier + 'static,
    ) -> Result<Self, StoreError> {
        Self::builder()
            .with_fetcher(fetcher)
            .with_notifier(notifier)
            .build()
    }

    pub fn builder() -> SearchStoreBuilder<T> {
        SearchStoreBuilder::new()
    }

    // === Read accessors ===

    /// Clone of the current state
    pub fn state(&self) -> SearchState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn records(&self) -> Vec<T> {
        self.inner.state.borrow().records.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn query(&self) -> String {
        self.inner.state.borrow().query.clone()
    }

    pub fn order(&self) -> SortOrder {
        self.inner.state.borrow().order
    }

    // === Derived views ===

    pub fn filtered_records(&self) -> Vec<T> {
        self.inner.state.borrow().filtered_records()
    }

    pub fn total_count(&self) -> usize {
        self.inner.state.borrow().total_count()
    }

    pub fn show_spinner(&self) -> bool {
        self.inner.state.borrow().show_spinner()
    }

    pub fn show_progress(&self) -> bool {
        self.inner.state.borrow().show_progress()
    }

    /// Look up a loaded record by id
    pub fn find(&self, id: &T::Id) -> Option<T> {
        self.inner.state.borrow().find(id).cloned()
    }

    // === Change notification ===

    /// Subscribe to state changes
    ///
    /// The receiver starts out holding the current state; every mutation
    /// marks it changed.
    pub fn subscribe(&self) -> watch::Receiver<SearchState<T>> {
        self.inner.state.subscribe()
    }

    /// Stream of state snapshots, starting with the current one
    pub fn changes(&self) -> WatchStream<SearchState<T>> {
        WatchStream::new(self.subscribe())
    }

    // === Mutations ===

    /// Set the search query. Accepts any string, including the empty one.
    pub fn update_query(&self, query: impl Into<String>) {
        let query = query.into();
        tracing::trace!(query = %query, "updating search query");
        self.inner.state.send_modify(|state| state.query = query);
    }

    pub fn update_order(&self, order: SortOrder) {
        tracing::trace!(order = %order, "updating sort order");
        self.inner.state.send_modify(|state| state.order = order);
    }

    /// Request a new load in the background
    ///
    /// Dropped without effect when a load is already in flight.
    pub fn refresh(&self) {
        let Some(in_flight) = self.begin_load() else {
            return;
        };

        let store = self.clone();
        self.inner.runtime.spawn(async move {
            store.run_load(in_flight).await;
        });
    }

    /// Load all records and wait for the outcome
    ///
    /// Same semantics as [`refresh`](Self::refresh) but awaited in place.
    /// Returns [`LoadOutcome::Skipped`] when a load is already in flight.
    pub async fn load_all(&self) -> LoadOutcome {
        match self.begin_load() {
            Some(in_flight) => self.run_load(in_flight).await,
            None => LoadOutcome::Skipped,
        }
    }

    /// Atomically claim the single-flight guard
    fn begin_load(&self) -> Option<InFlight<T>> {
        let claimed = self.inner.state.send_if_modified(|state| {
            if state.loading {
                false
            } else {
                state.loading = true;
                true
            }
        });

        if claimed {
            tracing::debug!("starting record load");
            Some(InFlight {
                inner: Arc::clone(&self.inner),
                settled: false,
            })
        } else {
            tracing::debug!("record load already in flight, dropping request");
            None
        }
    }

    async fn run_load(&self, mut in_flight: InFlight<T>) -> LoadOutcome {
        match self.inner.fetcher.fetch_all().await {
            Ok(records) => {
                let count = records.len();
                in_flight.settled = true;
                self.inner.state.send_modify(|state| {
                    state.records = records;
                    state.loading = false;
                });
                tracing::info!(count, "records loaded");
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading records");
                self.inner.notifier.notify(err.message());
                in_flight.settled = true;
                self.inner.state.send_modify(|state| state.loading = false);
                LoadOutcome::Failed(err)
            }
        }
    }
}

/// Releases the single-flight guard if a load never reaches its outcome
///
/// Covers a dropped `load_all` future and a panicking fetcher.
struct InFlight<T: Record> {
    inner: Arc<StoreInner<T>>,
    settled: bool,
}

impl<T: Record> Drop for InFlight<T> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("record load abandoned before completion, releasing guard");
            self.inner.state.send_modify(|state| state.loading = false);
        }
    }
}

/// Builder for [`SearchStore`]
///
/// # Example
///
/// ```ignore
/// let store = SearchStore::<Album>::builder()
///     .with_fetcher(fetcher)
///     .with_notifier(notifier)
///     .with_config(StoreConfig::from_yaml_file("store.yaml")?)
///     .build()?;
/// ```
pub struct SearchStoreBuilder<T: Record> {
    fetcher: Option<Arc<dyn RecordFetcher<T>>>,
    notifier: Option<Arc<dyn Notifier>>,
    config: StoreConfig,
}

impl<T: Record> SearchStoreBuilder<T> {
    pub fn new() -> Self {
        Self {
            fetcher: None,
            notifier: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the record fetcher (required)
    pub fn with_fetcher(mut self, fetcher: impl RecordFetcher<T> + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Set the notifier used to report failed loads (required)
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse and apply a YAML configuration
    pub fn with_config_yaml(self, yaml: &str) -> Result<Self, StoreError> {
        let config = StoreConfig::from_yaml_str(yaml)?;
        Ok(self.with_config(config))
    }

    /// Build the store and, unless disabled in the config, start the initial load
    ///
    /// Must be called from within a tokio runtime; the runtime is kept to
    /// spawn later refreshes.
    pub fn build(self) -> Result<SearchStore<T>, StoreError> {
        let fetcher = self.fetcher.ok_or(StoreError::MissingFetcher)?;
        let notifier = self.notifier.ok_or(StoreError::MissingNotifier)?;
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;

        let store = SearchStore {
            inner: Arc::new(StoreInner {
                state: watch::Sender::new(SearchState::default()),
                fetcher,
                notifier,
                runtime,
            }),
        };

        if self.config.load_on_init {
            store.refresh();
        }

        Ok(store)
    }
}

impl<T: Record> Default for SearchStoreBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
