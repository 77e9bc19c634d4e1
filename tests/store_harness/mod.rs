//! Shared test harness for search store testing
//!
//! Provides a `GatedFetcher` whose fetches block until released, a
//! `RecordingNotifier` that keeps every message, and helpers for building
//! stores and waiting for loads to settle.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

use album_search::prelude::*;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

// ---------------------------------------------------------------------------
// GatedFetcher: fetches wait on a semaphore so tests control completion
// ---------------------------------------------------------------------------

/// Fetcher that blocks every fetch until the test releases it
///
/// Responses are served in the order they were queued; once the queue is
/// empty every fetch succeeds with no records.
pub struct GatedFetcher {
    responses: Mutex<VecDeque<Result<Vec<Album>, FetchError>>>,
    gate: Semaphore,
    calls: AtomicUsize,
}

impl Default for GatedFetcher {
    fn default() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

impl GatedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_responses(responses: Vec<Result<Vec<Album>, FetchError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        })
    }

    /// Let `n` pending or future fetches complete
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    /// Number of times `fetch_all` was entered
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordFetcher<Album> for GatedFetcher {
    async fn fetch_all(&self) -> Result<Vec<Album>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| FetchError::new(e.to_string()))?;
        permit.forget();

        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ---------------------------------------------------------------------------
// RecordingNotifier: keeps every message for assertions
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// ---------------------------------------------------------------------------
// Data helpers
// ---------------------------------------------------------------------------

/// The two albums used throughout the store scenarios
pub fn beatles() -> Vec<Album> {
    vec![
        Album::new(1, "Abbey Road", "The Beatles"),
        Album::new(2, "Revolver", "The Beatles"),
    ]
}

pub fn titles(records: &[Album]) -> Vec<String> {
    records.iter().map(|a| a.title.clone()).collect()
}

/// Build a store over the gated fetcher; the initial load starts immediately
pub fn gated_store(
    fetcher: &Arc<GatedFetcher>,
    notifier: &Arc<RecordingNotifier>,
) -> SearchStore<Album> {
    SearchStore::<Album>::builder()
        .with_fetcher(Arc::clone(fetcher))
        .with_notifier(Arc::clone(notifier))
        .build()
        .unwrap()
}

/// Wait until no load is in flight
pub async fn settle(store: &SearchStore<Album>) {
    let mut rx = store.subscribe();
    tokio_test::assert_ok!(rx.wait_for(|state| !state.loading).await);
}
