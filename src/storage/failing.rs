//! Fetcher that always fails, for exercising error paths

use crate::core::{FetchError, Record, RecordFetcher};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Record fetcher that rejects every request with the same message
///
/// Stands in for an unreachable backend. An optional latency delays the
/// failure the way a real timeout would.
#[derive(Clone)]
pub struct FailingFetcher {
    message: String,
    latency: Option<Duration>,
    attempts: Arc<AtomicUsize>,
}

impl FailingFetcher {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            latency: None,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Simulated network error after three seconds
    pub fn network_error() -> Self {
        Self::new("Simulated network error").with_latency(Duration::from_secs(3))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of fetches attempted so far, shared across clones
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: Record> RecordFetcher<T> for FailingFetcher {
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        Err(FetchError::new(self.message.clone()))
    }
}
