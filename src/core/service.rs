//! Port traits for fetching records and surfacing notifications

use crate::core::{FetchError, Record};
use async_trait::async_trait;
use std::sync::Arc;

/// Service trait for retrieving the full record collection
///
/// Implementations own the transport (HTTP, fixtures, ...) and normalize
/// every failure mode into a single [`FetchError`].
#[async_trait]
pub trait RecordFetcher<T: Record>: Send + Sync {
    /// Fetch every record
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError>;
}

/// Fire-and-forget channel for transient user-facing messages
pub trait Notifier: Send + Sync {
    /// Surface a message to the user
    fn notify(&self, message: &str);
}

#[async_trait]
impl<T, F> RecordFetcher<T> for Arc<F>
where
    T: Record,
    F: RecordFetcher<T> + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        (**self).fetch_all().await
    }
}

impl<N> Notifier for Arc<N>
where
    N: Notifier + ?Sized,
{
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
