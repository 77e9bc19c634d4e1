//! Typed error handling for the search store
//!
//! # Error Categories
//!
//! - [`FetchError`]: the single failure kind a fetch port reports. Transport
//!   errors, timeouts and server errors are all normalized into one message.
//! - [`StoreError`]: errors raised while assembling a store.
//!
//! A `FetchError` never escapes the store: a failed load is turned into a
//! notification and a state transition back to idle.

use thiserror::Error;

/// Failure reported by a [`RecordFetcher`](crate::core::RecordFetcher)
///
/// Carries a human-readable message that is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message passed to the notifier when a load fails
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<anyhow::Error> for FetchError {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid response payload: {}", err))
    }
}

/// Errors raised while building a [`SearchStore`](crate::core::SearchStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was built outside a tokio runtime
    #[error("search store must be built inside a tokio runtime")]
    NoRuntime,

    #[error("search store requires a record fetcher")]
    MissingFetcher,

    #[error("search store requires a notifier")]
    MissingNotifier,

    /// Configuration could not be loaded
    #[error("invalid store configuration: {0}")]
    Config(#[from] anyhow::Error),
}
