//! In-memory implementation of RecordFetcher for testing and development

use crate::core::{FetchError, Record, RecordFetcher};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// In-memory record fetcher
///
/// Serves a record set that can be replaced at any time, optionally after
/// a simulated network latency. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryFetcher<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
    latency: Option<Duration>,
}

impl<T: Record> InMemoryFetcher<T> {
    /// Create a fetcher serving the given records
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            latency: None,
        }
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Replace the records served by subsequent fetches
    pub fn set_records(&self, records: Vec<T>) -> Result<(), FetchError> {
        let mut current = self
            .records
            .write()
            .map_err(|e| FetchError::new(format!("Failed to acquire write lock: {}", e)))?;

        *current = records;

        Ok(())
    }
}

impl<T: Record + DeserializeOwned> InMemoryFetcher<T> {
    /// Create a fetcher from a JSON array, as served by the catalog API
    pub fn from_json_str(json: &str) -> Result<Self, FetchError> {
        let records: Vec<T> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }
}

impl<T: Record> Default for InMemoryFetcher<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl<T: Record> RecordFetcher<T> for InMemoryFetcher<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, FetchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let records = self
            .records
            .read()
            .map_err(|e| FetchError::new(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Album;

    #[tokio::test]
    async fn test_fetch_all_returns_records() {
        let fetcher = InMemoryFetcher::new(vec![
            Album::new(1, "Abbey Road", "The Beatles"),
            Album::new(2, "Revolver", "The Beatles"),
        ]);

        let records = fetcher.fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "Revolver");
    }

    #[tokio::test]
    async fn test_set_records_replaces_collection() {
        let fetcher = InMemoryFetcher::new(vec![Album::new(1, "Abbey Road", "The Beatles")]);
        let shared = fetcher.clone();

        shared
            .set_records(vec![Album::new(9, "Let It Be", "The Beatles")])
            .unwrap();

        let records = fetcher.fetch_all().await.unwrap();
        assert_eq!(records, vec![Album::new(9, "Let It Be", "The Beatles")]);
    }

    #[tokio::test]
    async fn test_default_is_empty() {
        let fetcher = InMemoryFetcher::<Album>::default();
        assert!(fetcher.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_from_json_str() {
        let fetcher = InMemoryFetcher::<Album>::from_json_str(
            r#"[{"id": 1, "title": "Help!", "artist": "The Beatles", "genre": "Rock"}]"#,
        )
        .unwrap();

        let records = fetcher.fetch_all().await.unwrap();
        assert_eq!(records[0].genre.as_deref(), Some("Rock"));
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = InMemoryFetcher::<Album>::from_json_str("[{\"id\": \"nope\"}]");
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let fetcher = InMemoryFetcher::<Album>::default().with_latency(Duration::from_secs(3));

        let started = tokio::time::Instant::now();
        fetcher.fetch_all().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(3));
    }
}
