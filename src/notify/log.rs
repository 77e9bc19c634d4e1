//! Notifier that writes messages to the tracing log

use crate::core::Notifier;

/// Notifier emitting each message as a `tracing` warning
///
/// Useful for headless consumers and as a default during development.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    source: Option<String>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every message with a source label, e.g. the screen that owns the store
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        match &self.source {
            Some(source) => tracing::warn!(source = %source, "{}", message),
            None => tracing::warn!("{}", message),
        }
    }
}
