//! Broadcast-based notifier for rendering layers
//!
//! A failed load is wrapped in a [`Notification`] and published on a
//! `tokio::sync::broadcast` channel. Any number of UI surfaces (toast,
//! status bar, log panel) can subscribe and render it.
//!
//! ```text
//! SearchStore ──notify()──▶ BroadcastNotifier ──▶ broadcast channel ──▶ toast
//!                                                                   ──▶ status bar
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let notifier = BroadcastNotifier::from_config(&config.notification);
//! let mut rx = notifier.subscribe();
//!
//! let store = SearchStore::<Album>::builder()
//!     .with_fetcher(fetcher)
//!     .with_notifier(notifier.clone())
//!     .build()?;
//!
//! if let Ok(notification) = rx.recv().await {
//!     println!("{} [{}]", notification.message, notification.action);
//! }
//! ```

use crate::config::NotificationConfig;
use crate::core::Notifier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::broadcast;
use uuid::Uuid;

/// A transient message for the user, with presentation hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification ID
    pub id: Uuid,
    /// When the notification was raised
    pub timestamp: DateTime<Utc>,
    /// Message text, verbatim from the failure
    pub message: String,
    /// Label of the dismiss action
    pub action: String,
    /// How long the notification should stay visible
    #[serde(with = "duration_ms")]
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, action: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            message: message.into(),
            action: action.into(),
            duration,
        }
    }

    /// Instant after which the notification should be dismissed
    pub fn expires_at(&self) -> DateTime<Utc> {
        let ttl = chrono::Duration::from_std(self.duration).unwrap_or(chrono::Duration::MAX);
        self.timestamp.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Notifier publishing [`Notification`]s to every subscriber
///
/// The notifier is cheap to clone (Arc internally) and can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    sender: broadcast::Sender<Notification>,
    action: String,
    duration: Duration,
}

impl BroadcastNotifier {
    /// Create a notifier with the given channel capacity and default presentation
    ///
    /// The capacity determines how many notifications can be buffered before
    /// slow receivers start losing them (lagged).
    pub fn new(capacity: usize) -> Self {
        Self::from_config(&NotificationConfig {
            channel_capacity: capacity,
            ..NotificationConfig::default()
        })
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            action: config.action.clone(),
            duration: Duration::from_millis(config.duration_ms),
        }
    }

    /// Publish a notification to all subscribers
    ///
    /// Never fails. Without subscribers the notification is dropped.
    /// Returns the number of receivers that will receive it.
    pub fn publish(&self, notification: Notification) -> usize {
        self.sender.send(notification).unwrap_or(0)
    }

    /// Subscribe to notifications published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::from_config(&NotificationConfig::default())
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, message: &str) {
        let receivers = self.publish(Notification::new(message, self.action.clone(), self.duration));
        tracing::debug!(receivers, "published notification");
    }
}
