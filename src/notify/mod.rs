//! Notifier implementations for surfacing failed loads

pub mod broadcast;
pub mod log;

pub use broadcast::{BroadcastNotifier, Notification};
pub use log::LogNotifier;
