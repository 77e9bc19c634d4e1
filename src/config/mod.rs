//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// How failed-load notifications are presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Label of the dismiss action shown next to the message
    #[serde(default = "default_action")]
    pub action: String,

    /// How long a notification stays visible, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Buffer size of the broadcast channel notifications are published on
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_action() -> String {
    "Close".to_string()
}

fn default_duration_ms() -> u64 {
    5_000
}

fn default_channel_capacity() -> usize {
    64
}

fn default_load_on_init() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            action: default_action(),
            duration_ms: default_duration_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Complete configuration for a search store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Start loading as soon as the store is built
    #[serde(default = "default_load_on_init")]
    pub load_on_init: bool,

    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            load_on_init: default_load_on_init(),
            notification: NotificationConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.notification.channel_capacity == 0 {
            anyhow::bail!("notification.channel_capacity must be greater than zero");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert!(config.load_on_init);
        assert_eq!(config.notification.action, "Close");
        assert_eq!(config.notification.duration_ms, 5_000);
        assert_eq!(config.notification.channel_capacity, 64);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = StoreConfig::from_yaml_str(
            r#"
notification:
  duration_ms: 2500
"#,
        )
        .unwrap();

        assert!(config.load_on_init);
        assert_eq!(config.notification.duration_ms, 2_500);
        assert_eq!(config.notification.action, "Close");
    }

    #[test]
    fn test_empty_mapping_is_default() {
        let config = StoreConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = StoreConfig::from_yaml_str(
            r#"
notification:
  channel_capacity: 0
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = StoreConfig {
            load_on_init: false,
            notification: NotificationConfig {
                action: "Dismiss".to_string(),
                ..NotificationConfig::default()
            },
        };
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = StoreConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "load_on_init: false").unwrap();
        writeln!(file, "notification:").unwrap();
        writeln!(file, "  action: OK").unwrap();

        let config = StoreConfig::from_yaml_file(file.path().to_str().unwrap()).unwrap();
        assert!(!config.load_on_init);
        assert_eq!(config.notification.action, "OK");
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(StoreConfig::from_yaml_file("/nonexistent/store.yaml").is_err());
    }
}
