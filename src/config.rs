//! Configuration for the notification center.
//!
//! Covers the sound-settings namespace, the fallback audio cue used before
//! any per-application selection has been made, and the capacity of the
//! notification event channel. Values deserialize from TOML and are
//! validated before use.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default namespace under which per-application notification sounds are
/// looked up in the settings provider.
pub const DEFAULT_SOUND_NAMESPACE: &str = "notification-sound";

/// Cue the selection slot starts out with before any notification arrived.
pub const DEFAULT_FALLBACK_SOUND: &str = "media/notifications/online.ogg";

const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 32;

/// Errors raised while loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse notification center configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

/// Configuration of the notification center services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NotificationCenterConfig {
    /// Settings namespace for per-application sound lookups.
    pub sound_namespace: String,
    /// Cue used while no per-application selection has been resolved yet.
    pub fallback_sound: String,
    /// Volume for the fallback cue, in `0.0..=1.0`. Starts silent; the
    /// settings provider supplies the real volume per application.
    pub fallback_volume: f32,
    /// Capacity of the broadcast channel carrying notification events.
    pub event_channel_capacity: usize,
}

impl Default for NotificationCenterConfig {
    fn default() -> Self {
        Self {
            sound_namespace: DEFAULT_SOUND_NAMESPACE.to_string(),
            fallback_sound: DEFAULT_FALLBACK_SOUND.to_string(),
            fallback_volume: 0.0,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}

impl NotificationCenterConfig {
    /// Parses a configuration from a TOML string and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sound_namespace.is_empty() {
            return Err(ConfigError::Invalid {
                field: "sound-namespace".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.fallback_volume) {
            return Err(ConfigError::Invalid {
                field: "fallback-volume".to_string(),
                reason: format!("must be within 0.0..=1.0, got {}", self.fallback_volume),
            });
        }
        if self.event_channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "event-channel-capacity".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NotificationCenterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sound_namespace, DEFAULT_SOUND_NAMESPACE);
        assert_eq!(config.fallback_sound, DEFAULT_FALLBACK_SOUND);
        assert_eq!(config.fallback_volume, 0.0);
        assert_eq!(config.event_channel_capacity, DEFAULT_EVENT_CHANNEL_CAPACITY);
    }

    #[test]
    fn from_toml_str_overrides_and_defaults() {
        let config = NotificationCenterConfig::from_toml_str(
            r#"
            fallback-sound = "media/notifications/ping.ogg"
            fallback-volume = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.fallback_sound, "media/notifications/ping.ogg");
        assert_eq!(config.fallback_volume, 0.4);
        assert_eq!(config.sound_namespace, DEFAULT_SOUND_NAMESPACE);
    }

    #[test]
    fn from_toml_str_rejects_out_of_range_volume() {
        let result = NotificationCenterConfig::from_toml_str("fallback-volume = 1.5");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field, .. }) if field == "fallback-volume"
        ));
    }

    #[test]
    fn from_toml_str_rejects_zero_capacity() {
        let result = NotificationCenterConfig::from_toml_str("event-channel-capacity = 0");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field, .. }) if field == "event-channel-capacity"
        ));
    }

    #[test]
    fn from_toml_str_rejects_malformed_input() {
        let result = NotificationCenterConfig::from_toml_str("fallback-volume = \"loud\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn config_serde_round_trip() {
        let config = NotificationCenterConfig {
            sound_namespace: "alerts".to_string(),
            fallback_sound: "media/alert.ogg".to_string(),
            fallback_volume: 0.8,
            event_channel_capacity: 16,
        };
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: NotificationCenterConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }
}
