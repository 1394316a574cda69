use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ports::application_registry::ApplicationEntry;

/// A resolved notification cue: sound identifier plus playback volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSelection {
    /// Identifier of the sound asset to play.
    pub sound: String,
    /// Playback volume in `0.0..=1.0`.
    pub volume: f32,
}

impl SoundSelection {
    pub fn new(sound: impl Into<String>, volume: f32) -> Self {
        Self {
            sound: sound.into(),
            volume,
        }
    }
}

/// Trait for resolving the notification cue for an application from the
/// user's persisted settings.
///
/// Lookups are keyed by a fixed settings namespace and the application; the
/// provider owns its settings snapshot and applies its own defaults, so the
/// resolution is infallible from the center's point of view. The resolved
/// [`ApplicationEntry`] is passed in full so providers can honor the
/// per-application `notification_sound` key.
#[async_trait]
pub trait SoundSettingsProvider: Send + Sync {
    async fn sound_settings(&self, namespace: &str, app: &ApplicationEntry) -> SoundSelection;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_selection_serde() {
        let selection = SoundSelection::new("media/notifications/online.ogg", 0.5);
        let serialized = serde_json::to_string(&selection).unwrap();
        let deserialized: SoundSelection = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, selection);
    }
}
