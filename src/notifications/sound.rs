//! Audio cue policy for incoming notifications.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::NotificationCenterConfig;
use crate::ports::application_registry::ApplicationEntry;
use crate::ports::audio::{AudioSink, PlaybackOptions};
use crate::ports::settings::{SoundSelection, SoundSettingsProvider};

/// Decides which cue to play for an incoming notification and guarantees at
/// most one cue plays at a time.
///
/// A single shared selection slot is kept — not one per notification. Each
/// incoming notification resolves its cue from the settings provider and
/// overwrites the slot; playback is only triggered while the sink reports
/// nothing playing. A burst of notifications during playback leaves the
/// last-resolved selection in the slot without interrupting or queuing
/// additional plays.
pub struct NotificationSoundPolicy {
    namespace: String,
    selection: RwLock<SoundSelection>,
    settings: Arc<dyn SoundSettingsProvider>,
    audio: Arc<dyn AudioSink>,
}

impl NotificationSoundPolicy {
    pub fn new(
        config: &NotificationCenterConfig,
        settings: Arc<dyn SoundSettingsProvider>,
        audio: Arc<dyn AudioSink>,
    ) -> Self {
        Self {
            namespace: config.sound_namespace.clone(),
            selection: RwLock::new(SoundSelection::new(
                config.fallback_sound.clone(),
                config.fallback_volume,
            )),
            settings,
            audio,
        }
    }

    /// Resolves and records the cue for a notification owned by `app`, then
    /// triggers playback unless a cue is already playing. Playback failures
    /// are logged, never propagated — the notification state is already
    /// committed by the time the cue fires.
    pub async fn cue_incoming(&self, app: &ApplicationEntry) {
        let selection = self.settings.sound_settings(&self.namespace, app).await;
        *self.selection.write().await = selection.clone();

        if self.audio.is_playing().await {
            debug!(
                "Cue '{}' for app '{}' recorded while another cue is playing",
                selection.sound, app.id
            );
            return;
        }

        let options = PlaybackOptions {
            looped: false,
            volume: selection.volume,
        };
        if let Err(err) = self.audio.play(&selection.sound, options).await {
            warn!("Failed to play notification cue '{}': {}", selection.sound, err);
        }
    }

    /// The current content of the shared selection slot.
    pub async fn current_selection(&self) -> SoundSelection {
        self.selection.read().await.clone()
    }
}
