use async_trait::async_trait;

use crate::error::NotificationError;

/// Options for a single playback request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackOptions {
    /// Whether the sound should loop. Notification cues never loop.
    pub looped: bool,
    /// Playback volume in `0.0..=1.0`.
    pub volume: f32,
}

/// Trait for the audio playback engine consumed by the sound policy.
///
/// The engine exposes its current playing state so the policy can guarantee
/// at most one cue plays at a time; a play request is only issued while
/// nothing is playing.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Whether a cue is currently being played.
    async fn is_playing(&self) -> bool;

    /// Plays `sound` with the given options.
    async fn play(&self, sound: &str, options: PlaybackOptions) -> Result<(), NotificationError>;
}
