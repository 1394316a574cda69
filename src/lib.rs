//! Notification center domain services for the Vela desktop shell.
//!
//! This crate manages ephemeral, user-facing alerts raised by independent
//! applications: it tracks their lifecycle (created, actively displayed,
//! read or dismissed, purged), keeps the derived id indexes consistent with
//! per-record flags, and triggers an audio cue when notifications arrive.
//! Rendering, audio playback, application lookup, and settings retrieval
//! are pluggable collaborators expressed as port traits in [`ports`].

pub mod config;
pub mod error;
pub mod logging;
pub mod notifications;
pub mod ports;
pub mod shared_types;

// Re-export common types and interfaces
pub use config::{ConfigError, NotificationCenterConfig};
pub use error::NotificationError;
pub use notifications::{
    CreateNotificationRequest, DefaultNotificationService, Notification, NotificationEvent,
    NotificationIndex, NotificationService, NotificationSoundPolicy, NotificationStore,
};
pub use ports::{
    ApplicationEntry, ApplicationRegistry, AudioSink, NotificationPresenter, PlaybackOptions,
    SoundSelection, SoundSettingsProvider,
};
pub use shared_types::{ApplicationId, NotificationId};
