// This module defines traits (ports) that the notification center expects
// to be implemented by outer layers (e.g., shell UI or infrastructure).

pub mod application_registry;
pub mod audio;
pub mod presenter;
pub mod settings;

pub use application_registry::{ApplicationEntry, ApplicationRegistry};
pub use audio::{AudioSink, PlaybackOptions};
pub use presenter::NotificationPresenter;
pub use settings::{SoundSelection, SoundSettingsProvider};
