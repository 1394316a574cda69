use thiserror::Error;

use crate::shared_types::{ApplicationId, NotificationId};

/// Errors raised by the notification center.
///
/// Only `UnknownApplication` and `DuplicateId` are surfaced by the lifecycle
/// operations themselves, both before any state is committed. The remaining
/// variants are produced by port implementations (presenter, audio sink) and
/// are logged by the service rather than propagated, since the record and
/// index state is already committed by the time those side effects run.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Application with id '{0}' is not registered.")]
    UnknownApplication(ApplicationId),

    #[error("A notification with id '{0}' already exists.")]
    DuplicateId(NotificationId),

    #[error("Presentation request for notification '{uniq_id}' failed: {reason}")]
    PresentationFailed {
        uniq_id: NotificationId,
        reason: String,
    },

    #[error("Audio playback failed for cue '{sound}': {reason}")]
    PlaybackFailed { sound: String, reason: String },

    #[error("Internal error in notification center: {0}")]
    Internal(String),
}
