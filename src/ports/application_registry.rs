use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared_types::ApplicationId;

/// Metadata for a registered application, as resolved by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationEntry {
    /// The application's identifier.
    pub id: ApplicationId,
    /// Human-readable application name.
    pub name: String,
    /// Icon reference, if the application carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Per-application notification sound key, consulted by the settings
    /// provider when resolving the cue for an incoming notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_sound: Option<String>,
}

impl ApplicationEntry {
    /// Creates an entry with no icon and no per-application sound key.
    pub fn new(id: impl Into<ApplicationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            notification_sound: None,
        }
    }
}

/// Trait for resolving application identifiers to their metadata.
///
/// The notification center never owns application records; it only looks
/// them up when a notification is created. An unresolved id fails the
/// creation fast, before any state is written.
#[async_trait]
pub trait ApplicationRegistry: Send + Sync {
    /// Resolves `app_id` to its metadata, or `None` if no such application
    /// is registered.
    async fn resolve(&self, app_id: &ApplicationId) -> Option<ApplicationEntry>;
}
