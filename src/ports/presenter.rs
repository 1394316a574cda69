use async_trait::async_trait;

use crate::error::NotificationError;
use crate::notifications::types::Notification;
use crate::ports::application_registry::ApplicationEntry;
use crate::shared_types::NotificationId;

/// Trait for the external presentation layer that renders notifications.
///
/// The presenter owns the on-screen lifecycle: it reads
/// `notification.duration_ms` as the auto-hide hint and runs its own exit
/// path (user dismissal or timeout). On that path it calls back into the
/// public `remove_active`, which is idempotent, so presenter-initiated and
/// user-initiated dismissal can race without harm. The center installs no
/// exit logic of its own.
#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    /// Requests that `notification` be rendered on screen.
    async fn show(
        &self,
        notification: &Notification,
        app: &ApplicationEntry,
    ) -> Result<(), NotificationError>;

    /// Requests that the visual element for `id` be closed. Closing an
    /// element that is not shown is a no-op.
    async fn close(&self, id: &NotificationId) -> Result<(), NotificationError>;
}
