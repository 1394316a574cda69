//! Notification service: the lifecycle controller orchestrating store,
//! indexes, audio cue policy, and the presentation layer.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::NotificationCenterConfig;
use crate::error::NotificationError;
use crate::notifications::index::NotificationIndex;
use crate::notifications::sound::NotificationSoundPolicy;
use crate::notifications::store::NotificationStore;
use crate::notifications::types::{CreateNotificationRequest, Notification, NotificationEvent};
use crate::ports::application_registry::ApplicationRegistry;
use crate::ports::audio::AudioSink;
use crate::ports::presenter::NotificationPresenter;
use crate::ports::settings::SoundSettingsProvider;
use crate::shared_types::NotificationId;

/// Interface for the notification center consumed by shell UI code.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Creates a notification: resolves the owning application, writes the
    /// record, updates both indexes, triggers the audio cue, and requests
    /// presentation. Fails fast with [`NotificationError::UnknownApplication`]
    /// or [`NotificationError::DuplicateId`] before any state is written.
    async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<Notification, NotificationError>;

    /// Dismisses the visual element for `id` and deactivates its record.
    /// Idempotent: repeated calls and calls for unknown ids are benign.
    async fn remove_active(&self, id: &NotificationId) -> Result<(), NotificationError>;

    /// Deactivates every record in the active snapshot taken at the start,
    /// then resets the active-ids list wholesale.
    async fn remove_all_active(&self) -> Result<(), NotificationError>;

    /// Marks the record as read and deactivates it. A missing record is a
    /// benign no-op.
    async fn mark_as_read(&self, id: &NotificationId) -> Result<(), NotificationError>;

    /// Hard reset: closes active visuals, erases every record, and empties
    /// both indexes. The only operation that removes entries from the store
    /// and the all-ids ledger.
    async fn clear_all_notifications(&self) -> Result<(), NotificationError>;

    /// Cloned snapshot of the record for `id`, if known.
    async fn get_notification(&self, id: &NotificationId) -> Option<Notification>;

    /// Ordered snapshot of the currently active notification ids.
    async fn active_notifications(&self) -> Vec<NotificationId>;

    /// Ordered snapshot of every notification id known this session.
    async fn all_notifications(&self) -> Vec<NotificationId>;

    /// Subscribes to lifecycle events.
    fn subscribe_to_events(&self) -> broadcast::Receiver<NotificationEvent>;
}

/// Default implementation of the notification center.
///
/// Consistency model: each operation reads a snapshot, computes, and writes
/// without a cross-component transaction. Two operations racing on the same
/// list degrade to last-write-wins; the operations are designed so that this
/// is tolerable (idempotent dismissal, benign missing-record no-ops,
/// terminal full resets). Stronger guarantees would require serializing all
/// mutations through a single-owner queue, which this implementation
/// deliberately does not do.
pub struct DefaultNotificationService {
    store: Arc<NotificationStore>,
    index: Arc<NotificationIndex>,
    registry: Arc<dyn ApplicationRegistry>,
    presenter: Arc<dyn NotificationPresenter>,
    sound_policy: NotificationSoundPolicy,
    event_publisher: broadcast::Sender<NotificationEvent>,
}

impl DefaultNotificationService {
    pub fn new(
        config: &NotificationCenterConfig,
        store: Arc<NotificationStore>,
        index: Arc<NotificationIndex>,
        registry: Arc<dyn ApplicationRegistry>,
        settings: Arc<dyn SoundSettingsProvider>,
        audio: Arc<dyn AudioSink>,
        presenter: Arc<dyn NotificationPresenter>,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(config.event_channel_capacity);
        Self {
            store,
            index,
            registry,
            presenter,
            sound_policy: NotificationSoundPolicy::new(config, settings, audio),
            event_publisher,
        }
    }

    /// The audio cue policy, exposed for shell code that surfaces the
    /// current selection (e.g. in a settings preview).
    pub fn sound_policy(&self) -> &NotificationSoundPolicy {
        &self.sound_policy
    }

    fn publish_event(&self, event: NotificationEvent) {
        // A send error only means there are no subscribers right now.
        if self.event_publisher.send(event).is_err() {
            debug!("No notification event subscribers");
        }
    }
}

#[async_trait]
impl NotificationService for DefaultNotificationService {
    async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<Notification, NotificationError> {
        let app = self
            .registry
            .resolve(&request.app_id)
            .await
            .ok_or_else(|| NotificationError::UnknownApplication(request.app_id.clone()))?;

        if self.store.get(&request.uniq_id).await.is_some() {
            return Err(NotificationError::DuplicateId(request.uniq_id));
        }

        let record = Notification::new(request);

        // Store first, then all-ids, then active-ids: readers never observe
        // an active id that is missing from the ledger.
        self.store.set(record.clone()).await;
        self.index.append_all(record.uniq_id.clone()).await;
        self.index.append_active(record.uniq_id.clone()).await;

        self.sound_policy.cue_incoming(&app).await;

        if let Err(err) = self.presenter.show(&record, &app).await {
            warn!(
                "Presentation request for notification '{}' failed: {}",
                record.uniq_id, err
            );
        }

        self.publish_event(NotificationEvent::Created {
            uniq_id: record.uniq_id.clone(),
            app_id: record.app_id.clone(),
        });
        info!(
            "Notification '{}' created for app '{}'",
            record.uniq_id, record.app_id
        );
        Ok(record)
    }

    async fn remove_active(&self, id: &NotificationId) -> Result<(), NotificationError> {
        // Close the visual element first, best-effort.
        if let Err(err) = self.presenter.close(id).await {
            warn!("Failed to close visual for notification '{}': {}", id, err);
        }

        let active_ids = self.index.read_active().await;
        if !active_ids.contains(id) {
            // Duplicate dismiss (e.g. auto-hide racing a user click); the
            // record mutation below is still attempted.
            debug!("Notification '{}' not in the active list", id);
        }

        let record = match self.store.get(id).await {
            Some(record) => record,
            None => return Ok(()),
        };

        self.store
            .set(Notification {
                is_active: false,
                ..record
            })
            .await;
        self.index.remove_from_active(id).await;

        self.publish_event(NotificationEvent::Dismissed {
            uniq_id: id.clone(),
        });
        Ok(())
    }

    async fn remove_all_active(&self) -> Result<(), NotificationError> {
        let snapshot = self.index.read_active().await;

        for id in &snapshot {
            let record = match self.store.get(id).await {
                Some(record) => record,
                None => continue,
            };
            self.store
                .set(Notification {
                    is_active: false,
                    ..record
                })
                .await;
        }

        // Terminal full reset rather than per-item removal: ids appended by
        // a racing create are cleared too (last writer wins on the list).
        self.index.reset_active().await;

        self.publish_event(NotificationEvent::AllActiveDismissed);
        info!("Dismissed {} active notifications", snapshot.len());
        Ok(())
    }

    async fn mark_as_read(&self, id: &NotificationId) -> Result<(), NotificationError> {
        let record = match self.store.get(id).await {
            Some(record) => record,
            None => return Ok(()),
        };
        let was_active = record.is_active;

        self.store
            .set(Notification {
                is_read: true,
                is_active: false,
                ..record
            })
            .await;

        // The index only needs touching when the notification was actually
        // being displayed.
        if was_active {
            self.index.remove_from_active(id).await;
        }

        self.publish_event(NotificationEvent::MarkedRead {
            uniq_id: id.clone(),
        });
        Ok(())
    }

    async fn clear_all_notifications(&self) -> Result<(), NotificationError> {
        let snapshot = self.index.read_active().await;

        for id in &snapshot {
            match self.store.get(id).await {
                Some(record) if record.is_active => {
                    if let Err(err) = self.presenter.close(id).await {
                        warn!("Failed to close visual for notification '{}': {}", id, err);
                    }
                }
                _ => {}
            }
        }

        self.store.reset_all().await;
        self.index.reset_active().await;
        self.index.reset_all().await;

        self.publish_event(NotificationEvent::Cleared);
        info!("Cleared all notifications");
        Ok(())
    }

    async fn get_notification(&self, id: &NotificationId) -> Option<Notification> {
        self.store.get(id).await
    }

    async fn active_notifications(&self) -> Vec<NotificationId> {
        self.index.read_active().await
    }

    async fn all_notifications(&self) -> Vec<NotificationId> {
        self.index.read_all().await
    }

    fn subscribe_to_events(&self) -> broadcast::Receiver<NotificationEvent> {
        self.event_publisher.subscribe()
    }
}
