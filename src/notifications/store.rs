//! The authoritative notification store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::notifications::types::Notification;
use crate::shared_types::NotificationId;

/// The authoritative map from unique id to notification record.
///
/// `set` is the only mutation primitive: callers read, modify a cloned
/// record, and write the full record back. There is no partial field update
/// and no per-record deletion; only [`reset_all`](Self::reset_all) removes
/// entries. The store is an injected service owned by whoever constructs
/// the notification center, not a process-wide singleton.
#[derive(Debug, Default)]
pub struct NotificationStore {
    records: RwLock<HashMap<NotificationId, Notification>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a cloned snapshot of the record for `id`, or `None` if the
    /// id is unknown. Absence is never an error; lifecycle operations treat
    /// it as a benign race.
    pub async fn get(&self, id: &NotificationId) -> Option<Notification> {
        self.records.read().await.get(id).cloned()
    }

    /// Writes `record`, replacing any previous record under the same id.
    pub async fn set(&self, record: Notification) {
        self.records
            .write()
            .await
            .insert(record.uniq_id.clone(), record);
    }

    /// Drops every record.
    pub async fn reset_all(&self) {
        self.records.write().await.clear();
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::types::CreateNotificationRequest;

    fn record(id: &str) -> Notification {
        Notification::new(CreateNotificationRequest::new("mail", id, "You have mail"))
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let store = NotificationStore::new();
        assert!(store.get(&NotificationId::new("missing")).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn set_then_get_returns_snapshot() {
        let store = NotificationStore::new();
        store.set(record("n1")).await;

        let snapshot = store.get(&NotificationId::new("n1")).await.unwrap();
        assert_eq!(snapshot.uniq_id.as_str(), "n1");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn set_replaces_full_record() {
        let store = NotificationStore::new();
        store.set(record("n1")).await;

        let mut updated = store.get(&NotificationId::new("n1")).await.unwrap();
        updated.is_active = false;
        updated.is_read = true;
        store.set(updated).await;

        let snapshot = store.get(&NotificationId::new("n1")).await.unwrap();
        assert!(!snapshot.is_active);
        assert!(snapshot.is_read);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn reset_all_drops_every_record() {
        let store = NotificationStore::new();
        store.set(record("n1")).await;
        store.set(record("n2")).await;
        assert_eq!(store.len().await, 2);

        store.reset_all().await;
        assert!(store.is_empty().await);
        assert!(store.get(&NotificationId::new("n1")).await.is_none());
    }
}
