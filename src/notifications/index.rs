//! The derived id indexes: every known notification and the currently
//! active subset.

use tokio::sync::RwLock;

use crate::shared_types::NotificationId;

/// Maintains the two derived ordered id lists.
///
/// The all-ids list is an append-only ledger of every notification created
/// in the current session; the active-ids list is the insertion-ordered
/// subset currently being displayed. Every mutation is a transformation of
/// the previous list contents (append or filter-out) applied under a single
/// write-lock guard, so racing operations degrade to last-write-wins rather
/// than corruption.
#[derive(Debug, Default)]
pub struct NotificationIndex {
    all: RwLock<Vec<NotificationId>>,
    active: RwLock<Vec<NotificationId>>,
}

impl NotificationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` to the all-ids ledger.
    pub async fn append_all(&self, id: NotificationId) {
        self.all.write().await.push(id);
    }

    /// Appends `id` to the active-ids list.
    pub async fn append_active(&self, id: NotificationId) {
        self.active.write().await.push(id);
    }

    /// Removes `id` from the active-ids list via a filter transform.
    /// Removing an id that is not present is a no-op.
    pub async fn remove_from_active(&self, id: &NotificationId) {
        let mut active = self.active.write().await;
        let filtered: Vec<NotificationId> =
            active.iter().filter(|cur| *cur != id).cloned().collect();
        *active = filtered;
    }

    /// Clears the active-ids list.
    pub async fn reset_active(&self) {
        self.active.write().await.clear();
    }

    /// Clears the all-ids ledger.
    pub async fn reset_all(&self) {
        self.all.write().await.clear();
    }

    /// Ordered snapshot of the active-ids list.
    pub async fn read_active(&self) -> Vec<NotificationId> {
        self.active.read().await.clone()
    }

    /// Ordered snapshot of the all-ids ledger.
    pub async fn read_all(&self) -> Vec<NotificationId> {
        self.all.read().await.clone()
    }
}
