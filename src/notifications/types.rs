//! Core notification types: the stored record, the creation request, and
//! the events broadcast on lifecycle transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared_types::{ApplicationId, NotificationId};

/// A notification record as held by the store.
///
/// `is_active` and `is_read` are independent flags rather than a single
/// state enum; `is_read` is monotonic — no lifecycle operation resets it to
/// false once set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Caller-supplied identity, stable for the record's lifetime.
    pub uniq_id: NotificationId,
    /// The owning application (lookup-only reference, no ownership).
    pub app_id: ApplicationId,
    /// Display text.
    pub message: String,
    /// Assigned once at creation time.
    pub time_received: DateTime<Utc>,
    /// True while the notification is presented to the user.
    pub is_active: bool,
    /// True once the user has acknowledged the notification.
    pub is_read: bool,
    /// A persistent record is never evicted by dismissal passes; further
    /// semantics are reserved for external stores.
    #[serde(default)]
    pub persist: bool,
    /// Auto-dismiss hint in milliseconds, consumed by the presenter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    /// Opaque deep-link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Notification {
    /// Builds the record for a freshly created notification: received now,
    /// active, unread.
    pub fn new(request: CreateNotificationRequest) -> Self {
        Self {
            uniq_id: request.uniq_id,
            app_id: request.app_id,
            message: request.message,
            time_received: Utc::now(),
            is_active: true,
            is_read: false,
            persist: request.persist.unwrap_or(false),
            duration_ms: request.duration_ms,
            path: request.path,
        }
    }
}

/// Input for `create_notification`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateNotificationRequest {
    pub app_id: ApplicationId,
    pub uniq_id: NotificationId,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist: Option<bool>,
}

impl CreateNotificationRequest {
    /// Creates a request with only the required fields set.
    pub fn new(
        app_id: impl Into<ApplicationId>,
        uniq_id: impl Into<NotificationId>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            uniq_id: uniq_id.into(),
            message: message.into(),
            duration_ms: None,
            path: None,
            persist: None,
        }
    }
}

/// Events broadcast by the notification service after each completed
/// transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationEvent {
    Created {
        uniq_id: NotificationId,
        app_id: ApplicationId,
    },
    Dismissed {
        uniq_id: NotificationId,
    },
    AllActiveDismissed,
    MarkedRead {
        uniq_id: NotificationId,
    },
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateNotificationRequest {
        CreateNotificationRequest::new("mail", "mail:1", "You have mail")
    }

    #[test]
    fn notification_new_sets_lifecycle_flags() {
        let before = Utc::now();
        let notification = Notification::new(request());
        assert_eq!(notification.uniq_id.as_str(), "mail:1");
        assert_eq!(notification.app_id.as_str(), "mail");
        assert_eq!(notification.message, "You have mail");
        assert!(notification.is_active);
        assert!(!notification.is_read);
        assert!(!notification.persist);
        assert!(notification.duration_ms.is_none());
        assert!(notification.path.is_none());
        assert!(notification.time_received >= before);
        assert!(notification.time_received <= Utc::now());
    }

    #[test]
    fn notification_new_honors_optional_fields() {
        let mut req = request();
        req.duration_ms = Some(5000);
        req.path = Some("/mail/inbox".to_string());
        req.persist = Some(true);
        let notification = Notification::new(req);
        assert_eq!(notification.duration_ms, Some(5000));
        assert_eq!(notification.path.as_deref(), Some("/mail/inbox"));
        assert!(notification.persist);
    }

    #[test]
    fn notification_serde_skips_empty_options() {
        let notification = Notification::new(request());
        let serialized = serde_json::to_string(&notification).unwrap();
        assert!(!serialized.contains("\"duration_ms\""));
        assert!(!serialized.contains("\"path\""));
        let deserialized: Notification = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, notification);
    }

    #[test]
    fn create_request_serde_defaults() {
        let deserialized: CreateNotificationRequest = serde_json::from_str(
            r#"{"app-id":"mail","uniq-id":"mail:1","message":"You have mail"}"#,
        )
        .unwrap();
        assert_eq!(deserialized, request());
    }

    #[test]
    fn notification_event_serde() {
        let event = NotificationEvent::Dismissed {
            uniq_id: NotificationId::new("n1"),
        };
        let serialized = serde_json::to_string(&event).unwrap();
        assert_eq!(serialized, r#"{"dismissed":{"uniq_id":"n1"}}"#);
        let deserialized: NotificationEvent = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, event);

        let serialized_unit = serde_json::to_string(&NotificationEvent::Cleared).unwrap();
        assert_eq!(serialized_unit, "\"cleared\"");
    }
}
