use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Represents a unique identifier for an application.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new `ApplicationId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "ApplicationId must not be empty.");
        Self(id_str)
    }

    /// Returns a string slice of the application ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApplicationId").field(&self.0).finish()
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        debug_assert!(!id.is_empty(), "ApplicationId must not be empty.");
        Self(id)
    }
}

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        debug_assert!(!id.is_empty(), "ApplicationId must not be empty.");
        Self(id.to_string())
    }
}

/// Represents the caller-supplied unique identifier of a notification.
///
/// The id is chosen by the application raising the notification and must be
/// unique among currently-known notifications; it stays stable for the
/// record's lifetime.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    /// Creates a new `NotificationId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "NotificationId must not be empty.");
        Self(id_str)
    }

    /// Returns a string slice of the notification ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotificationId").field(&self.0).finish()
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        debug_assert!(!id.is_empty(), "NotificationId must not be empty.");
        Self(id)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        debug_assert!(!id.is_empty(), "NotificationId must not be empty.");
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_new_and_as_str() {
        let app_id = ApplicationId::new("mail");
        assert_eq!(app_id.as_str(), "mail");
    }

    #[test]
    fn application_id_display() {
        let app_id = ApplicationId::new("dialer");
        assert_eq!(format!("{}", app_id), "dialer");
    }

    #[test]
    fn application_id_serde() {
        let app_id = ApplicationId::new("mail");
        let serialized = serde_json::to_string(&app_id).unwrap();
        assert_eq!(serialized, "\"mail\"");
        let deserialized: ApplicationId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, app_id);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ApplicationId must not be empty.")]
    fn application_id_new_empty_panic() {
        ApplicationId::new("");
    }

    #[test]
    fn notification_id_new_and_as_str() {
        let id = NotificationId::new("mail:42");
        assert_eq!(id.as_str(), "mail:42");
    }

    #[test]
    fn notification_id_from_string() {
        let id = NotificationId::from("mail:42".to_string());
        assert_eq!(id.as_str(), "mail:42");
    }

    #[test]
    fn notification_id_display_and_debug() {
        let id = NotificationId::new("n1");
        assert_eq!(format!("{}", id), "n1");
        assert_eq!(format!("{:?}", id), "NotificationId(\"n1\")");
    }

    #[test]
    fn notification_id_serde() {
        let id = NotificationId::new("n1");
        let serialized = serde_json::to_string(&id).unwrap();
        assert_eq!(serialized, "\"n1\"");
        let deserialized: NotificationId = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "NotificationId must not be empty.")]
    fn notification_id_new_empty_panic() {
        NotificationId::new("");
    }
}
