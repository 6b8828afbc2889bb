//! Security event model and the payload handed to monitoring clients.

use buildpulse_config::{TagSet, flatten_tags};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// `source_type_name` stamped on every event payload.
pub const SOURCE_TYPE_NAME: &str = "jenkins";

/// Kind of security event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityEventKind {
    /// Successful authentication
    Login,
    /// Failed authentication
    AccessDenied,
    /// User logged out
    Logout,
}

impl SecurityEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityEventKind::Login => "LOGIN",
            SecurityEventKind::AccessDenied => "ACCESS_DENIED",
            SecurityEventKind::Logout => "LOGOUT",
        }
    }

    /// Verb phrase used in the event title and text.
    pub fn action(&self) -> &'static str {
        match self {
            SecurityEventKind::Login => "authenticated",
            SecurityEventKind::AccessDenied => "failed to authenticate",
            SecurityEventKind::Logout => "logout",
        }
    }

    /// Counter incremented alongside the event, without namespace prefix.
    pub fn metric_name(&self) -> &'static str {
        match self {
            SecurityEventKind::Login => "user.authenticated",
            SecurityEventKind::AccessDenied => "user.access_denied",
            SecurityEventKind::Logout => "user.logout",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            SecurityEventKind::Login | SecurityEventKind::Logout => Priority::Low,
            SecurityEventKind::AccessDenied => Priority::Normal,
        }
    }

    pub fn alert_type(&self) -> AlertType {
        match self {
            SecurityEventKind::Login | SecurityEventKind::Logout => AlertType::Success,
            SecurityEventKind::AccessDenied => AlertType::Error,
        }
    }
}

impl std::fmt::Display for SecurityEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Normal,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Success,
    Error,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A security event produced for a single lifecycle notification.
#[derive(Debug, Clone)]
pub struct SecurityEvent {
    subject: String,
    kind: SecurityEventKind,
    tags: TagSet,
    timestamp: OffsetDateTime,
}

impl SecurityEvent {
    /// The subject is carried as given, including an empty string.
    pub fn new(subject: impl Into<String>, kind: SecurityEventKind, tags: TagSet) -> Self {
        Self {
            subject: subject.into(),
            kind,
            tags,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn kind(&self) -> SecurityEventKind {
        self.kind
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Build the payload submitted through [`crate::MonitoringClient::send_event`].
    pub fn payload(&self) -> EventPayload {
        let title = format!("User {} {}", self.subject, self.kind.action());
        let text = format!("%%% \n{title} \n%%%");

        EventPayload {
            title,
            text,
            priority: self.kind.priority(),
            alert_type: self.kind.alert_type(),
            aggregation_key: self.subject.clone(),
            source_type_name: SOURCE_TYPE_NAME.to_string(),
            date_happened: self.timestamp.unix_timestamp(),
            tags: flatten_tags(&self.tags),
            subject: self.subject.clone(),
            kind: self.kind,
        }
    }
}

/// Serialized form of a [`SecurityEvent`] accepted by monitoring clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub text: String,
    pub priority: Priority,
    pub alert_type: AlertType,
    pub aggregation_key: String,
    pub source_type_name: String,
    /// Unix seconds
    pub date_happened: i64,
    pub tags: Vec<String>,
    pub subject: String,
    pub kind: SecurityEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildpulse_config::parse_global_tags;

    #[test]
    fn test_login_payload() {
        let event = SecurityEvent::new("alice", SecurityEventKind::Login, TagSet::new());
        let payload = event.payload();

        assert_eq!(payload.subject, "alice");
        assert_eq!(payload.kind, SecurityEventKind::Login);
        assert!(payload.tags.is_empty());
        assert_eq!(payload.title, "User alice authenticated");
        assert_eq!(payload.text, "%%% \nUser alice authenticated \n%%%");
        assert_eq!(payload.priority, Priority::Low);
        assert_eq!(payload.alert_type, AlertType::Success);
        assert_eq!(payload.aggregation_key, "alice");
        assert_eq!(payload.source_type_name, "jenkins");
        assert_eq!(payload.date_happened, event.timestamp().unix_timestamp());
    }

    #[test]
    fn test_access_denied_payload() {
        let tags = parse_global_tags("env:prod,canary");
        let payload = SecurityEvent::new("bob", SecurityEventKind::AccessDenied, tags).payload();

        assert_eq!(payload.title, "User bob failed to authenticate");
        assert_eq!(payload.priority, Priority::Normal);
        assert_eq!(payload.alert_type, AlertType::Error);
        assert_eq!(payload.tags, vec!["canary", "env:prod"]);
    }

    #[test]
    fn test_empty_subject_is_kept() {
        let event = SecurityEvent::new("", SecurityEventKind::Logout, TagSet::new());
        let payload = event.payload();

        assert_eq!(event.subject(), "");
        assert_eq!(payload.subject, "");
        assert_eq!(payload.aggregation_key, "");
        assert_eq!(payload.title, "User  logout");
    }

    #[test]
    fn test_kind_metric_names() {
        assert_eq!(SecurityEventKind::Login.metric_name(), "user.authenticated");
        assert_eq!(SecurityEventKind::AccessDenied.metric_name(), "user.access_denied");
        assert_eq!(SecurityEventKind::Logout.metric_name(), "user.logout");
    }

    #[test]
    fn test_payload_json_shape() {
        let payload =
            SecurityEvent::new("carol", SecurityEventKind::Logout, TagSet::new()).payload();
        let json = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(json["kind"], "LOGOUT");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["alert_type"], "success");
        assert_eq!(json["source_type_name"], "jenkins");
    }
}
