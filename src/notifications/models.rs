//! Notification entity and request/response DTOs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::postgres::PgRow;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// Delivery channel for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Email,
    Sms,
    Push,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Email => "EMAIL",
            NotificationType::Sms => "SMS",
            NotificationType::Push => "PUSH",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationType::Email => "Email Notification",
            NotificationType::Sms => "SMS Notification",
            NotificationType::Push => "Push Notification",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Delivery state of a stored notification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Pending => "PENDING",
            NotificationStatus::Sent => "SENT",
            NotificationStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a notification enum from its storage representation
#[derive(Debug, Clone, Error)]
#[error("unknown notification field value: {0}")]
pub struct ParseNotificationError(pub String);

impl FromStr for NotificationType {
    type Err = ParseNotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EMAIL" => Ok(NotificationType::Email),
            "SMS" => Ok(NotificationType::Sms),
            "PUSH" => Ok(NotificationType::Push),
            other => Err(ParseNotificationError(other.to_string())),
        }
    }
}

impl FromStr for NotificationStatus {
    type Err = ParseNotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(NotificationStatus::Pending),
            "SENT" => Ok(NotificationStatus::Sent),
            "FAILED" => Ok(NotificationStatus::Failed),
            other => Err(ParseNotificationError(other.to_string())),
        }
    }
}

/// Notification record as stored in PostgreSQL
///
/// `order_id` is an opaque link to the order service: a shared identifier,
/// never a cross-service call.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i64,
    pub notification_type: NotificationType,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub status: NotificationStatus,
    pub order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
    pub retry_count: i32,
}

impl Notification {
    /// Map a database row to a Notification
    pub fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let type_str: String = row.try_get("notification_type")?;
        let notification_type =
            type_str
                .parse::<NotificationType>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "notification_type".into(),
                    source: Box::new(e),
                })?;

        let status_str: String = row.try_get("status")?;
        let status = status_str
            .parse::<NotificationStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".into(),
                source: Box::new(e),
            })?;

        Ok(Notification {
            id: row.try_get("id")?,
            notification_type,
            recipient: row.try_get("recipient")?,
            subject: row.try_get("subject")?,
            message: row.try_get("message")?,
            status,
            order_id: row.try_get("order_id")?,
            created_at: row.try_get("created_at")?,
            sent_at: row.try_get("sent_at")?,
            retry_count: row.try_get("retry_count")?,
        })
    }
}

/// Notification send payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[validate(email(message = "Recipient must be a valid email"))]
    #[schema(example = "customer@example.com")]
    pub recipient: String,
    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    #[schema(example = "Order confirmed")]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    #[schema(example = "Your order #42 has been confirmed.")]
    pub message: String,
    #[schema(example = "42")]
    pub order_id: Option<String>,
}

/// Notification response data
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub status: NotificationStatus,
    pub order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            notification_type: n.notification_type,
            recipient: n.recipient,
            subject: n.subject,
            message: n.message,
            status: n.status,
            order_id: n.order_id,
            created_at: n.created_at,
            sent_at: n.sent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> NotificationRequest {
        NotificationRequest {
            notification_type: NotificationType::Email,
            recipient: "customer@example.com".to_string(),
            subject: "Order confirmed".to_string(),
            message: "Your order #42 has been confirmed.".to_string(),
            order_id: Some("42".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_recipient_email_rejected() {
        let mut req = valid_request();
        req.recipient = "not-an-email".to_string();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("recipient"));
    }

    #[test]
    fn test_empty_subject_rejected() {
        let mut req = valid_request();
        req.subject = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_type_serde_uses_screaming_case() {
        let json = serde_json::to_string(&NotificationType::Push).unwrap();
        assert_eq!(json, "\"PUSH\"");
        let back: NotificationStatus = serde_json::from_str("\"SENT\"").unwrap();
        assert_eq!(back, NotificationStatus::Sent);
    }

    #[test]
    fn test_enum_str_roundtrip() {
        for t in [
            NotificationType::Email,
            NotificationType::Sms,
            NotificationType::Push,
        ] {
            assert_eq!(t.as_str().parse::<NotificationType>().unwrap(), t);
        }
        for s in [
            NotificationStatus::Pending,
            NotificationStatus::Sent,
            NotificationStatus::Failed,
        ] {
            assert_eq!(s.as_str().parse::<NotificationStatus>().unwrap(), s);
        }
        assert!("FAX".parse::<NotificationType>().is_err());
    }

    #[test]
    fn test_type_descriptions() {
        assert_eq!(NotificationType::Email.description(), "Email Notification");
        assert_eq!(NotificationType::Sms.description(), "SMS Notification");
    }
}
