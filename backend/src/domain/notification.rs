//! Notification data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Severity and routing category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    Info,
    Warning,
    Critical,
    Maintenance,
}

/// Error returned when parsing a notification type from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNotificationTypeError;

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Maintenance => "Maintenance",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ParseNotificationTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid notification type")
    }
}

impl std::error::Error for ParseNotificationTypeError {}

impl FromStr for NotificationType {
    type Err = ParseNotificationTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Info" => Ok(Self::Info),
            "Warning" => Ok(Self::Warning),
            "Critical" => Ok(Self::Critical),
            "Maintenance" => Ok(Self::Maintenance),
            _ => Err(ParseNotificationTypeError),
        }
    }
}

/// Canonical notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Server-assigned identifier.
    pub id: String,
    /// Short headline, required.
    pub title: String,
    /// Body text, required.
    pub message: String,
    /// Severity and routing category.
    pub notification_type: NotificationType,
    /// Whether the recipient has read it. New notifications default to
    /// unread.
    #[serde(default)]
    pub is_read: bool,
    /// Optional link target: a relative path or absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for Notification {
    const COLLECTION: &'static str = "notifications";
    const KIND: &'static str = "notification";
    type SaveInput = SaveNotificationInput;
}

/// Input accepted by the notification save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNotificationInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Short headline, required.
    pub title: String,
    /// Body text, required.
    pub message: String,
    /// Severity and routing category.
    pub notification_type: NotificationType,
    /// Read flag; left unset on create, the record defaults to unread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    /// Optional link target: a relative path or absolute URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl SaveInput for SaveNotificationInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("title", &self.title);
        violations.require_non_empty("message", &self.message);
        if let Some(link) = self.link.as_deref() {
            let absolute = url::Url::parse(link).is_ok();
            if !absolute && !link.starts_with('/') {
                violations.push("link", "must be a relative path or absolute URL");
            }
        }
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        let mut fields = input_fields(self, Notification::KIND)?;
        if self.id.is_none() {
            fields
                .entry("isRead".to_owned())
                .or_insert(Value::Bool(false));
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_input() -> SaveNotificationInput {
        SaveNotificationInput {
            id: None,
            title: "MEL item due back".to_owned(),
            message: "N123AB landing light deferral expires tomorrow".to_owned(),
            notification_type: NotificationType::Warning,
            is_read: None,
            link: Some("/mel/items/m-1".to_owned()),
        }
    }

    #[rstest]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[rstest]
    #[case::relative("/fleet/ac-1", true)]
    #[case::absolute("https://ops.example/fleet", true)]
    #[case::bare_word("somewhere", false)]
    fn link_shapes(#[case] link: &str, #[case] ok: bool) {
        let mut input = valid_input();
        input.link = Some(link.to_owned());
        assert_eq!(input.validate().is_ok(), ok);
    }

    #[rstest]
    fn create_fields_default_is_read_false() {
        let fields = valid_input().document_fields().expect("serialises");
        assert_eq!(fields.get("isRead"), Some(&Value::Bool(false)));
    }

    #[rstest]
    fn blank_title_and_message_are_both_reported() {
        let mut input = valid_input();
        input.title = String::new();
        input.message = " ".to_owned();

        let errors = input.validate().expect_err("two violations");
        assert!(errors.names_field("title"));
        assert!(errors.names_field("message"));
    }
}
