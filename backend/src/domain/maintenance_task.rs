//! Maintenance task data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Lifecycle state of a maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MaintenanceTaskStatus {
    Open,
    InProgress,
    Completed,
    Overdue,
}

/// Error returned when parsing a maintenance task status from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMaintenanceTaskStatusError;

impl fmt::Display for MaintenanceTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("Open"),
            Self::InProgress => f.write_str("InProgress"),
            Self::Completed => f.write_str("Completed"),
            Self::Overdue => f.write_str("Overdue"),
        }
    }
}

impl fmt::Display for ParseMaintenanceTaskStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid maintenance task status")
    }
}

impl std::error::Error for ParseMaintenanceTaskStatusError {}

impl FromStr for MaintenanceTaskStatus {
    type Err = ParseMaintenanceTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Overdue" => Ok(Self::Overdue),
            _ => Err(ParseMaintenanceTaskStatusError),
        }
    }
}

/// Canonical maintenance task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    /// Server-assigned identifier.
    pub id: String,
    /// Aircraft the task applies to. No referential integrity is enforced;
    /// deleting the aircraft leaves the task behind.
    pub aircraft_id: String,
    /// Work description, required.
    pub description: String,
    /// Lifecycle state.
    pub status: MaintenanceTaskStatus,
    /// Airframe-hours threshold at which the task comes due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at_hours: Option<f64>,
    /// Calendar due date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Reference to the governing maintenance programme item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for MaintenanceTask {
    const COLLECTION: &'static str = "maintenance-tasks";
    const KIND: &'static str = "maintenance task";
    type SaveInput = SaveMaintenanceTaskInput;
}

/// Input accepted by the maintenance task save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMaintenanceTaskInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Aircraft the task applies to, required.
    pub aircraft_id: String,
    /// Work description, required.
    pub description: String,
    /// Lifecycle state.
    pub status: MaintenanceTaskStatus,
    /// Airframe-hours threshold at which the task comes due.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at_hours: Option<f64>,
    /// Calendar due date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Reference to the governing maintenance programme item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl SaveInput for SaveMaintenanceTaskInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("aircraftId", &self.aircraft_id);
        violations.require_non_empty("description", &self.description);
        violations.check_non_negative("dueAtHours", self.due_at_hours);
        violations.check_date("dueDate", self.due_date.as_deref());
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        input_fields(self, MaintenanceTask::KIND)
    }
}
