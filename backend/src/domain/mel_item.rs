//! Minimum Equipment List (MEL) item data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// MEL repair-interval category. Closed regulatory set: A through D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MelCategory {
    A,
    B,
    C,
    D,
}

/// Error returned when parsing a MEL category from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMelCategoryError;

impl fmt::Display for MelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
            Self::C => f.write_str("C"),
            Self::D => f.write_str("D"),
        }
    }
}

impl fmt::Display for ParseMelCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid MEL category, expected one of A, B, C, D")
    }
}

impl std::error::Error for ParseMelCategoryError {}

impl FromStr for MelCategory {
    type Err = ParseMelCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ParseMelCategoryError),
        }
    }
}

/// Deferral state of a MEL item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MelStatus {
    Open,
    Closed,
}

/// Error returned when parsing a MEL status from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseMelStatusError;

impl fmt::Display for MelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("Open"),
            Self::Closed => f.write_str("Closed"),
        }
    }
}

impl fmt::Display for ParseMelStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid MEL status")
    }
}

impl std::error::Error for ParseMelStatusError {}

impl FromStr for MelStatus {
    type Err = ParseMelStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "Closed" => Ok(Self::Closed),
            _ => Err(ParseMelStatusError),
        }
    }
}

/// Canonical MEL item record.
///
/// Carries both the aircraft identifier and a denormalised copy of its tail
/// number for display. The save flow refreshes the copy when the referenced
/// aircraft still exists; there is no cascade when it does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MelItem {
    /// Server-assigned identifier.
    pub id: String,
    /// Aircraft the deferral applies to.
    pub aircraft_id: String,
    /// Cached tail number of that aircraft, for display.
    pub aircraft_tail_number: String,
    /// Deferred item description, required.
    pub description: String,
    /// Repair-interval category.
    pub category: MelCategory,
    /// Deferral state.
    pub status: MelStatus,
    /// MEL chapter reference (for example `25-10-01a`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Date the deferral was opened, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_date: Option<String>,
    /// Date the item must be restored by, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_back_date: Option<String>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for MelItem {
    const COLLECTION: &'static str = "mel-items";
    const KIND: &'static str = "MEL item";
    type SaveInput = SaveMelItemInput;
}

/// Input accepted by the MEL item save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMelItemInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Aircraft the deferral applies to, required.
    pub aircraft_id: String,
    /// Denormalised tail number; the save flow refreshes it when the
    /// aircraft resolves.
    pub aircraft_tail_number: String,
    /// Deferred item description, required.
    pub description: String,
    /// Repair-interval category.
    pub category: MelCategory,
    /// Deferral state.
    pub status: MelStatus,
    /// MEL chapter reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Date the deferral was opened, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opened_date: Option<String>,
    /// Date the item must be restored by, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_back_date: Option<String>,
}

impl SaveInput for SaveMelItemInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("aircraftId", &self.aircraft_id);
        violations.require_non_empty("aircraftTailNumber", &self.aircraft_tail_number);
        violations.require_non_empty("description", &self.description);
        violations.check_date("openedDate", self.opened_date.as_deref());
        violations.check_date("dueBackDate", self.due_back_date.as_deref());
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        input_fields(self, MelItem::KIND)
    }
}
