//! Fleet aircraft data model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Canonical fleet aircraft record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetAircraft {
    /// Server-assigned identifier.
    pub id: String,
    /// Registration mark, required (for example `N123AB`).
    pub tail_number: String,
    /// Airframe model, required (for example `Citation CJ3`).
    pub model: String,
    /// Airframe manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Year of manufacture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Manufacturer serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Home base airport code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_airport: Option<String>,
    /// Total airframe hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airframe_hours: Option<f64>,
    /// Total engine cycles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_cycles: Option<u32>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for FleetAircraft {
    const COLLECTION: &'static str = "fleet-aircraft";
    const KIND: &'static str = "fleet aircraft";
    type SaveInput = SaveFleetAircraftInput;
}

/// Input accepted by the fleet aircraft save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFleetAircraftInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Registration mark, required.
    pub tail_number: String,
    /// Airframe model, required.
    pub model: String,
    /// Airframe manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Year of manufacture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Manufacturer serial number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Home base airport code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_airport: Option<String>,
    /// Total airframe hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airframe_hours: Option<f64>,
    /// Total engine cycles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_cycles: Option<u32>,
}

/// First year a powered aircraft could plausibly carry.
pub const YEAR_MIN: u16 = 1903;
/// Upper bound guarding against typo years.
pub const YEAR_MAX: u16 = 2100;

impl SaveInput for SaveFleetAircraftInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("tailNumber", &self.tail_number);
        violations.require_non_empty("model", &self.model);
        if let Some(year) = self.year {
            if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
                violations.push("year", format!("must be between {YEAR_MIN} and {YEAR_MAX}"));
            }
        }
        violations.check_non_negative("airframeHours", self.airframe_hours);
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        input_fields(self, FleetAircraft::KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_input() -> SaveFleetAircraftInput {
        SaveFleetAircraftInput {
            id: None,
            tail_number: "N123AB".to_owned(),
            model: "Citation CJ3".to_owned(),
            manufacturer: Some("Cessna".to_owned()),
            year: Some(2019),
            serial_number: None,
            base_airport: Some("TEB".to_owned()),
            airframe_hours: Some(2450.5),
            engine_cycles: Some(1800),
        }
    }

    #[rstest]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[rstest]
    #[case::too_early(1899)]
    #[case::too_late(2150)]
    fn year_bounds_are_enforced(#[case] year: u16) {
        let mut input = valid_input();
        input.year = Some(year);
        let errors = input.validate().expect_err("year out of range");
        assert!(errors.names_field("year"));
    }

    #[rstest]
    fn negative_hours_and_blank_tail_are_both_reported() {
        let mut input = valid_input();
        input.tail_number = String::new();
        input.airframe_hours = Some(-10.0);

        let errors = input.validate().expect_err("two violations");
        assert!(errors.names_field("tailNumber"));
        assert!(errors.names_field("airframeHours"));
    }
}
