//! Aircraft performance data model.
//!
//! Performance records are keyed by aircraft type and feed the flight
//! estimation flow: cruise speed and fuel burn anchor the model's estimate
//! instead of letting it guess.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Canonical aircraft performance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftPerformanceData {
    /// Server-assigned identifier.
    pub id: String,
    /// Aircraft type the numbers describe (for example `Citation CJ3`).
    pub aircraft_type: String,
    /// Typical cruise speed in knots, strictly positive.
    pub cruise_speed_kts: f64,
    /// Typical fuel burn in gallons per hour, strictly positive.
    pub fuel_burn_gph: f64,
    /// Still-air range in nautical miles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_nm: Option<f64>,
    /// Service ceiling in feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ceiling_ft: Option<u32>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for AircraftPerformanceData {
    const COLLECTION: &'static str = "aircraft-performance";
    const KIND: &'static str = "aircraft performance data";
    type SaveInput = SaveAircraftPerformanceDataInput;
}

/// Input accepted by the aircraft performance save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAircraftPerformanceDataInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Aircraft type the numbers describe, required.
    pub aircraft_type: String,
    /// Typical cruise speed in knots, strictly positive.
    pub cruise_speed_kts: f64,
    /// Typical fuel burn in gallons per hour, strictly positive.
    pub fuel_burn_gph: f64,
    /// Still-air range in nautical miles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_nm: Option<f64>,
    /// Service ceiling in feet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ceiling_ft: Option<u32>,
}

impl SaveInput for SaveAircraftPerformanceDataInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("aircraftType", &self.aircraft_type);
        violations.check_positive("cruiseSpeedKts", self.cruise_speed_kts);
        violations.check_positive("fuelBurnGph", self.fuel_burn_gph);
        if let Some(range) = self.range_nm {
            violations.check_positive("rangeNm", range);
        }
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        input_fields(self, AircraftPerformanceData::KIND)
    }
}
