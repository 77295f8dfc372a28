//! Flight detail estimation flow.
//!
//! Estimates leg distance and enroute time for a city pair. When the fleet
//! has performance data for the aircraft type, the numbers are embedded in
//! the prompt so the model anchors on them instead of guessing; absence of
//! performance data is tolerated, store failures are not.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::airport::AirportCode;
use super::error::FlowError;
use super::performance::AircraftPerformanceData;
use super::ports::{DocumentStore, ModelClient, ModelPrompt};
use super::record::{EntityRecord, decode_document};
use super::route_suggestion::parse_airport_pair;
use super::validation::{ValidationErrors, Violations};

/// Input to the flight estimation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEstimationRequest {
    /// Departure airport code.
    pub origin: String,
    /// Arrival airport code.
    pub destination: String,
    /// Aircraft type flying the leg, required.
    pub aircraft_type: String,
    /// Caller-known cruise speed override in knots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_cruise_speed_kts: Option<f64>,
}

impl FlightEstimationRequest {
    fn validate(&self) -> Result<(AirportCode, AirportCode), ValidationErrors> {
        let airports = parse_airport_pair(&self.origin, &self.destination);

        let mut violations = Violations::new();
        violations.require_non_empty("aircraftType", &self.aircraft_type);
        if let Some(speed) = self.known_cruise_speed_kts {
            violations.check_positive("knownCruiseSpeedKts", speed);
        }

        match (airports, violations.finish()) {
            (Ok(pair), Ok(())) => Ok(pair),
            (Ok(_), Err(errors)) | (Err(errors), Ok(())) => Err(errors),
            (Err(mut airport_errors), Err(other)) => {
                airport_errors.merge(other);
                Err(airport_errors)
            }
        }
    }
}

/// Validated model output for a flight estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEstimate {
    /// Estimated distance in nautical miles.
    pub estimated_mileage_nm: f64,
    /// Estimated enroute time in hours.
    pub estimated_flight_time_hours: f64,
    /// Cruise speed the estimate assumed, in knots.
    pub assumed_cruise_speed_kts: f64,
    /// Short explanation of what the estimate is based on.
    pub brief_explanation: String,
}

/// Flight estimation flow over an injected model client and store handle.
#[derive(Clone)]
pub struct FlightEstimationService<M, S> {
    model: Arc<M>,
    store: Arc<S>,
}

impl<M, S> FlightEstimationService<M, S> {
    /// Create the flow with the given model client and store.
    pub fn new(model: Arc<M>, store: Arc<S>) -> Self {
        Self { model, store }
    }
}

impl<M, S> FlightEstimationService<M, S>
where
    M: ModelClient,
    S: DocumentStore,
{
    /// Estimate distance, time, and assumed speed for the requested leg.
    pub async fn estimate(
        &self,
        request: FlightEstimationRequest,
    ) -> Result<FlightEstimate, FlowError> {
        let (origin, destination) = request.validate()?;
        let performance = self.performance_for(&request.aircraft_type).await?;
        let prompt = ModelPrompt::new(
            "estimate-flight-details",
            render_prompt(&origin, &destination, &request, performance.as_ref()),
        );
        let payload = self
            .model
            .generate(&prompt)
            .await
            .map_err(|err| FlowError::model(err.to_string()))?;
        decode_estimate(payload)
    }

    async fn performance_for(
        &self,
        aircraft_type: &str,
    ) -> Result<Option<AircraftPerformanceData>, FlowError> {
        let documents = self
            .store
            .list(AircraftPerformanceData::COLLECTION)
            .await
            .map_err(|err| {
                FlowError::persistence(AircraftPerformanceData::KIND, None, err.to_string())
            })?;
        for document in documents {
            match decode_document::<AircraftPerformanceData>(document) {
                Ok(record) if record.aircraft_type.eq_ignore_ascii_case(aircraft_type) => {
                    return Ok(Some(record));
                }
                Ok(_) => {}
                // A corrupt record must not fail an estimate that tolerates
                // having no performance data at all.
                Err(err) => warn!(error = %err, "skipping undecodable performance record"),
            }
        }
        Ok(None)
    }
}

fn render_prompt(
    origin: &AirportCode,
    destination: &AirportCode,
    request: &FlightEstimationRequest,
    performance: Option<&AircraftPerformanceData>,
) -> String {
    let mut prompt = format!(
        "Estimate flight details for a {aircraft} leg from {origin} to {destination}. \
         Respond with JSON: {{\"estimatedMileageNm\": number, \
         \"estimatedFlightTimeHours\": number, \"assumedCruiseSpeedKts\": number, \
         \"briefExplanation\": string}}.",
        aircraft = request.aircraft_type,
    );
    if let Some(speed) = request.known_cruise_speed_kts {
        prompt.push_str(&format!(" Use a cruise speed of {speed} knots."));
    } else if let Some(performance) = performance {
        prompt.push_str(&format!(
            " Fleet performance data: cruise speed {speed} knots, fuel burn {burn} gph.",
            speed = performance.cruise_speed_kts,
            burn = performance.fuel_burn_gph,
        ));
    }
    prompt
}

fn decode_estimate(payload: Value) -> Result<FlightEstimate, FlowError> {
    serde_json::from_value(payload)
        .map_err(|err| FlowError::model(format!("model returned an unusable estimate: {err}")))
}

#[cfg(test)]
#[path = "flight_estimation_tests.rs"]
mod tests;
