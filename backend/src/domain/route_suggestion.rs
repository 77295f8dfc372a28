//! Route suggestion flow.
//!
//! Renders a fixed prompt template from a validated request, submits it to
//! the hosted model, and validates the model's JSON against the output
//! shape. Model failures propagate; there is no retry and no fallback.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::airport::AirportCode;
use super::error::FlowError;
use super::ports::{ModelClient, ModelPrompt};
use super::validation::{ValidationErrors, Violations};

/// Input to the route suggestion flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSuggestionRequest {
    /// Departure airport code.
    pub origin: String,
    /// Arrival airport code.
    pub destination: String,
    /// Aircraft type flying the leg, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
    /// Free-form planning considerations (weather, slots, payload).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considerations: Option<String>,
}

impl RouteSuggestionRequest {
    fn airports(&self) -> Result<(AirportCode, AirportCode), ValidationErrors> {
        parse_airport_pair(&self.origin, &self.destination)
    }
}

/// Validate an origin/destination pair, reporting both fields at once.
pub(crate) fn parse_airport_pair(
    origin: &str,
    destination: &str,
) -> Result<(AirportCode, AirportCode), ValidationErrors> {
    let mut violations = Violations::new();
    let origin = match AirportCode::new(origin) {
        Ok(code) => Some(code),
        Err(err) => {
            violations.push("origin", err.to_string());
            None
        }
    };
    let destination = match AirportCode::new(destination) {
        Ok(code) => Some(code),
        Err(err) => {
            violations.push("destination", err.to_string());
            None
        }
    };
    match (origin, destination) {
        (Some(origin), Some(destination)) => {
            violations.finish()?;
            Ok((origin, destination))
        }
        _ => Err(violations
            .finish()
            .err()
            .unwrap_or_else(|| ValidationErrors::single("origin", "invalid airport code"))),
    }
}

/// Validated model output for a route suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRoute {
    /// Ordered waypoint identifiers including origin and destination.
    pub waypoints: Vec<String>,
    /// Estimated great-circle-plus-routing distance in nautical miles.
    pub estimated_distance_nm: f64,
    /// Estimated enroute time in hours.
    pub estimated_flight_time_hours: f64,
    /// Why the model picked this routing.
    pub reasoning: String,
}

/// Route suggestion flow over an injected model client.
#[derive(Clone)]
pub struct RouteSuggestionService<M> {
    model: Arc<M>,
}

impl<M> RouteSuggestionService<M> {
    /// Create the flow with the given model client.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }
}

impl<M: ModelClient> RouteSuggestionService<M> {
    /// Suggest a routing for the requested leg.
    pub async fn suggest(&self, request: RouteSuggestionRequest) -> Result<SuggestedRoute, FlowError> {
        let (origin, destination) = request.airports()?;
        let prompt = ModelPrompt::new(
            "suggest-route",
            render_prompt(&origin, &destination, &request),
        );
        let payload = self
            .model
            .generate(&prompt)
            .await
            .map_err(|err| FlowError::model(err.to_string()))?;
        decode_route(payload)
    }
}

fn render_prompt(
    origin: &AirportCode,
    destination: &AirportCode,
    request: &RouteSuggestionRequest,
) -> String {
    let mut prompt = format!(
        "Suggest an IFR routing from {origin} to {destination}. \
         Respond with JSON: {{\"waypoints\": [string], \
         \"estimatedDistanceNm\": number, \
         \"estimatedFlightTimeHours\": number, \"reasoning\": string}}."
    );
    if let Some(aircraft_type) = request.aircraft_type.as_deref() {
        prompt.push_str(&format!(" Aircraft type: {aircraft_type}."));
    }
    if let Some(considerations) = request.considerations.as_deref() {
        prompt.push_str(&format!(" Considerations: {considerations}."));
    }
    prompt
}

fn decode_route(payload: Value) -> Result<SuggestedRoute, FlowError> {
    serde_json::from_value(payload)
        .map_err(|err| FlowError::model(format!("model returned an unusable route suggestion: {err}")))
}

#[cfg(test)]
#[path = "route_suggestion_tests.rs"]
mod tests;
