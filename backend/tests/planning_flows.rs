//! Integration coverage for the planning flows (route suggestion, flight
//! estimation, FBO lookup) with deterministic port stubs standing in for
//! the hosted model and directory provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use flightops_backend::domain::ports::{
    FboDirectory, FboDirectoryError, FboRecord, ModelClient, ModelClientError, ModelPrompt,
};
use flightops_backend::domain::{
    AircraftPerformanceFlows, AirportCode, FboLookupService, FlightEstimationRequest,
    FlightEstimationService, RouteSuggestionRequest, RouteSuggestionService,
    SaveAircraftPerformanceDataInput,
};
use flightops_backend::outbound::persistence::InMemoryDocumentStore;

/// Model stub that records prompts and replies with a canned payload.
struct CannedModel {
    payload: Value,
    prompts: Mutex<Vec<ModelPrompt>>,
}

impl CannedModel {
    fn new(payload: Value) -> Self {
        Self {
            payload,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> ModelPrompt {
        self.prompts
            .lock()
            .expect("prompt log lock")
            .last()
            .cloned()
            .expect("at least one prompt recorded")
    }
}

#[async_trait]
impl ModelClient for CannedModel {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<Value, ModelClientError> {
        self.prompts
            .lock()
            .map_err(|_| ModelClientError::transport("prompt log poisoned"))?
            .push(prompt.clone());
        Ok(self.payload.clone())
    }
}

struct CannedDirectory;

#[async_trait]
impl FboDirectory for CannedDirectory {
    async fn fbos_for_airport(
        &self,
        airport: &AirportCode,
    ) -> Result<Vec<FboRecord>, FboDirectoryError> {
        Ok(vec![FboRecord {
            name: "Meridian".to_owned(),
            airport_code: airport.as_str().to_owned(),
            phone: Some("+1 201 288 5040".to_owned()),
            frequency: Some("122.95".to_owned()),
            fuel_types: vec!["Jet A".to_owned()],
            has_hangar_space: true,
        }])
    }
}

#[tokio::test]
async fn route_suggestion_decodes_the_model_payload() {
    let model = Arc::new(CannedModel::new(json!({
        "waypoints": ["TEB", "SBJ", "KPBI"],
        "estimatedDistanceNm": 920.0,
        "estimatedFlightTimeHours": 2.4,
        "reasoning": "Direct airway routing with one fix for flow control."
    })));
    let service = RouteSuggestionService::new(Arc::clone(&model));

    let route = service
        .suggest(RouteSuggestionRequest {
            origin: "teb".to_owned(),
            destination: "kpbi".to_owned(),
            aircraft_type: Some("Citation CJ3".to_owned()),
            considerations: None,
        })
        .await
        .expect("suggestion succeeds");

    assert_eq!(route.waypoints.first().map(String::as_str), Some("TEB"));
    let prompt = model.last_prompt();
    assert_eq!(prompt.task, "suggest-route");
    assert!(prompt.prompt.contains("TEB"), "codes are normalised");
    assert!(prompt.prompt.contains("KPBI"));
}

#[tokio::test]
async fn flight_estimation_anchors_on_stored_performance_data() {
    let store = Arc::new(InMemoryDocumentStore::new());
    AircraftPerformanceFlows::new(Arc::clone(&store))
        .save(SaveAircraftPerformanceDataInput {
            id: None,
            aircraft_type: "Citation CJ3".to_owned(),
            cruise_speed_kts: 416.0,
            fuel_burn_gph: 150.0,
            range_nm: None,
            service_ceiling_ft: None,
        })
        .await
        .expect("performance saved");

    let model = Arc::new(CannedModel::new(json!({
        "estimatedMileageNm": 920.0,
        "estimatedFlightTimeHours": 2.2,
        "assumedCruiseSpeedKts": 416.0,
        "briefExplanation": "Great-circle distance at the fleet's cruise speed."
    })));
    let service = FlightEstimationService::new(Arc::clone(&model), store);

    let estimate = service
        .estimate(FlightEstimationRequest {
            origin: "TEB".to_owned(),
            destination: "KPBI".to_owned(),
            aircraft_type: "citation cj3".to_owned(),
            known_cruise_speed_kts: None,
        })
        .await
        .expect("estimate succeeds");

    assert!((estimate.assumed_cruise_speed_kts - 416.0).abs() < f64::EPSILON);
    let prompt = model.last_prompt();
    assert!(
        prompt.prompt.contains("cruise speed 416 knots"),
        "performance match ignores case and feeds the prompt: {}",
        prompt.prompt
    );
}

#[tokio::test]
async fn fbo_lookup_normalises_the_airport_code() {
    let service = FboLookupService::new(Arc::new(CannedDirectory));

    let fbos = service.lookup(" teb ").await.expect("lookup succeeds");
    assert_eq!(fbos.len(), 1);
    assert_eq!(fbos[0].airport_code, "TEB");
}
