//! Tests for the route suggestion flow.

use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::domain::ports::{MockModelClient, ModelClientError};

fn request() -> RouteSuggestionRequest {
    RouteSuggestionRequest {
        origin: "teb".to_owned(),
        destination: "KPBI".to_owned(),
        aircraft_type: Some("Citation CJ3".to_owned()),
        considerations: Some("avoid moderate icing over the Appalachians".to_owned()),
    }
}

#[tokio::test]
async fn suggest_returns_validated_route() {
    let mut model = MockModelClient::new();
    model
        .expect_generate()
        .times(1)
        .withf(|prompt| {
            prompt.task == "suggest-route"
                && prompt.prompt.contains("TEB")
                && prompt.prompt.contains("KPBI")
                && prompt.prompt.contains("Citation CJ3")
        })
        .return_once(|_| {
            Ok(json!({
                "waypoints": ["TEB", "SBJ", "J48", "PBI", "KPBI"],
                "estimatedDistanceNm": 1035.0,
                "estimatedFlightTimeHours": 2.6,
                "reasoning": "Standard southbound routing clear of the icing band.",
            }))
        });

    let service = RouteSuggestionService::new(Arc::new(model));
    let route = service.suggest(request()).await.expect("suggestion");

    assert_eq!(route.waypoints.first().map(String::as_str), Some("TEB"));
    assert_eq!(route.estimated_distance_nm, 1035.0);
}

#[tokio::test]
async fn invalid_airport_codes_fail_validation_naming_both_fields() {
    let model = MockModelClient::new(); // no expectations: never called
    let service = RouteSuggestionService::new(Arc::new(model));

    let err = service
        .suggest(RouteSuggestionRequest {
            origin: String::new(),
            destination: "way-too-long".to_owned(),
            aircraft_type: None,
            considerations: None,
        })
        .await
        .expect_err("validation");

    match err {
        FlowError::Validation(errors) => {
            assert!(errors.names_field("origin"));
            assert!(errors.names_field("destination"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn model_transport_failure_propagates_as_model_error() {
    let mut model = MockModelClient::new();
    model
        .expect_generate()
        .times(1)
        .return_once(|_| Err(ModelClientError::transport("connection reset")));

    let service = RouteSuggestionService::new(Arc::new(model));
    let err = service.suggest(request()).await.expect_err("model down");

    match err {
        FlowError::Model { message } => assert!(message.contains("connection reset")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_model_output_is_a_model_error() {
    let mut model = MockModelClient::new();
    model
        .expect_generate()
        .times(1)
        .return_once(|_| Ok(json!({ "story": "once upon a time" })));

    let service = RouteSuggestionService::new(Arc::new(model));
    let err = service.suggest(request()).await.expect_err("bad payload");

    assert!(matches!(err, FlowError::Model { .. }));
}
