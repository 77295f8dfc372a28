//! Tests for the persistence flows.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::*;
use crate::domain::customer::{CustomerType, SaveCustomerInput};
use crate::domain::fleet_aircraft::SaveFleetAircraftInput;
use crate::domain::mel_item::{MelCategory, MelStatus};
use crate::domain::ports::StoredDocument;
use crate::outbound::persistence::InMemoryDocumentStore;

fn customer_input(name: &str) -> SaveCustomerInput {
    SaveCustomerInput {
        id: None,
        name: name.to_owned(),
        customer_type: CustomerType::Charter,
        email: None,
        phone: None,
        notes: None,
        is_active: None,
    }
}

fn aircraft_input(tail: &str) -> SaveFleetAircraftInput {
    SaveFleetAircraftInput {
        id: None,
        tail_number: tail.to_owned(),
        model: "Citation CJ3".to_owned(),
        manufacturer: None,
        year: None,
        serial_number: None,
        base_airport: None,
        airframe_hours: None,
        engine_cycles: None,
    }
}

fn mel_input(aircraft_id: &str, tail: &str) -> SaveMelItemInput {
    SaveMelItemInput {
        id: None,
        aircraft_id: aircraft_id.to_owned(),
        aircraft_tail_number: tail.to_owned(),
        description: "Landing light inoperative".to_owned(),
        category: MelCategory::C,
        status: MelStatus::Open,
        reference: None,
        opened_date: None,
        due_back_date: None,
    }
}

#[tokio::test]
async fn saved_customer_round_trips_through_fetch_one() {
    let flows = CustomerFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let saved = flows.save(customer_input("Acme Air")).await.expect("save");
    let fetched = flows
        .fetch_one(&saved.id)
        .await
        .expect("fetch")
        .expect("present");

    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn create_generates_fresh_ids_and_defaults() {
    let flows = CustomerFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let first = flows.save(customer_input("Acme Air")).await.expect("save");
    let second = flows.save(customer_input("Borealis Jets")).await.expect("save");

    assert_ne!(first.id, second.id);
    assert!(first.is_active, "new customers default to active");
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn update_preserves_absent_fields_and_created_at() {
    let flows = CustomerFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let mut create = customer_input("Acme Air");
    create.notes = Some("prefers morning departures".to_owned());
    create.is_active = Some(false);
    let created = flows.save(create).await.expect("create");

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let mut update = customer_input("Acme Air Charter");
    update.id = Some(created.id.clone());
    let updated = flows.save(update).await.expect("update");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Acme Air Charter");
    assert_eq!(
        updated.notes.as_deref(),
        Some("prefers morning departures"),
        "fields absent from the input survive the update"
    );
    assert!(!updated.is_active, "update input left the flag unset");
    assert_eq!(updated.created_at, created.created_at);
    assert_ne!(updated.updated_at, created.updated_at);
}

#[tokio::test]
async fn delete_missing_id_reports_success() {
    let flows = CustomerFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let outcome = flows.delete("never-existed").await.expect("delete");
    assert!(outcome.success);
    assert_eq!(outcome.id, "never-existed");
}

#[tokio::test]
async fn fetch_all_on_empty_collection_is_empty() {
    let flows = RoleFlows::new(Arc::new(InMemoryDocumentStore::new()));
    let roles = flows.fetch_all().await.expect("fetch_all");
    assert!(roles.is_empty());
}

#[tokio::test]
async fn fetch_one_absence_is_none_not_an_error() {
    let flows = CustomerFlows::new(Arc::new(InMemoryDocumentStore::new()));
    let missing = flows.fetch_one("nope").await.expect("fetch_one");
    assert!(missing.is_none());
}

#[tokio::test]
async fn invalid_input_fails_before_reaching_the_store() {
    let flows = CustomerFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let mut input = customer_input("  ");
    input.email = Some("nope".to_owned());
    let err = flows.save(input).await.expect_err("validation");

    match err {
        FlowError::Validation(errors) => {
            assert!(errors.names_field("name"));
            assert!(errors.names_field("email"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let all = flows.fetch_all().await.expect("fetch_all");
    assert!(all.is_empty(), "nothing was written");
}

#[tokio::test]
async fn mel_save_refreshes_denormalised_tail_number() {
    let store = Arc::new(InMemoryDocumentStore::new());
    let aircraft_flows = FleetAircraftFlows::new(Arc::clone(&store));
    let mel_flows = MelItemFlows::new(Arc::clone(&store));

    let aircraft = aircraft_flows
        .save(aircraft_input("N123AB"))
        .await
        .expect("save aircraft");

    let item = mel_flows
        .save_for_aircraft(mel_input(&aircraft.id, "STALE"))
        .await
        .expect("save MEL item");

    assert_eq!(item.aircraft_tail_number, "N123AB");
}

#[tokio::test]
async fn mel_save_keeps_supplied_tail_when_aircraft_is_missing() {
    let mel_flows = MelItemFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let item = mel_flows
        .save_for_aircraft(mel_input("ghost-aircraft", "N999ZZ"))
        .await
        .expect("save MEL item");

    assert_eq!(item.aircraft_tail_number, "N999ZZ");
}

#[tokio::test]
async fn notification_record_helper_defaults_to_unread() {
    let flows = NotificationFlows::new(Arc::new(InMemoryDocumentStore::new()));

    let notification = flows
        .record(
            "MEL item due back",
            "N123AB landing light deferral expires tomorrow",
            NotificationType::Warning,
            Some("/mel/items/m-1".to_owned()),
        )
        .await
        .expect("record");

    assert!(!notification.is_read);
    assert_eq!(notification.notification_type, NotificationType::Warning);
}

/// Store stub that refuses every operation, for failure-path coverage.
struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn fetch(
        &self,
        _collection: &str,
        _id: &str,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        Err(DocumentStoreError::connection("store offline"))
    }

    async fn list(&self, _collection: &str) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        Err(DocumentStoreError::connection("store offline"))
    }

    async fn upsert(
        &self,
        _collection: &str,
        _id: Option<&str>,
        _fields: Map<String, Value>,
    ) -> Result<StoredDocument, DocumentStoreError> {
        Err(DocumentStoreError::write("store offline"))
    }

    async fn remove(&self, _collection: &str, _id: &str) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::connection("store offline"))
    }
}

#[tokio::test]
async fn store_failure_wraps_into_a_persistence_error() {
    let flows = CustomerFlows::new(Arc::new(UnreachableStore));

    let err = flows
        .save(customer_input("Acme Air"))
        .await
        .expect_err("store offline");

    match err {
        FlowError::Persistence { entity, id, message } => {
            assert_eq!(entity, "customer");
            assert!(id.is_none());
            assert!(message.contains("store offline"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
