//! Demonstration entry-point: seeds the built-in sample catalogue into an
//! in-memory store and runs a few flows against it.
//!
//! Run with `cargo run --bin flightops-demo --features sample-data`.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use flightops_backend::domain::{
    CustomerFlows, FleetAircraftFlows, FlowError, MelCategory, MelItemFlows, MelStatus,
    SaveMelItemInput,
};
use flightops_backend::outbound::persistence::InMemoryDocumentStore;
use flightops_backend::sample;

#[tokio::main]
async fn main() -> Result<(), FlowError> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let store = Arc::new(InMemoryDocumentStore::new());
    let seeded = sample::seed_builtin(store.as_ref()).await?;
    info!(seeded, "sample catalogue written");

    let fleet = FleetAircraftFlows::new(Arc::clone(&store));
    let customers = CustomerFlows::new(Arc::clone(&store));
    let mel_items = MelItemFlows::new(Arc::clone(&store));

    for aircraft in fleet.fetch_all().await? {
        info!(
            tail = %aircraft.tail_number,
            model = %aircraft.model,
            "fleet aircraft"
        );
    }

    for customer in customers.fetch_all().await? {
        info!(name = %customer.name, active = customer.is_active, "customer");
    }

    // Attach a deferred MEL item to the first aircraft in the fleet.
    if let Some(aircraft) = fleet.fetch_all().await?.into_iter().next() {
        let item = mel_items
            .save_for_aircraft(SaveMelItemInput {
                id: None,
                aircraft_id: aircraft.id.clone(),
                aircraft_tail_number: String::new(),
                category: MelCategory::C,
                status: MelStatus::Open,
                description: "Right-hand landing light inoperative".to_owned(),
                reference: Some("MEL 33-42-1".to_owned()),
                opened_date: Some("2026-08-29".to_owned()),
                due_back_date: None,
            })
            .await?;
        info!(
            id = %item.id,
            tail = %item.aircraft_tail_number,
            "mel item recorded"
        );
    }

    Ok(())
}
