//! Persistence flows: one save/fetch/delete set per entity.
//!
//! [`EntityFlows`] is generic over the entity and the injected store handle,
//! so every entity shares one set of semantics: validate, write through the
//! store boundary, convert timestamps on the way out. Identifier generation
//! and timestamp stamping live behind [`DocumentStore`]; flows never stamp
//! in application memory.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};

use super::customer::Customer;
use super::company_document::CompanyDocument;
use super::error::FlowError;
use super::fleet_aircraft::FleetAircraft;
use super::maintenance_task::MaintenanceTask;
use super::mel_item::{MelItem, SaveMelItemInput};
use super::notification::{Notification, NotificationType, SaveNotificationInput};
use super::performance::AircraftPerformanceData;
use super::ports::{DocumentStore, DocumentStoreError};
use super::record::{EntityRecord, SaveInput, decode_document};
use super::role::Role;

/// Result of a delete flow.
///
/// Deleting an identifier that never existed still succeeds; delete is
/// idempotent by contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    /// Always `true` on a returned outcome; failures raise [`FlowError`].
    pub success: bool,
    /// Identifier the delete targeted.
    pub id: String,
}

/// Save, fetch, and delete flows for one entity type.
pub struct EntityFlows<S, E> {
    store: Arc<S>,
    _entity: PhantomData<fn() -> E>,
}

impl<S, E> Clone for EntityFlows<S, E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<S, E> EntityFlows<S, E> {
    /// Create flows over an injected store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

impl<S, E> EntityFlows<S, E>
where
    S: DocumentStore,
    E: EntityRecord,
{
    fn store_error(id: Option<&str>, err: &DocumentStoreError) -> FlowError {
        error!(
            entity = E::KIND,
            id = id.unwrap_or("<none>"),
            error = %err,
            "document store operation failed"
        );
        FlowError::persistence(E::KIND, id.map(str::to_owned), err.to_string())
    }

    /// Validate and persist one record.
    ///
    /// Without an identifier the store generates one and stamps both
    /// timestamps; with an identifier the write shallow-merges over the
    /// stored document, preserving `created_at` and any field absent from
    /// the input. Returns the persisted record with ISO-8601 timestamps.
    pub async fn save(&self, input: E::SaveInput) -> Result<E, FlowError> {
        input.validate()?;
        let fields = input.document_fields()?;
        let document = self
            .store
            .upsert(E::COLLECTION, input.id(), fields)
            .await
            .map_err(|err| Self::store_error(input.id(), &err))?;
        debug!(entity = E::KIND, id = %document.id, "record saved");
        decode_document(document)
    }

    /// Fetch every record in the entity's collection.
    ///
    /// An empty collection is an empty vector, never an error.
    pub async fn fetch_all(&self) -> Result<Vec<E>, FlowError> {
        let documents = self
            .store
            .list(E::COLLECTION)
            .await
            .map_err(|err| Self::store_error(None, &err))?;
        documents.into_iter().map(decode_document).collect()
    }

    /// Fetch one record by identifier. Absence is `None`, not an error.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<E>, FlowError> {
        let document = self
            .store
            .fetch(E::COLLECTION, id)
            .await
            .map_err(|err| Self::store_error(Some(id), &err))?;
        document.map(decode_document).transpose()
    }

    /// Delete one record by identifier. Deleting an absent identifier
    /// succeeds.
    pub async fn delete(&self, id: &str) -> Result<DeleteOutcome, FlowError> {
        self.store
            .remove(E::COLLECTION, id)
            .await
            .map_err(|err| Self::store_error(Some(id), &err))?;
        debug!(entity = E::KIND, id, "record deleted");
        Ok(DeleteOutcome {
            success: true,
            id: id.to_owned(),
        })
    }
}

/// Customer persistence flows.
pub type CustomerFlows<S> = EntityFlows<S, Customer>;
/// Fleet aircraft persistence flows.
pub type FleetAircraftFlows<S> = EntityFlows<S, FleetAircraft>;
/// Maintenance task persistence flows.
pub type MaintenanceTaskFlows<S> = EntityFlows<S, MaintenanceTask>;
/// MEL item persistence flows.
pub type MelItemFlows<S> = EntityFlows<S, MelItem>;
/// Role persistence flows.
pub type RoleFlows<S> = EntityFlows<S, Role>;
/// Company document persistence flows.
pub type CompanyDocumentFlows<S> = EntityFlows<S, CompanyDocument>;
/// Notification persistence flows.
pub type NotificationFlows<S> = EntityFlows<S, Notification>;
/// Aircraft performance persistence flows.
pub type AircraftPerformanceFlows<S> = EntityFlows<S, AircraftPerformanceData>;

impl<S: DocumentStore> MelItemFlows<S> {
    /// Save a MEL item, refreshing the denormalised tail number from the
    /// referenced aircraft when it resolves.
    ///
    /// The caller-supplied tail number stands when the aircraft is missing;
    /// no referential integrity is enforced across collections.
    pub async fn save_for_aircraft(&self, input: SaveMelItemInput) -> Result<MelItem, FlowError> {
        let mut input = input;
        let aircraft = self
            .store
            .fetch(FleetAircraft::COLLECTION, &input.aircraft_id)
            .await
            .map_err(|err| Self::store_error(Some(&input.aircraft_id), &err))?;
        if let Some(document) = aircraft {
            let aircraft: FleetAircraft = decode_document(document)?;
            input.aircraft_tail_number = aircraft.tail_number;
        }
        self.save(input).await
    }
}

impl<S: DocumentStore> NotificationFlows<S> {
    /// Build and persist a notification in one call, defaulting to unread.
    pub async fn record(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
        link: Option<String>,
    ) -> Result<Notification, FlowError> {
        self.save(SaveNotificationInput {
            id: None,
            title: title.into(),
            message: message.into(),
            notification_type,
            is_read: None,
            link,
        })
        .await
    }
}

#[cfg(test)]
#[path = "entity_flows_tests.rs"]
mod tests;
