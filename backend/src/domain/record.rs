//! Glue between entity shapes and stored documents.
//!
//! Every persisted entity names its collection and implements a save-input
//! shape. The generic flow service in [`crate::domain::entity_flows`] works
//! purely through these traits, so adding an entity means declaring shapes
//! and rules, not rewriting persistence plumbing.

use chrono::SecondsFormat;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::FlowError;
use super::ports::StoredDocument;
use super::validation::ValidationErrors;

/// A persisted entity in its canonical, caller-facing shape.
///
/// Canonical shapes carry `id`, `createdAt`, and `updatedAt` as strings;
/// [`decode_document`] fills those from the stored document's native values.
pub trait EntityRecord: Serialize + DeserializeOwned + Send + Sync {
    /// Store collection holding this entity.
    const COLLECTION: &'static str;
    /// Human-readable kind used in errors and logs.
    const KIND: &'static str;
    /// Input shape accepted by the save flow.
    type SaveInput: SaveInput;
}

/// Save-input shape: canonical shape minus server-stamped fields, with an
/// optional identifier.
pub trait SaveInput: Serialize + Send + Sync {
    /// Identifier of the record to update, or `None` to create.
    fn id(&self) -> Option<&str>;

    /// Check every field rule, reporting all violations at once.
    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Produce the document fields to write.
    ///
    /// Implementations start from [`input_fields`] and, on create only,
    /// fill entity defaults (a new customer is active, a new notification
    /// unread). Update inputs must not inject defaults: absent fields stay
    /// untouched by the store's shallow merge.
    fn document_fields(&self) -> Result<Map<String, Value>, FlowError>;
}

/// Serialise a save input into document fields, stripping the identifier.
///
/// Optional fields skip serialisation when absent, so updates only carry the
/// fields the caller actually supplied.
pub fn input_fields<T: Serialize>(
    input: &T,
    kind: &'static str,
) -> Result<Map<String, Value>, FlowError> {
    let value = serde_json::to_value(input).map_err(|err| {
        FlowError::persistence(kind, None, format!("save input failed to serialise: {err}"))
    })?;
    let Value::Object(mut fields) = value else {
        return Err(FlowError::persistence(
            kind,
            None,
            "save input did not serialise to an object",
        ));
    };
    fields.remove("id");
    Ok(fields)
}

/// Decode a save input from its wire JSON form.
///
/// Serde failures surface as validation errors naming the offending field
/// path, so a value outside a closed enum reads like any other rule
/// violation instead of a bare decode error.
pub fn decode_save_input<T: DeserializeOwned>(value: Value) -> Result<T, ValidationErrors> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let field = if path == "." { "input".to_owned() } else { path };
        ValidationErrors::single(field, err.inner().to_string())
    })
}

/// Decode a stored document into the canonical shape, converting the store's
/// native timestamps to ISO-8601 strings.
pub fn decode_document<E: EntityRecord>(document: StoredDocument) -> Result<E, FlowError> {
    let StoredDocument {
        id,
        mut fields,
        created_at,
        updated_at,
    } = document;
    fields.insert("id".to_owned(), Value::String(id.clone()));
    fields.insert(
        "createdAt".to_owned(),
        Value::String(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    fields.insert(
        "updatedAt".to_owned(),
        Value::String(updated_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    serde_json::from_value(Value::Object(fields)).map_err(|err| {
        FlowError::persistence(
            E::KIND,
            Some(id),
            format!("stored document failed to decode: {err}"),
        )
    })
}
