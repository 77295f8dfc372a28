//! Sample catalogue loading and the built-in demonstration set.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{CatalogError, SUPPORTED_VERSION};

/// Built-in demonstration catalogue: a small charter fleet with the
/// supporting records the flows read.
const BUILTIN_CATALOG: &str = r#"{
    "version": 1,
    "collections": {
        "fleet-aircraft": [
            {
                "tailNumber": "N525CJ",
                "model": "Citation CJ3",
                "manufacturer": "Cessna",
                "year": 2019,
                "serialNumber": "525B-0472",
                "baseAirport": "TEB",
                "airframeHours": 2140.5,
                "engineCycles": 1810
            },
            {
                "tailNumber": "N804QS",
                "model": "Phenom 300",
                "manufacturer": "Embraer",
                "year": 2021,
                "serialNumber": "50500612",
                "baseAirport": "KPBI",
                "airframeHours": 980.0,
                "engineCycles": 845
            }
        ],
        "customers": [
            {
                "name": "Acme Air",
                "customerType": "Charter",
                "email": "dispatch@acmeair.example",
                "phone": "+1 203 555 0114"
            },
            {
                "name": "Blue Harbor Holdings",
                "customerType": "Owner",
                "notes": "Owner of N804QS, prefers morning departures."
            }
        ],
        "maintenance-tasks": [
            {
                "aircraftId": "sample-n525cj",
                "description": "Phase 1 inspection",
                "status": "Open",
                "dueAtHours": 2200.0,
                "reference": "AMM 5-10-01"
            },
            {
                "aircraftId": "sample-n804qs",
                "description": "Brake wear check",
                "status": "InProgress",
                "dueDate": "2026-09-15"
            }
        ],
        "aircraft-performance": [
            {
                "aircraftType": "Citation CJ3",
                "cruiseSpeedKts": 416.0,
                "fuelBurnGph": 150.0,
                "rangeNm": 2040.0,
                "serviceCeilingFt": 45000
            },
            {
                "aircraftType": "Phenom 300",
                "cruiseSpeedKts": 453.0,
                "fuelBurnGph": 170.0,
                "rangeNm": 2010.0,
                "serviceCeilingFt": 45000
            }
        ]
    }
}"#;

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: u32,
    #[serde(default)]
    collections: BTreeMap<String, Vec<Value>>,
}

/// Deterministic set of sample records, grouped by collection name.
///
/// Records carry the wire shape of save inputs: no identifiers and no
/// timestamps, those are assigned by whatever store the records are
/// written into.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCatalog {
    collections: BTreeMap<String, Vec<Map<String, Value>>>,
}

impl SampleCatalog {
    /// Load a catalogue from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        if document.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                version: document.version,
            });
        }

        let mut collections = BTreeMap::new();
        for (name, records) in document.collections {
            let mut objects = Vec::with_capacity(records.len());
            for (index, record) in records.into_iter().enumerate() {
                match record {
                    Value::Object(fields) => objects.push(fields),
                    _ => {
                        return Err(CatalogError::MalformedRecord {
                            collection: name,
                            index,
                        });
                    }
                }
            }
            collections.insert(name, objects);
        }
        Ok(Self { collections })
    }

    /// The built-in demonstration catalogue.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalogue document is malformed; the crate's
    /// tests rule that out.
    #[must_use]
    pub fn builtin() -> Self {
        #[expect(clippy::expect_used, reason = "embedded document is validated by tests")]
        Self::from_json(BUILTIN_CATALOG).expect("built-in catalogue is well formed")
    }

    /// Iterate collections in name order.
    #[must_use]
    pub fn collections(&self) -> impl Iterator<Item = (&str, &[Map<String, Value>])> {
        self.collections
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Records in one collection, empty when the collection is absent.
    #[must_use]
    pub fn records(&self, collection: &str) -> &[Map<String, Value>] {
        self.collections
            .get(collection)
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of records across every collection.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn builtin_catalogue_loads_and_is_nonempty() {
        let catalog = SampleCatalog::builtin();
        assert!(catalog.record_count() > 0);
        assert_eq!(catalog.records("fleet-aircraft").len(), 2);
        assert_eq!(catalog.records("customers").len(), 2);
        assert_eq!(catalog.records("aircraft-performance").len(), 2);
    }

    #[test]
    fn builtin_records_carry_no_server_fields() {
        let catalog = SampleCatalog::builtin();
        for (_, records) in catalog.collections() {
            for record in records {
                assert!(!record.contains_key("id"));
                assert!(!record.contains_key("createdAt"));
                assert!(!record.contains_key("updatedAt"));
            }
        }
    }

    #[test]
    fn unknown_collection_yields_empty_slice() {
        let catalog = SampleCatalog::builtin();
        assert!(catalog.records("no-such-collection").is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn rejects_unsupported_versions(#[case] version: u32) {
        let doc = json!({"version": version, "collections": {}}).to_string();
        let err = SampleCatalog::from_json(&doc).expect_err("version rejected");
        assert!(matches!(
            err,
            CatalogError::UnsupportedVersion { version: v } if v == version
        ));
    }

    #[test]
    fn rejects_non_object_records() {
        let doc = json!({
            "version": 1,
            "collections": {"customers": ["not an object"]}
        })
        .to_string();
        let err = SampleCatalog::from_json(&doc).expect_err("record rejected");
        assert!(matches!(
            err,
            CatalogError::MalformedRecord { ref collection, index: 0 }
                if collection == "customers"
        ));
    }
}
