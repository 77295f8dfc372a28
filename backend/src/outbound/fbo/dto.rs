//! DTOs for decoding FBO directory responses.

use serde::Deserialize;

use crate::domain::ports::FboRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FboListDto {
    #[serde(default)]
    pub(super) fbos: Vec<FboDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FboDto {
    pub(super) name: String,
    pub(super) airport: String,
    pub(super) phone: Option<String>,
    pub(super) frequency: Option<String>,
    #[serde(default)]
    pub(super) fuel_types: Vec<String>,
    #[serde(default)]
    pub(super) hangar_space: bool,
}

impl FboListDto {
    pub(super) fn into_records(self) -> Vec<FboRecord> {
        self.fbos.into_iter().map(FboDto::into_record).collect()
    }
}

impl FboDto {
    fn into_record(self) -> FboRecord {
        FboRecord {
            name: self.name,
            airport_code: self.airport,
            phone: self.phone,
            frequency: self.frequency,
            fuel_types: self.fuel_types,
            has_hangar_space: self.hangar_space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_provider_fields_onto_domain_records() {
        let dto: FboListDto = serde_json::from_value(json!({
            "fbos": [{
                "name": "Meridian",
                "airport": "TEB",
                "phone": "+1 201 288 5040",
                "frequency": "122.95",
                "fuelTypes": ["Jet A"],
                "hangarSpace": true,
            }]
        }))
        .expect("decodes");

        let records = dto.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].airport_code, "TEB");
        assert!(records[0].has_hangar_space);
    }

    #[test]
    fn missing_list_defaults_to_empty() {
        let dto: FboListDto = serde_json::from_value(json!({})).expect("decodes");
        assert!(dto.into_records().is_empty());
    }
}
