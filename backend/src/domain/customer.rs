//! Customer data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Relationship category for a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerType {
    Charter,
    Owner,
    Broker,
    Cargo,
    Internal,
}

/// Error returned when parsing a customer type from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCustomerTypeError;

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Charter => f.write_str("Charter"),
            Self::Owner => f.write_str("Owner"),
            Self::Broker => f.write_str("Broker"),
            Self::Cargo => f.write_str("Cargo"),
            Self::Internal => f.write_str("Internal"),
        }
    }
}

impl fmt::Display for ParseCustomerTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid customer type")
    }
}

impl std::error::Error for ParseCustomerTypeError {}

impl FromStr for CustomerType {
    type Err = ParseCustomerTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Charter" => Ok(Self::Charter),
            "Owner" => Ok(Self::Owner),
            "Broker" => Ok(Self::Broker),
            "Cargo" => Ok(Self::Cargo),
            "Internal" => Ok(Self::Internal),
            _ => Err(ParseCustomerTypeError),
        }
    }
}

/// Canonical customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name, required.
    pub name: String,
    /// Relationship category.
    pub customer_type: CustomerType,
    /// Primary contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Primary contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form operational notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the account is active. New customers default to active.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

impl EntityRecord for Customer {
    const COLLECTION: &'static str = "customers";
    const KIND: &'static str = "customer";
    type SaveInput = SaveCustomerInput;
}

/// Input accepted by the customer save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCustomerInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, required.
    pub name: String,
    /// Relationship category.
    pub customer_type: CustomerType,
    /// Primary contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Primary contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form operational notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Active flag; left unset on create, the record defaults to active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Maximum accepted phone number length.
pub const PHONE_MAX: usize = 32;

impl SaveInput for SaveCustomerInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("name", &self.name);
        violations.check_email("email", self.email.as_deref());
        violations.check_max_len("phone", self.phone.as_deref(), PHONE_MAX);
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        let mut fields = input_fields(self, Customer::KIND)?;
        if self.id.is_none() {
            fields
                .entry("isActive".to_owned())
                .or_insert(Value::Bool(true));
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::decode_save_input;
    use rstest::rstest;
    use serde_json::json;

    fn valid_input() -> SaveCustomerInput {
        SaveCustomerInput {
            id: None,
            name: "Acme Air".to_owned(),
            customer_type: CustomerType::Charter,
            email: Some("ops@acme.example".to_owned()),
            phone: None,
            notes: None,
            is_active: None,
        }
    }

    #[rstest]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[rstest]
    fn blank_name_and_bad_email_are_both_reported() {
        let mut input = valid_input();
        input.name = "  ".to_owned();
        input.email = Some("not-an-email".to_owned());

        let errors = input.validate().expect_err("two violations");
        assert!(errors.names_field("name"));
        assert!(errors.names_field("email"));
        assert_eq!(errors.violations().len(), 2);
    }

    #[rstest]
    fn create_fields_default_is_active_true() {
        let fields = valid_input().document_fields().expect("serialises");
        assert_eq!(fields.get("isActive"), Some(&Value::Bool(true)));
    }

    #[rstest]
    fn update_without_is_active_leaves_the_field_alone() {
        let mut input = valid_input();
        input.id = Some("c-1".to_owned());
        let fields = input.document_fields().expect("serialises");
        assert!(!fields.contains_key("isActive"));
        assert!(!fields.contains_key("id"));
    }

    #[rstest]
    fn customer_type_round_trips_through_strings() {
        for kind in [
            CustomerType::Charter,
            CustomerType::Owner,
            CustomerType::Broker,
            CustomerType::Cargo,
            CustomerType::Internal,
        ] {
            let parsed: CustomerType = kind.to_string().parse().expect("round-trip");
            assert_eq!(parsed, kind);
        }
        assert!("VIP".parse::<CustomerType>().is_err());
    }

    #[rstest]
    fn unknown_customer_type_fails_validation_naming_the_field() {
        let errors = decode_save_input::<SaveCustomerInput>(json!({
            "name": "Acme Air",
            "customerType": "VIP",
        }))
        .expect_err("closed enum");
        assert!(errors.names_field("customerType"));
        assert!(errors.to_string().contains("unknown variant"));
    }
}
