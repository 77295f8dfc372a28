//! Company document data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Category of a company document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Policy,
    Manual,
    Certificate,
    Insurance,
    Contract,
    Other,
}

/// Error returned when parsing a document type from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDocumentTypeError;

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Policy => "Policy",
            Self::Manual => "Manual",
            Self::Certificate => "Certificate",
            Self::Insurance => "Insurance",
            Self::Contract => "Contract",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ParseDocumentTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid document type")
    }
}

impl std::error::Error for ParseDocumentTypeError {}

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Policy" => Ok(Self::Policy),
            "Manual" => Ok(Self::Manual),
            "Certificate" => Ok(Self::Certificate),
            "Insurance" => Ok(Self::Insurance),
            "Contract" => Ok(Self::Contract),
            "Other" => Ok(Self::Other),
            _ => Err(ParseDocumentTypeError),
        }
    }
}

/// Canonical company document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDocument {
    /// Server-assigned identifier.
    pub id: String,
    /// Document title, required.
    pub title: String,
    /// Document category.
    pub document_type: DocumentType,
    /// What the document covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the file lives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Revision label (for example `Rev 4`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Date the revision took effect, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for CompanyDocument {
    const COLLECTION: &'static str = "company-documents";
    const KIND: &'static str = "company document";
    type SaveInput = SaveCompanyDocumentInput;
}

/// Input accepted by the company document save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCompanyDocumentInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Document title, required.
    pub title: String,
    /// Document category.
    pub document_type: DocumentType,
    /// What the document covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the file lives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Revision label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Date the revision took effect, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
}

impl SaveInput for SaveCompanyDocumentInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("title", &self.title);
        violations.check_date("effectiveDate", self.effective_date.as_deref());
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        input_fields(self, CompanyDocument::KIND)
    }
}
