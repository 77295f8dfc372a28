//! Role and permission data model.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::FlowError;
use super::record::{EntityRecord, SaveInput, input_fields};
use super::validation::{ValidationErrors, Violations};

/// Closed permission set grantable to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    ManageFleet,
    ManageMaintenance,
    ManageMel,
    ManageCustomers,
    ManageDocuments,
    ManageRoles,
    ManageNotifications,
    ViewReports,
}

/// Error returned when parsing a permission from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePermissionError;

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ManageFleet => "ManageFleet",
            Self::ManageMaintenance => "ManageMaintenance",
            Self::ManageMel => "ManageMel",
            Self::ManageCustomers => "ManageCustomers",
            Self::ManageDocuments => "ManageDocuments",
            Self::ManageRoles => "ManageRoles",
            Self::ManageNotifications => "ManageNotifications",
            Self::ViewReports => "ViewReports",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ParsePermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid permission")
    }
}

impl std::error::Error for ParsePermissionError {}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ManageFleet" => Ok(Self::ManageFleet),
            "ManageMaintenance" => Ok(Self::ManageMaintenance),
            "ManageMel" => Ok(Self::ManageMel),
            "ManageCustomers" => Ok(Self::ManageCustomers),
            "ManageDocuments" => Ok(Self::ManageDocuments),
            "ManageRoles" => Ok(Self::ManageRoles),
            "ManageNotifications" => Ok(Self::ManageNotifications),
            "ViewReports" => Ok(Self::ViewReports),
            _ => Err(ParsePermissionError),
        }
    }
}

/// Canonical role record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Server-assigned identifier.
    pub id: String,
    /// Role name, required.
    pub name: String,
    /// What the role is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Granted permissions, no duplicates.
    pub permissions: Vec<Permission>,
    /// Server-stamped creation instant, ISO-8601.
    pub created_at: String,
    /// Server-stamped last-update instant, ISO-8601.
    pub updated_at: String,
}

impl EntityRecord for Role {
    const COLLECTION: &'static str = "roles";
    const KIND: &'static str = "role";
    type SaveInput = SaveRoleInput;
}

/// Input accepted by the role save flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRoleInput {
    /// Identifier of the record to update; absent to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Role name, required.
    pub name: String,
    /// What the role is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Granted permissions, no duplicates.
    pub permissions: Vec<Permission>,
}

impl SaveInput for SaveRoleInput {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut violations = Violations::new();
        violations.require_non_empty("name", &self.name);
        let mut seen = HashSet::new();
        for permission in &self.permissions {
            if !seen.insert(*permission) {
                violations.push("permissions", format!("duplicate permission {permission}"));
            }
        }
        violations.finish()
    }

    fn document_fields(&self) -> Result<Map<String, Value>, FlowError> {
        input_fields(self, Role::KIND)
    }
}
