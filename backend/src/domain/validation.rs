//! Field-level validation primitives shared by every save-input shape.
//!
//! Save inputs validate declaratively: each check records a violation instead
//! of returning at the first failure, so callers receive every offending
//! field and the rule it broke in one report.

use std::fmt;

use serde::Serialize;

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    /// Field path in the input shape (camelCase, matching the wire form).
    pub field: String,
    /// Human-readable description of the rule that was broken.
    pub rule: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// Complete validation report for a save input.
///
/// Never constructed empty: [`Violations::finish`] returns `Ok(())` when no
/// rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Report with exactly one violation.
    pub fn single(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                rule: rule.into(),
            }],
        }
    }

    /// Append another report's violations to this one.
    pub fn merge(&mut self, other: Self) {
        self.violations.extend(other.violations);
    }

    /// Every violation, in input-declaration order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether the report names the given field.
    pub fn names_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulator used by `validate()` implementations.
#[derive(Debug, Default)]
pub struct Violations {
    violations: Vec<FieldViolation>,
}

impl Violations {
    /// Start an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a broken rule on a field.
    pub fn push(&mut self, field: impl Into<String>, rule: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            rule: rule.into(),
        });
    }

    /// Require a string field to contain non-whitespace content.
    pub fn require_non_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must not be empty");
        }
    }

    /// Require an optional string, when present, to stay within a length bound.
    pub fn check_max_len(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.push(field, format!("must be at most {max} characters"));
            }
        }
    }

    /// Require an optional email address to have a plausible `local@domain`
    /// shape. Full RFC 5322 parsing is deliberately out of scope.
    pub fn check_email(&mut self, field: &str, value: Option<&str>) {
        let Some(value) = value else { return };
        let mut parts = value.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            self.push(field, "must be a valid email address");
        }
    }

    /// Require an optional numeric value to be non-negative.
    pub fn check_non_negative(&mut self, field: &str, value: Option<f64>) {
        if let Some(value) = value {
            if value < 0.0 {
                self.push(field, "must not be negative");
            }
        }
    }

    /// Require a numeric value to be strictly positive.
    pub fn check_positive(&mut self, field: &str, value: f64) {
        if value <= 0.0 {
            self.push(field, "must be greater than zero");
        }
    }

    /// Require an optional calendar date in `YYYY-MM-DD` form.
    pub fn check_date(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value {
            if chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                self.push(field, "must be a date in YYYY-MM-DD form");
            }
        }
    }

    /// Close the report: `Ok(())` when clean, the full list otherwise.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                violations: self.violations,
            })
        }
    }
}
