//! Field-level validation results

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::identification::IdentificationKind;

/// Message shown for every missing required value
pub const FIELD_REQUIRED_MESSAGE: &str = "This field is required.";

/// Form fields of the contractor draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    EntityType,
    IdentificationNumber,
    Photo,
}

impl Field {
    /// Fields validated inline, in display order
    pub fn inline() -> &'static [Field] {
        &[
            Field::FirstName,
            Field::LastName,
            Field::EntityType,
            Field::IdentificationNumber,
        ]
    }

    /// JSON key used in the submission body
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::EntityType => "type",
            Field::IdentificationNumber => "identificationNumber",
            Field::Photo => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Why a single field is invalid. `Display` is the user-facing message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,

    #[error("Invalid {0} format.")]
    InvalidFormat(IdentificationKind),
}

/// Errors for every invalid field, keyed in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Keep only the errors for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.errors.retain(|field, _| keep(*field));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(FieldError::Required.to_string(), FIELD_REQUIRED_MESSAGE);
        assert_eq!(
            FieldError::InvalidFormat(IdentificationKind::Pesel).to_string(),
            "Invalid PESEL format."
        );
        assert_eq!(
            FieldError::InvalidFormat(IdentificationKind::Nip).to_string(),
            "Invalid NIP format."
        );
    }

    #[test]
    fn report_keeps_display_order() {
        let mut report = ValidationReport::new();
        report.insert(Field::IdentificationNumber, FieldError::Required);
        report.insert(Field::FirstName, FieldError::Required);

        let fields: Vec<Field> = report.fields().collect();
        assert_eq!(fields, vec![Field::FirstName, Field::IdentificationNumber]);
        assert_eq!(
            report.to_string(),
            "firstName: This field is required.; identificationNumber: This field is required."
        );
    }

    #[test]
    fn retain_filters_fields() {
        let mut report = ValidationReport::new();
        report.insert(Field::FirstName, FieldError::Required);
        report.insert(Field::LastName, FieldError::Required);
        report.retain(|field| field == Field::LastName);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get(Field::LastName), Some(FieldError::Required));
        assert_eq!(report.get(Field::FirstName), None);
    }
}
