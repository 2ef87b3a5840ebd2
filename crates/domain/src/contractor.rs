//! Contractor submission draft
//!
//! The draft lives only in the form's memory. Validation is recomputed from
//! the current values on every call; nothing about a previous verdict is kept.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity_type::EntityType;
use crate::identification::check_identification_number;
use crate::photo::PhotoRef;
use crate::validation::{Field, FieldError, ValidationReport};

/// Why a draft cannot be turned into a submission
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// At least one field failed validation
    #[error("Form has invalid fields: {0}")]
    Invalid(ValidationReport),

    /// Every field is valid but no photo was selected
    #[error("Please select an image.")]
    MissingImage,
}

/// In-progress contractor data, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractorDraft {
    pub first_name: String,
    pub last_name: String,
    pub entity_type: EntityType,
    pub identification_number: String,
    pub photo: Option<PhotoRef>,
}

impl ContractorDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current verdict for one field.
    ///
    /// `Photo` is not validated inline; a missing photo is reported by
    /// [`ContractorDraft::to_submission`].
    pub fn validate_field(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FirstName => require_text(&self.first_name),
            Field::LastName => require_text(&self.last_name),
            // Always set: the dropdown has no empty option.
            Field::EntityType => None,
            Field::IdentificationNumber => {
                check_identification_number(self.entity_type, &self.identification_number).err()
            }
            Field::Photo => None,
        }
    }

    /// Verdicts for every inline field
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        for field in Field::inline() {
            if let Some(error) = self.validate_field(*field) {
                report.insert(*field, error);
            }
        }
        report
    }

    /// Build the request payload.
    ///
    /// Field errors take precedence over the missing photo, so the user fixes
    /// inline errors before being asked for an image.
    pub fn to_submission(&self) -> Result<ContractorSubmission, SubmitBlocked> {
        let report = self.validate();
        if !report.is_valid() {
            return Err(SubmitBlocked::Invalid(report));
        }
        let image = self.photo.clone().ok_or(SubmitBlocked::MissingImage)?;

        Ok(ContractorSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            entity_type: self.entity_type,
            identification_number: self.identification_number.clone(),
            image,
        })
    }
}

fn require_text(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else {
        None
    }
}

/// JSON body of the save request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorSubmission {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub identification_number: String,
    pub image: PhotoRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identification::IdentificationKind;

    fn photo() -> PhotoRef {
        PhotoRef::from_picked("file:///tmp/contractor.jpg").unwrap()
    }

    fn valid_person() -> ContractorDraft {
        ContractorDraft {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            entity_type: EntityType::Person,
            identification_number: "44051401359".to_string(),
            photo: Some(photo()),
        }
    }

    #[test]
    fn empty_draft_reports_every_text_field() {
        let report = ContractorDraft::new().validate();

        assert_eq!(report.len(), 3);
        assert_eq!(report.get(Field::FirstName), Some(FieldError::Required));
        assert_eq!(report.get(Field::LastName), Some(FieldError::Required));
        assert_eq!(
            report.get(Field::IdentificationNumber),
            Some(FieldError::Required)
        );
        assert_eq!(report.get(Field::EntityType), None);
    }

    #[test]
    fn whitespace_names_count_as_missing() {
        let draft = ContractorDraft {
            first_name: "   ".to_string(),
            ..valid_person()
        };
        assert_eq!(
            draft.validate_field(Field::FirstName),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn pattern_follows_current_entity_type() {
        let mut draft = valid_person();
        draft.identification_number = "12345678901".to_string();
        assert_eq!(draft.validate_field(Field::IdentificationNumber), None);

        draft.entity_type = EntityType::Company;
        assert_eq!(
            draft.validate_field(Field::IdentificationNumber),
            Some(FieldError::InvalidFormat(IdentificationKind::Nip))
        );

        draft.identification_number = "1234567890".to_string();
        assert_eq!(draft.validate_field(Field::IdentificationNumber), None);
    }

    #[test]
    fn invalid_fields_block_before_missing_photo() {
        let draft = ContractorDraft {
            last_name: String::new(),
            photo: None,
            ..valid_person()
        };
        match draft.to_submission() {
            Err(SubmitBlocked::Invalid(report)) => {
                assert_eq!(report.get(Field::LastName), Some(FieldError::Required));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn missing_photo_blocks_valid_fields() {
        let draft = ContractorDraft {
            photo: None,
            ..valid_person()
        };
        assert_eq!(draft.to_submission(), Err(SubmitBlocked::MissingImage));
        assert_eq!(
            SubmitBlocked::MissingImage.to_string(),
            "Please select an image."
        );
    }

    #[test]
    fn submission_trims_names() {
        let draft = ContractorDraft {
            first_name: "  Jan ".to_string(),
            last_name: "Kowalski\t".to_string(),
            ..valid_person()
        };
        let submission = draft.to_submission().unwrap();
        assert_eq!(submission.first_name, "Jan");
        assert_eq!(submission.last_name, "Kowalski");
    }

    #[test]
    fn submission_serializes_with_backend_keys() {
        let submission = ContractorDraft {
            entity_type: EntityType::Company,
            identification_number: "5260250274".to_string(),
            ..valid_person()
        }
        .to_submission()
        .unwrap();

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Jan",
                "lastName": "Kowalski",
                "type": "firma",
                "identificationNumber": "5260250274",
                "image": "file:///tmp/contractor.jpg",
            })
        );
    }
}
