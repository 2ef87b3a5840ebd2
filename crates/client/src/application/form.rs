//! Contractor form state
//!
//! Holds the draft plus which fields have been interacted with. Errors are
//! never stored: every read validates the current values, so a change of
//! entity type is reflected the next time the identification field renders.
//!
//! A draft handed to the network is remembered until the request settles.
//! While it is pending no second submit starts, and a successful send only
//! clears the form if nothing was edited in the meantime.

use std::collections::BTreeSet;

use contractor_domain::{
    identification_kind_for, ContractorDraft, ContractorSubmission, EntityType, Field, FieldError,
    PhotoRef, SubmitBlocked, ValidationReport,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractorForm {
    draft: ContractorDraft,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    in_flight: Option<ContractorDraft>,
}

impl ContractorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContractorDraft {
        &self.draft
    }

    pub fn entity_type(&self) -> EntityType {
        self.draft.entity_type
    }

    pub fn photo(&self) -> Option<&PhotoRef> {
        self.draft.photo.as_ref()
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.draft.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.draft.last_name = value.into();
    }

    pub fn set_identification_number(&mut self, value: impl Into<String>) {
        self.draft.identification_number = value.into();
    }

    /// Field lost focus: its verdict becomes visible from now on
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Switch between person and company.
    ///
    /// A number that was already typed is checked against the new format
    /// right away.
    pub fn select_entity_type(&mut self, entity_type: EntityType) {
        self.draft.entity_type = entity_type;
        self.touched.insert(Field::EntityType);
        if !self.draft.identification_number.is_empty() {
            self.touched.insert(Field::IdentificationNumber);
        }
    }

    /// Store an accepted photo, replacing any previous one
    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.draft.photo = Some(photo);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Error to render under `field`, if it is invalid and has been shown to the user
    pub fn error(&self, field: Field) -> Option<FieldError> {
        if !self.is_visible(field) {
            return None;
        }
        self.draft.validate_field(field)
    }

    pub fn visible_errors(&self) -> ValidationReport {
        let mut report = self.draft.validate();
        report.retain(|field| self.is_visible(field));
        report
    }

    /// Placeholder for the identification input ("PESEL" or "NIP")
    pub fn identification_placeholder(&self) -> &'static str {
        identification_kind_for(self.draft.entity_type).label()
    }

    /// Attempt a submit: reveals every error, then builds the payload.
    pub fn submit(&mut self) -> Result<ContractorSubmission, SubmitBlocked> {
        self.submit_attempted = true;
        self.draft.to_submission()
    }

    /// Start a submit unless one is already pending.
    ///
    /// `None` means a request is in flight and nothing should be sent. A
    /// blocked attempt does not count as pending.
    pub fn begin_submit(&mut self) -> Option<Result<ContractorSubmission, SubmitBlocked>> {
        if self.in_flight.is_some() {
            return None;
        }
        let attempt = self.submit();
        if attempt.is_ok() {
            self.in_flight = Some(self.draft.clone());
        }
        Some(attempt)
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Settle the pending submit. Returns `true` if the form was cleared.
    ///
    /// After a successful send the form resets only when the draft still
    /// equals what was sent; edits made during the request are kept.
    pub fn finish_submit(&mut self, sent: bool) -> bool {
        let Some(sent_draft) = self.in_flight.take() else {
            return false;
        };
        if sent && sent_draft == self.draft {
            self.reset();
            return true;
        }
        false
    }

    /// Discard the draft after it was sent
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_visible(&self, field: Field) -> bool {
        self.submit_attempted || self.touched.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contractor_domain::IdentificationKind;

    fn photo(name: &str) -> PhotoRef {
        PhotoRef::from_picked(format!("file:///tmp/{name}")).unwrap()
    }

    fn filled_form() -> ContractorForm {
        let mut form = ContractorForm::new();
        form.set_first_name("Anna");
        form.set_last_name("Nowak");
        form.set_identification_number("12345678901");
        form
    }

    #[test]
    fn starts_as_person_without_visible_errors() {
        let form = ContractorForm::new();
        assert_eq!(form.entity_type(), EntityType::Person);
        assert_eq!(form.identification_placeholder(), "PESEL");
        assert!(form.visible_errors().is_empty());
        assert_eq!(form.error(Field::FirstName), None);
    }

    #[test]
    fn blur_reveals_required_error() {
        let mut form = ContractorForm::new();
        form.blur(Field::FirstName);

        assert_eq!(form.error(Field::FirstName), Some(FieldError::Required));
        assert_eq!(form.error(Field::LastName), None);
    }

    #[test]
    fn typing_after_blur_clears_error() {
        let mut form = ContractorForm::new();
        form.blur(Field::LastName);
        form.set_last_name("Nowak");

        assert_eq!(form.error(Field::LastName), None);
    }

    #[test]
    fn pesel_format_error_for_person() {
        let mut form = ContractorForm::new();
        form.set_identification_number("123");
        form.blur(Field::IdentificationNumber);

        let error = form.error(Field::IdentificationNumber);
        assert_eq!(
            error,
            Some(FieldError::InvalidFormat(IdentificationKind::Pesel))
        );
        assert_eq!(error.unwrap().to_string(), "Invalid PESEL format.");
    }

    #[test]
    fn switching_to_company_revalidates_number_immediately() {
        let mut form = filled_form();
        assert_eq!(form.draft().validate_field(Field::IdentificationNumber), None);

        form.select_entity_type(EntityType::Company);

        assert_eq!(form.identification_placeholder(), "NIP");
        let error = form.error(Field::IdentificationNumber);
        assert_eq!(error, Some(FieldError::InvalidFormat(IdentificationKind::Nip)));
        assert_eq!(error.unwrap().to_string(), "Invalid NIP format.");
    }

    #[test]
    fn switching_back_clears_format_error() {
        let mut form = filled_form();
        form.select_entity_type(EntityType::Company);
        form.select_entity_type(EntityType::Person);

        assert_eq!(form.error(Field::IdentificationNumber), None);
    }

    #[test]
    fn switching_with_empty_number_stays_quiet() {
        let mut form = ContractorForm::new();
        form.select_entity_type(EntityType::Company);

        assert_eq!(form.error(Field::IdentificationNumber), None);
        assert!(!form.is_touched(Field::IdentificationNumber));
    }

    #[test]
    fn submit_with_empty_fields_shows_required_for_each() {
        let mut form = ContractorForm::new();
        form.set_photo(photo("a.jpg"));

        let result = form.submit();

        assert!(matches!(result, Err(SubmitBlocked::Invalid(_))));
        let errors = form.visible_errors();
        assert_eq!(errors.len(), 3);
        for field in [Field::FirstName, Field::LastName, Field::IdentificationNumber] {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
    }

    #[test]
    fn submit_without_photo_is_blocked() {
        let mut form = filled_form();
        assert_eq!(form.submit(), Err(SubmitBlocked::MissingImage));
        assert!(form.submit_attempted());
        assert!(form.visible_errors().is_empty());
    }

    #[test]
    fn submit_builds_payload() {
        let mut form = filled_form();
        form.set_photo(photo("face.jpeg"));

        let submission = form.submit().unwrap();
        assert_eq!(submission.first_name, "Anna");
        assert_eq!(submission.entity_type, EntityType::Person);
        assert_eq!(submission.image.as_str(), "file:///tmp/face.jpeg");
    }

    #[test]
    fn set_photo_replaces_previous() {
        let mut form = ContractorForm::new();
        form.set_photo(photo("first.jpg"));
        form.set_photo(photo("second.jpg"));

        assert_eq!(form.photo().unwrap().as_str(), "file:///tmp/second.jpg");
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut form = filled_form();
        form.set_photo(photo("a.jpg"));

        assert!(matches!(form.begin_submit(), Some(Ok(_))));
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn blocked_attempt_is_not_pending() {
        let mut form = filled_form();

        assert_eq!(form.begin_submit(), Some(Err(SubmitBlocked::MissingImage)));
        assert!(!form.is_submitting());
        assert!(!form.finish_submit(false));
    }

    #[test]
    fn sent_unchanged_draft_resets() {
        let mut form = filled_form();
        form.set_photo(photo("a.jpg"));
        let _ = form.begin_submit();

        assert!(form.finish_submit(true));
        assert_eq!(form, ContractorForm::new());
    }

    #[test]
    fn edits_made_while_sending_survive_success() {
        let mut form = filled_form();
        form.set_photo(photo("a.jpg"));
        let _ = form.begin_submit();

        form.set_first_name("Maria");
        form.set_photo(photo("b.jpg"));

        assert!(!form.finish_submit(true));
        assert!(!form.is_submitting());
        assert_eq!(form.draft().first_name, "Maria");
        assert_eq!(form.photo().unwrap().as_str(), "file:///tmp/b.jpg");
    }

    #[test]
    fn failed_send_keeps_draft_and_allows_retry() {
        let mut form = filled_form();
        form.set_photo(photo("a.jpg"));
        let _ = form.begin_submit();

        assert!(!form.finish_submit(false));
        assert_eq!(form.draft().first_name, "Anna");
        assert!(matches!(form.begin_submit(), Some(Ok(_))));
    }

    #[test]
    fn reset_discards_everything() {
        let mut form = filled_form();
        form.set_photo(photo("a.jpg"));
        form.select_entity_type(EntityType::Company);
        let _ = form.submit();

        form.reset();

        assert_eq!(form, ContractorForm::new());
    }
}
