pub mod contractor;
pub mod entity_type;
pub mod error;
pub mod identification;
pub mod photo;
pub mod validation;

pub use contractor::{ContractorDraft, ContractorSubmission, SubmitBlocked};
pub use entity_type::EntityType;
pub use error::DomainError;
pub use identification::{
    check_identification_number, identification_kind_for, IdentificationKind,
};
pub use photo::{PhotoError, PhotoRef};
pub use validation::{Field, FieldError, ValidationReport, FIELD_REQUIRED_MESSAGE};
