//! National identification number rules
//!
//! The pattern is never stored alongside the number. It is derived from the
//! entity type on every validation pass, so changing the type after the number
//! was typed always re-checks against the new format.

use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::entity_type::EntityType;
use crate::validation::FieldError;

static PESEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("valid regex"));
static NIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// Identification number format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentificationKind {
    /// 11-digit personal number
    Pesel,
    /// 10-digit tax number
    Nip,
}

impl IdentificationKind {
    /// Short name used as the input placeholder and in error messages
    pub fn label(&self) -> &'static str {
        match self {
            IdentificationKind::Pesel => "PESEL",
            IdentificationKind::Nip => "NIP",
        }
    }

    pub fn pattern(&self) -> &'static Regex {
        match self {
            IdentificationKind::Pesel => &PESEL_PATTERN,
            IdentificationKind::Nip => &NIP_PATTERN,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern().is_match(value)
    }
}

impl fmt::Display for IdentificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which identification format applies to the given entity type.
pub fn identification_kind_for(entity_type: EntityType) -> IdentificationKind {
    match entity_type {
        EntityType::Person => IdentificationKind::Pesel,
        EntityType::Company => IdentificationKind::Nip,
    }
}

/// Check an identification number against the format of `entity_type`.
///
/// Missing values report `Required` before any pattern check.
pub fn check_identification_number(
    entity_type: EntityType,
    value: &str,
) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    let kind = identification_kind_for(entity_type);
    if !kind.matches(value) {
        return Err(FieldError::InvalidFormat(kind));
    }
    Ok(())
}
