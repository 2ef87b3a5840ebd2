//! Contractor entity type
//!
//! Classifies a contractor as a private person or a company. The selected
//! type decides which identification number format applies.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal form of the contractor.
///
/// Serialized with the wire values the backend expects (`"osoba"` / `"firma"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EntityType {
    /// Natural person, identified by PESEL
    #[default]
    #[serde(rename = "osoba")]
    Person,
    /// Business entity, identified by NIP
    #[serde(rename = "firma")]
    Company,
}

impl EntityType {
    /// All entity types in dropdown order
    pub fn all() -> &'static [EntityType] {
        &[EntityType::Person, EntityType::Company]
    }

    /// Value sent to the backend in the `type` field
    pub fn wire_value(&self) -> &'static str {
        match self {
            EntityType::Person => "osoba",
            EntityType::Company => "firma",
        }
    }

    /// Label shown in the dropdown
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Person => "Osoba",
            EntityType::Company => "Firma",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for EntityType {
    type Err = DomainError;

    /// Parses the case-insensitive wire value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "osoba" => Ok(EntityType::Person),
            "firma" => Ok(EntityType::Company),
            other => Err(DomainError::parse(format!("Unknown entity type: {}", other))),
        }
    }
}
