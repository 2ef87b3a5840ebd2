//! Contractor photo reference
//!
//! The photo itself never passes through the domain. `PhotoRef` is the local
//! reference handed back by the platform picker (a `file://` URI on desktop),
//! and it is sent to the backend as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::error::DomainError;

/// File extensions accepted for the contractor photo
const ACCEPTED_EXTENSIONS: &[&str] = &["jpeg", "jpg"];

/// Why a picked file cannot be used as the contractor photo
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhotoError {
    #[error("Please choose a JPEG or JPG image")]
    UnsupportedType { extension: String },

    #[error("Please choose a JPEG or JPG image")]
    MissingExtension,
}

/// A local reference to an accepted JPEG photo
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Wrap a reference without checking its file type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the reference is empty.
    pub fn new(uri: impl Into<String>) -> Result<Self, DomainError> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(DomainError::validation("Photo reference cannot be empty"));
        }
        Ok(Self(uri))
    }

    /// Accept a reference returned by the image picker.
    ///
    /// Only `.jpeg` / `.jpg` files (case-insensitive) are accepted.
    pub fn from_picked(uri: impl Into<String>) -> Result<Self, PhotoError> {
        let uri = uri.into();
        let extension = file_extension(&uri).ok_or(PhotoError::MissingExtension)?;
        let lowered = extension.to_ascii_lowercase();
        if !ACCEPTED_EXTENSIONS.contains(&lowered.as_str()) {
            return Err(PhotoError::UnsupportedType {
                extension: extension.to_string(),
            });
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extension of the last path segment, ignoring any query or fragment.
fn file_extension(uri: &str) -> Option<&str> {
    let path = uri.split(['?', '#']).next().unwrap_or(uri);
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhotoRef {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PhotoRef> for String {
    fn from(photo: PhotoRef) -> String {
        photo.0
    }
}
