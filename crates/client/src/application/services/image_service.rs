//! Image Service - lets the user choose the contractor photo

use std::sync::Arc;

use contractor_domain::{PhotoError, PhotoRef};

use crate::ports::outbound::{ImagePickerPort, PickerError, PickerOptions};

/// Alert shown when the platform picker could not be opened
pub const PICKER_UNAVAILABLE_MESSAGE: &str = "Could not open the image picker.";

/// What came back from one press of "Select image"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelection {
    /// An accepted JPEG
    Selected(PhotoRef),
    /// The user dismissed the picker
    Cancelled,
    /// The chosen file is not a JPEG
    Rejected(PhotoError),
    /// The picker itself failed
    Failed(PickerError),
}

impl ImageSelection {
    /// The accepted photo, if any. Every other outcome leaves the previous
    /// selection in place.
    pub fn photo(&self) -> Option<&PhotoRef> {
        match self {
            ImageSelection::Selected(photo) => Some(photo),
            _ => None,
        }
    }

    /// Text for the blocking alert, if this outcome needs one
    pub fn alert_message(&self) -> Option<String> {
        match self {
            ImageSelection::Selected(_) | ImageSelection::Cancelled => None,
            ImageSelection::Rejected(e) => Some(e.to_string()),
            ImageSelection::Failed(_) => Some(PICKER_UNAVAILABLE_MESSAGE.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct ImageService {
    picker: Arc<dyn ImagePickerPort>,
    options: PickerOptions,
}

impl ImageService {
    /// Picker configured for a square, full-quality still image
    pub fn new(picker: Arc<dyn ImagePickerPort>) -> Self {
        Self::with_options(picker, PickerOptions::square_photo())
    }

    pub fn with_options(picker: Arc<dyn ImagePickerPort>, options: PickerOptions) -> Self {
        Self { picker, options }
    }

    pub async fn select_image(&self) -> ImageSelection {
        match self.picker.pick_image(&self.options).await {
            Ok(None) => {
                tracing::debug!("Image selection cancelled");
                ImageSelection::Cancelled
            }
            Ok(Some(picked)) => match PhotoRef::from_picked(picked.uri.as_str()) {
                Ok(photo) => {
                    tracing::debug!(uri = %photo, "Image selected");
                    ImageSelection::Selected(photo)
                }
                Err(e) => {
                    tracing::info!(uri = %picked.uri, error = ?e, "Rejected non-JPEG image");
                    ImageSelection::Rejected(e)
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Image picker failed");
                ImageSelection::Failed(e)
            }
        }
    }
}
