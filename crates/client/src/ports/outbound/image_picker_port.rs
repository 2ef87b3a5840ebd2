//! Image picker port
//!
//! Suspends until the user dismisses the picker or chooses a file.

use async_trait::async_trait;
use thiserror::Error;

/// Media the picker should offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    /// Still images only
    #[default]
    Images,
}

/// Options handed to the platform picker
#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub media: MediaKind,
    /// Crop aspect ratio (width, height), for pickers that support editing
    pub aspect: (u32, u32),
    /// Compression quality in [0.0, 1.0], 1.0 meaning untouched
    pub quality: f32,
}

impl PickerOptions {
    /// Square, full-quality still image (contractor photo)
    pub fn square_photo() -> Self {
        Self {
            media: MediaKind::Images,
            aspect: (1, 1),
            quality: 1.0,
        }
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::square_photo()
    }
}

/// A file the user chose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    /// Local reference to the file (a `file://` URI on desktop)
    pub uri: String,
}

impl PickedImage {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PickerError {
    #[error("Image picker unavailable: {0}")]
    Unavailable(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ImagePickerPort: Send + Sync {
    /// Show the picker. `Ok(None)` means the user cancelled.
    async fn pick_image(&self, options: &PickerOptions) -> Result<Option<PickedImage>, PickerError>;
}
