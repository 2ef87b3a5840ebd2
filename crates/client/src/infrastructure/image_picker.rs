//! Desktop image picker backed by the native file dialog

use async_trait::async_trait;
use rfd::AsyncFileDialog;
use url::Url;

use crate::ports::outbound::{ImagePickerPort, MediaKind, PickedImage, PickerError, PickerOptions};

/// Still-image extensions offered by the dialog filter.
///
/// Wider than what the form accepts, so choosing e.g. a PNG reaches the
/// JPEG check and gets a clear message instead of being hidden.
const STILL_IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "JPG", "JPEG", "png", "gif", "bmp", "webp", "tif", "tiff", "heic",
];

#[derive(Clone, Default)]
pub struct RfdImagePicker;

impl RfdImagePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ImagePickerPort for RfdImagePicker {
    async fn pick_image(
        &self,
        options: &PickerOptions,
    ) -> Result<Option<PickedImage>, PickerError> {
        // The native dialog cannot crop or re-encode; the file is used as-is.
        tracing::debug!(
            aspect = ?options.aspect,
            quality = options.quality,
            "Opening image picker"
        );

        let dialog = match options.media {
            MediaKind::Images => {
                AsyncFileDialog::new().add_filter("Images", STILL_IMAGE_EXTENSIONS)
            }
        };

        let Some(handle) = dialog.set_title("Select image").pick_file().await else {
            return Ok(None);
        };

        let path = handle.path().to_path_buf();
        let uri = Url::from_file_path(&path).map_err(|_| {
            PickerError::Unavailable(format!("not an absolute path: {}", path.display()))
        })?;

        Ok(Some(PickedImage::new(uri.to_string())))
    }
}
