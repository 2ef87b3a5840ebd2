//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the network, the image picker, and
//! native dialogs without depending on concrete implementations.

pub mod api_port;
pub mod image_picker_port;
pub mod platform;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use image_picker_port::{ImagePickerPort, MediaKind, PickedImage, PickerError, PickerOptions};
pub use platform::{AlertProvider, LogProvider};
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use image_picker_port::MockImagePickerPort;
#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
