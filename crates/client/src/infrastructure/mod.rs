pub mod http_client;
pub mod image_picker;
pub mod platform;
