//! Reusable presentational controls

pub mod picker;
pub mod required_text;

pub use picker::{Picker, PickerItem};
pub use required_text::RequiredText;
