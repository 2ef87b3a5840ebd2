pub mod components;
pub mod services;
pub mod views;

pub use services::Services;
