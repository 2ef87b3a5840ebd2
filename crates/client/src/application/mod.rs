pub mod api;
pub mod error;
pub mod form;
pub mod services;
