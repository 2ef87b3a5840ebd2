//! Contractor client crate.
//!
//! This crate contains the form screen, application services, and the
//! desktop adapters behind the outbound ports.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use config::ClientConfig;
pub use ui::app;
pub use ui::{use_platform, use_theme, Platform, Theme};
