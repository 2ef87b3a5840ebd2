//! Application services used by the contractor screen

pub mod contractor_service;
pub mod image_service;

pub use contractor_service::{ContractorService, SubmitOutcome};
pub use image_service::{ImageSelection, ImageService};
