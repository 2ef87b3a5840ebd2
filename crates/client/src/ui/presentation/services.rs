//! Service providers for the presentation layer
//!
//! Components reach application services through these hooks and never see
//! the infrastructure adapters behind them.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{ContractorService, ImageService};
use crate::ports::outbound::ImagePickerPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub contractor: Arc<ContractorService>,
    pub image: Arc<ImageService>,
}

impl Services {
    /// Create all services with the given ports
    ///
    /// # Arguments
    /// * `api` - HTTP access used by the contractor save call
    /// * `submit_url` - Endpoint the contractor is posted to
    /// * `picker` - Platform image picker
    pub fn new(api: Api, submit_url: impl Into<String>, picker: Arc<dyn ImagePickerPort>) -> Self {
        Self {
            contractor: Arc::new(ContractorService::new(api, submit_url)),
            image: Arc::new(ImageService::new(picker)),
        }
    }
}

/// Hook to access the ContractorService from context
pub fn use_contractor_service() -> Arc<ContractorService> {
    let services = use_context::<Services>();
    services.contractor.clone()
}

/// Hook to access the ImageService from context
pub fn use_image_service() -> Arc<ImageService> {
    let services = use_context::<Services>();
    services.image.clone()
}
