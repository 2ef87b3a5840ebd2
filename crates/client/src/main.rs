//! Contractor client - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contractor_client::application::api::Api;
use contractor_client::infrastructure::{http_client::ApiAdapter, image_picker::RfdImagePicker};
use contractor_client::ports::outbound::{ImagePickerPort, RawApiPort};
use contractor_client::{ClientConfig, Theme};

const WINDOW_TITLE: &str = "Contractor";

fn main() {
    contractor_client::config::load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "contractor_client=debug,contractor_domain=debug,dioxus=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        submit_url = %config.submit_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        "Starting contractor client"
    );

    // Platform
    let platform = contractor_client::infrastructure::platform::create_platform();

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::from_config(&config));
    let api = Api::new(raw_api);

    // Image picker
    let picker: Arc<dyn ImagePickerPort> = Arc::new(RfdImagePicker::new());

    let window = dioxus_desktop::WindowBuilder::new().with_title(WINDOW_TITLE);
    let cfg = dioxus_desktop::Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(platform)
        .with_context(Theme::dark())
        .with_context(contractor_client::presentation::Services::new(
            api,
            config.submit_url.clone(),
            picker,
        ))
        .launch(contractor_client::app);
}
