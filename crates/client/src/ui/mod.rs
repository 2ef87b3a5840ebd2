use dioxus::prelude::*;

pub mod presentation;
pub mod theme;

pub use crate::state::Platform;
pub use theme::{use_theme, Theme};

use presentation::views::ContractorFormScreen;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/client/src/main.rs`).
    let theme = use_theme();

    rsx! {
        style { {theme.placeholder_css()} }

        div {
            style: "{theme.app_style()}",
            ContractorFormScreen {}
        }
    }
}
