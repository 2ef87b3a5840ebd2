use dioxus::prelude::*;

use crate::ui::use_theme;

/// Inline validation message rendered under a field
#[component]
pub fn RequiredText(children: Element) -> Element {
    let theme = use_theme();

    rsx! {
        span {
            class: "required-text",
            style: "display: block; color: {theme.red};",
            {children}
        }
    }
}
