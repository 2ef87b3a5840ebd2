//! Picker - single-choice dropdown

use dioxus::prelude::*;

use crate::ui::use_theme;

/// One option of the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub label: String,
    pub value: String,
}

impl PickerItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Dropdown showing `items` with `selected` (an item value) chosen.
///
/// Emits the value of the newly chosen item.
#[component]
pub fn Picker(
    items: Vec<PickerItem>,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    let theme = use_theme();

    rsx! {
        select {
            value: "{selected}",
            onchange: move |e| on_change.call(e.value()),
            style: "height: 50px; width: 200px; margin-bottom: 40px; color: {theme.dark_violet};",

            for item in items.iter() {
                option {
                    key: "{item.label}",
                    value: "{item.value}",
                    selected: item.value == selected,
                    "{item.label}"
                }
            }
        }
    }
}
