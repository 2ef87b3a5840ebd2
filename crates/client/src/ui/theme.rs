//! Colors and shared styles for the form screen
//!
//! Provided once through Dioxus context by the composition root and read with
//! [`use_theme`]. Never mutated after startup.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub black: &'static str,
    pub white: &'static str,
    pub grey: &'static str,
    pub dark_violet: &'static str,
    pub red: &'static str,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            black: "#000000",
            white: "#ffffff",
            grey: "#808080",
            dark_violet: "#9400d3",
            red: "#ff0000",
        }
    }

    /// Full-window background behind the form
    pub fn app_style(&self) -> String {
        format!(
            "width: 100vw; min-height: 100vh; margin: 0; display: flex; flex-direction: column; \
             align-items: center; justify-content: flex-start; background-color: {}; \
             font-family: sans-serif;",
            self.black
        )
    }

    /// Bordered text input
    pub fn input_style(&self) -> String {
        format!(
            "border: 1px solid {}; border-radius: 15px; color: {}; background: transparent; \
             margin: 12px 0; padding: 8px; width: 240px;",
            self.dark_violet, self.white
        )
    }

    pub fn button_style(&self, disabled: bool) -> String {
        format!(
            "background-color: {}; color: {}; border: none; border-radius: 4px; \
             padding: 8px 16px; opacity: {}; cursor: {};",
            self.dark_violet,
            self.white,
            if disabled { "0.5" } else { "1" },
            if disabled { "default" } else { "pointer" },
        )
    }

    /// `::placeholder` rule so input hints use the muted color
    pub fn placeholder_css(&self) -> String {
        format!("input::placeholder {{ color: {}; }}", self.grey)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Hook to access the Theme from Dioxus context
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}
