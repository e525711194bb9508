//! Framework-independent state and styling rules behind the component library.
//!
//! The Leptos components in `app::components` only wire these into the DOM.

pub mod badge;
pub mod classes;
pub mod control;
pub mod focus;

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

pub const UI_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other themes, whose classes must come off the page when this one applies.
    pub fn others(self) -> impl Iterator<Item = Theme> {
        UI_CONFIG.themes.iter().copied().filter(move |t| *t != self)
    }

    /// Icon shown on the toggle while this theme is active.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UiConfig {
    pub version: &'static str,
    pub prefix: &'static str,
    pub default_theme: Theme,
    pub themes: &'static [Theme],
}

pub const UI_CONFIG: UiConfig = UiConfig {
    version: UI_VERSION,
    prefix: "ui",
    default_theme: Theme::Dark,
    themes: &[Theme::Light, Theme::Dark],
};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Returns a document-unique element id such as `ui-input-3`.
pub fn unique_id(kind: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{kind}-{n}", UI_CONFIG.prefix)
}

/// Buttons stop reacting to clicks while disabled or loading.
pub fn accepts_press(disabled: bool, loading: bool) -> bool {
    !disabled && !loading
}

/// Cards only forward clicks when they are clickable and not loading.
pub fn card_accepts_click(clickable: bool, loading: bool) -> bool {
    clickable && !loading
}

/// Keys that activate an element with `role="button"`.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), UI_CONFIG.default_theme);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Light.as_str(), "light");
        assert!(UI_CONFIG.themes.contains(&Theme::Dark.toggled()));
    }

    #[test]
    fn test_theme_others() {
        assert_eq!(Theme::Dark.others().collect::<Vec<_>>(), vec![Theme::Light]);
        assert_eq!(Theme::Light.others().collect::<Vec<_>>(), vec![Theme::Dark]);
    }

    #[test]
    fn test_theme_serde() {
        let json = serde_json::to_string(&Theme::Light).expect("theme should serialize");
        assert_eq!(json, "\"light\"");
        let theme: Theme = serde_json::from_str("\"dark\"").expect("theme should parse");
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn test_unique_ids() {
        let a = unique_id("input");
        let b = unique_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("ui-input-"));
    }

    #[test]
    fn test_press_gating() {
        assert!(accepts_press(false, false));
        assert!(!accepts_press(true, false));
        assert!(!accepts_press(false, true));

        assert!(card_accepts_click(true, false));
        assert!(!card_accepts_click(false, false));
        assert!(!card_accepts_click(true, true));

        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
