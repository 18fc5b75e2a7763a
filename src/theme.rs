use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-color-scheme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph for the toggle button: it shows the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value store holding user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// `localStorage`, stored as plain strings so the value reads `dark`, not `"dark"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            LocalStorage::raw().get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if LocalStorage::raw().set_item(key, value).is_err() {
                tracing::warn!("theme: failed to persist {key}");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }
}

pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Reads the saved preference, falling back to `default` when it is
    /// missing or unreadable, and writes the resolved value back.
    pub fn load(store: S, default: Theme) -> Self {
        let current = store
            .get(THEME_STORAGE_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default);
        let mut controller = Self { store, current };
        controller.persist();
        controller
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persist();
    }

    fn persist(&mut self) {
        self.store.set(THEME_STORAGE_KEY, self.current.as_str());
    }
}

#[component]
pub fn ThemeToggle(default_theme: Theme) -> Element {
    let mut controller = use_signal(move || ThemeController::load(LocalPreferences, default_theme));

    use_effect(move || {
        let theme = controller.read().current();
        apply_theme(theme);
    });

    let theme = controller.read().current();

    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "theme-toggle",
            aria_label: "Toggle color scheme",
            onclick: move |_| {
                let next = controller.write().toggle();
                tracing::debug!("theme: switched to {next}");
            },
            span { class: "theme-icon", "{theme.icon()}" }
        }
    }
}

fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let applied = crate::dom::root_element().and_then(|root| {
            root.set_attribute(THEME_ATTRIBUTE, theme.as_str())
                .map_err(|_| "theme attribute set failed".to_string())
        });
        if let Err(err) = applied {
            tracing::warn!("theme: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn stored(controller: &ThemeController<MemoryStore>) -> Option<String> {
        controller.store.get(THEME_STORAGE_KEY)
    }

    #[test]
    fn missing_preference_uses_default_and_persists_it() {
        let controller = ThemeController::load(MemoryStore::default(), Theme::Light);
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }

    #[test]
    fn saved_preference_wins_over_default() {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "dark");
        let controller = ThemeController::load(store, Theme::Light);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn unknown_saved_value_is_replaced_with_default() {
        let mut store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "solarized");
        let controller = ThemeController::load(store, Theme::Light);
        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }

    #[test]
    fn toggle_twice_is_identity_and_store_tracks_every_step() {
        let mut controller = ThemeController::load(MemoryStore::default(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }

    #[test]
    fn parses_only_known_names() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn icon_points_at_the_other_theme() {
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.icon(), "☀️");
    }

    #[test]
    fn deserializes_lowercase_names() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
