//! Theme preference: a persisted light/dark toggle.

use crate::store::KeyValueStore;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Store key for the persisted theme choice.
pub const THEME_KEY: &str = "theme";

/// Color theme for the UI.
///
/// Persisted as the bare string `"light"` or `"dark"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// Swaps light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The user's theme choice, persisted through the store.
#[derive(Debug)]
pub struct ThemePreference {
    theme: Theme,
    store: Arc<dyn KeyValueStore>,
}

impl ThemePreference {
    /// Loads the preference from the store.
    ///
    /// An absent, unreadable, or unrecognized value falls back to light.
    #[instrument(skip(store))]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(raw)) => match Theme::from_str(&raw) {
                Ok(theme) => theme,
                Err(_) => {
                    warn!(value = %raw, "Unrecognized theme value, defaulting to light");
                    Theme::default()
                }
            },
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(%err, "Failed to read theme, defaulting to light");
                Theme::default()
            }
        };

        debug!(%theme, "Theme loaded");
        Self { theme, store }
    }

    /// Returns the current theme.
    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Swaps the theme and persists the new choice.
    ///
    /// Persistence failure is swallowed: the in-memory choice stays
    /// authoritative for the session.
    #[instrument(skip(self))]
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        if let Err(err) = self.store.set(THEME_KEY, &self.theme.to_string()) {
            warn!(%err, "Failed to persist theme");
        }
        self.theme
    }
}
