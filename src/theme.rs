//! Light/dark display preference.
//!
//! Stored as the bare string `light` or `dark` under its own key, not as JSON.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::storage::PersistentStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// The persisted theme choice.
#[derive(Debug)]
pub struct ThemePreference {
    theme: Theme,
    store: PersistentStore,
    key: String,
}

impl ThemePreference {
    /// Read the stored theme, falling back to light.
    pub fn open(store: PersistentStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = match store.read_string(&key) {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!("{} under '{}', using light", e, key);
                Theme::Light
            }),
            None => Theme::default(),
        };

        Self { theme, store, key }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set and persist the theme.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.write_string(&self.key, theme.as_str());
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        tracing::debug!("Theme switched to {}", next);
        next
    }
}
