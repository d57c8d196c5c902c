//! Light/dark theme preference

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::PreferenceStore;
use crate::error::{EmiError, Result};

/// Key the theme is stored under
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read the stored theme. Missing or unrecognized values give `Light`.
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        let theme = match store.get(THEME_KEY)? {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!("Ignoring unrecognized stored theme {:?}", value);
                Theme::default()
            }),
            None => Theme::default(),
        };
        Ok(theme)
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = EmiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(EmiError::UnknownTheme(other.to_string())),
        }
    }
}
