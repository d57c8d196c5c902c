//! Runtime configuration read from environment variables
//!
//!   EMI_PREFERENCES_PATH  preference file (default: .emi_preferences.json)
//!   EMI_CURRENCY          default display currency (default: USD)

use std::env;
use std::path::PathBuf;

use log::warn;

use crate::display::CurrencyCode;

pub const DEFAULT_PREFERENCES_PATH: &str = ".emi_preferences.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the theme preference is persisted
    pub preferences_path: PathBuf,

    /// Currency used when none is given on the command line
    pub default_currency: CurrencyCode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            default_currency: CurrencyCode::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let preferences_path = lookup("EMI_PREFERENCES_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_PATH));

        let default_currency = lookup("EMI_CURRENCY")
            .and_then(|s| match s.parse::<CurrencyCode>() {
                Ok(currency) => Some(currency),
                Err(e) => {
                    warn!("{}, falling back to USD", e);
                    None
                }
            })
            .unwrap_or_default();

        Self {
            preferences_path,
            default_currency,
        }
    }
}
