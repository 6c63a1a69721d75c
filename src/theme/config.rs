//! Identifiers and defaults the controller binds to.

use serde::Deserialize;

use super::{Theme, ThemeError};

pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Id of the element showing the indicator glyph. Rendered by `ThemeToggle`.
pub const ICON_ID: &str = "theme-toggle-icon";

/// Theme controller configuration.
///
/// Every field is optional in JSON form; missing fields take the defaults
/// below.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Durable store key holding the preference.
    pub storage_key: String,
    /// Id of the root container. `None` targets `<body>`.
    pub root_id: Option<String>,
    /// Theme applied when nothing is stored.
    pub default_theme: Theme,
    /// Consult `prefers-color-scheme` when nothing is stored.
    pub follow_system_preference: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            root_id: None,
            default_theme: Theme::Light,
            follow_system_preference: false,
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::ConfigParse` for malformed JSON, unknown fields
    /// or an unrecognised `default_theme`.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::ConfigParse(e.to_string()))
    }

    /// Config carried by a page attribute, if any.
    ///
    /// An absent attribute yields the defaults; a malformed one is logged
    /// and also yields the defaults.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|e| {
            log::warn!("theme: config attribute ignored: {e}");
            Self::default()
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
