//! Two-state page theme with durable preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Theme` is the whole data model: the class on the root container and the
//! value in the durable store are the same literal. `ThemeController` keeps
//! the root class, the indicator glyph and the stored value in agreement.
//!
//! DESIGN
//! ======
//! The controller is generic over a `PreferenceStore` and a `ThemeSurface`
//! so the browser bindings in `util` and the in-memory adapters used by
//! tests and SSR drive the same state machine.

pub mod config;
pub mod controller;
pub mod error;
pub mod store;
pub mod surface;


use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use store::{MemoryStore, PreferenceStore};
pub use surface::{MemorySurface, ThemeSurface};

/// Active visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Class on the root container, also the literal written to storage.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    /// Glyph for the mode a click would switch to.
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.class_name() == s)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_owned()))
    }
}
