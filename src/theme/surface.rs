//! Visual surface the controller writes to: a root container with class
//! state and an indicator element with text content.

use std::collections::BTreeSet;

use super::ThemeError;

/// Root container class list plus indicator text.
///
/// The browser binding lives in `util::dom`.
pub trait ThemeSurface {
    fn has_class(&self, class: &str) -> bool;

    /// # Errors
    ///
    /// Returns an error when the root container rejects the update.
    fn add_class(&mut self, class: &str) -> Result<(), ThemeError>;

    /// # Errors
    ///
    /// Returns an error when the root container rejects the update.
    fn remove_class(&mut self, class: &str) -> Result<(), ThemeError>;

    /// # Errors
    ///
    /// Returns an error when the indicator element cannot be updated.
    fn set_indicator(&mut self, glyph: &str) -> Result<(), ThemeError>;

    /// Whether the host reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool {
        false
    }
}

/// Headless surface used by tests and server rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySurface {
    classes: BTreeSet<String>,
    indicator: String,
    prefers_dark: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose host reports `prefers-color-scheme: dark`.
    #[must_use]
    pub fn preferring_dark(mut self) -> Self {
        self.prefers_dark = true;
        self
    }

    /// Surface whose root container already carries `classes`.
    pub fn with_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            classes: classes.into_iter().map(str::to_owned).collect(),
            ..Self::default()
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }
}

impl ThemeSurface for MemorySurface {
    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_class(&mut self, class: &str) -> Result<(), ThemeError> {
        self.classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&mut self, class: &str) -> Result<(), ThemeError> {
        self.classes.remove(class);
        Ok(())
    }

    fn set_indicator(&mut self, glyph: &str) -> Result<(), ThemeError> {
        glyph.clone_into(&mut self.indicator);
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
