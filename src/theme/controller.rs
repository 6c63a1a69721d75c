//! Theme controller: initialization on page ready, toggle on user action.
//!
//! INVARIANTS
//! ==========
//! After `initialize` or `toggle` returns `Ok`, exactly one of the two theme
//! classes is on the root container, the indicator shows the glyph for the
//! active theme, and (after a toggle) the durable store holds the active
//! theme's literal. `initialize` never writes the store.
//!
//! ERROR HANDLING
//! ==============
//! Absence of a stored value is the normal first-visit path. A stored value
//! outside the known literals is logged and treated as absent. Adapter
//! failures propagate to the caller.

use log::{debug, warn};

use super::{PreferenceStore, Theme, ThemeConfig, ThemeError, ThemeSurface};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Owns the preference and keeps root class, indicator and store in step.
#[derive(Debug)]
pub struct ThemeController<S, U> {
    config: ThemeConfig,
    store: S,
    surface: U,
    active: Theme,
}

impl<S: PreferenceStore, U: ThemeSurface> ThemeController<S, U> {
    /// Apply the stored preference (or the default) to `surface`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the surface rejects
    /// the class or indicator update.
    pub fn initialize(config: ThemeConfig, store: S, mut surface: U) -> Result<Self, ThemeError> {
        let active = match store.load(&config.storage_key)? {
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => theme,
                Err(e) => {
                    warn!("theme: ignoring stored preference: {e}");
                    fallback_theme(&config, &surface)
                }
            },
            None => fallback_theme(&config, &surface),
        };

        apply(&mut surface, active)?;
        debug!("theme: initialized as {active}");

        Ok(Self { config, store, surface, active })
    }

    /// Flip the theme shown on the root container and persist the result.
    ///
    /// Anything on the root other than the light class flips to light.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface update or the store write fails.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = if self.surface.has_class(Theme::Light.class_name()) {
            Theme::Dark
        } else {
            Theme::Light
        };

        apply(&mut self.surface, next)?;
        self.active = next;
        self.store.save(&self.config.storage_key, next.class_name())?;
        debug!("theme: stored {next} under {:?}", self.config.storage_key);

        Ok(next)
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    /// Glyph currently shown by the indicator.
    pub fn indicator(&self) -> &'static str {
        self.active.indicator()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }
}

fn fallback_theme<U: ThemeSurface>(config: &ThemeConfig, surface: &U) -> Theme {
    if config.follow_system_preference && surface.prefers_dark() {
        Theme::Dark
    } else {
        config.default_theme
    }
}

/// Swap the root class to `theme` and update the indicator.
fn apply<U: ThemeSurface>(surface: &mut U, theme: Theme) -> Result<(), ThemeError> {
    surface.remove_class(theme.toggled().class_name())?;
    surface.add_class(theme.class_name())?;
    surface.set_indicator(theme.indicator())
}
