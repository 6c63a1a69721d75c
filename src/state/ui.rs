//! Reactive mirror of the page theme.
//!
//! DESIGN
//! ======
//! The `ThemeController` owns the preference and the DOM writes. `UiState`
//! only mirrors the active theme so views (button label, title) can react
//! to it without holding the controller.

use crate::theme::{PreferenceStore, Theme, ThemeController, ThemeSurface};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided as `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    /// Label for the toggle button: the action a click performs.
    pub fn toggle_label(&self) -> &'static str {
        self.theme.toggle_label()
    }

    /// Copy the theme the controller is showing.
    ///
    /// Called after every toggle, including failed ones: a failed store
    /// write still leaves the new theme on the page.
    pub fn mirror<S: PreferenceStore, U: ThemeSurface>(&mut self, controller: &ThemeController<S, U>) {
        self.theme = controller.active();
    }
}
