//! Landing page hosting the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Home page: a header with the toggle and a short body.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Theme toggle"</h1>
                <ThemeToggle/>
            </header>
            <p class="home-page__body">
                "Switch between light and dark. Your choice is remembered on this device."
            </p>
        </main>
    }
}
