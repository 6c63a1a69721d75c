//! Button that flips the page theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! In hydrate builds the component owns the page's `ThemeController`: it
//! initializes it once after mount and calls `toggle` on click. The
//! controller writes the root class and the icon text directly; `UiState`
//! mirrors `active()` after every toggle, failed or not, for the button
//! label. Server rendering emits the default (light) glyph, which the
//! controller replaces after hydration.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::theme::Theme;
use crate::theme::config::ICON_ID;

/// Theme toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(None::<crate::util::dom::PageThemeController>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || match crate::util::dom::init_page() {
        Ok(initialized) => {
            ui.update(|u| u.mirror(&initialized));
            controller.set_value(Some(initialized));
        }
        Err(e) => log::warn!("theme: initialization failed: {e}"),
    });

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let toggled = controller
                .try_update_value(|c| {
                    c.as_mut().map(|c| {
                        let result = c.toggle();
                        ui.update(|u| u.mirror(c));
                        result
                    })
                })
                .flatten();
            match toggled {
                Some(Ok(_)) => {}
                Some(Err(e)) => log::warn!("theme: toggle failed: {e}"),
                None => log::warn!("theme: toggle ignored, controller not initialized"),
            }
        }
    };

    view! {
        <button
            class="theme-toggle"
            on:click=on_click
            title=move || ui.get().toggle_label()
            aria-label=move || ui.get().toggle_label()
        >
            <span id=ICON_ID class="theme-toggle__icon">
                {Theme::default().indicator()}
            </span>
        </button>
    }
}
