//! Light/dark toggle for the header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Delegates to the theme controller, which persists the explicit preference
//! and re-applies the root class and tokens; the UI signal only tracks which
//! affordance to show.

use leptos::prelude::*;

use crate::components::button::ButtonVariant;
use crate::state::ui::UiState;
use crate::util::theme::toggle_document_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let label = move || {
        let state = ui.get();
        let messages = state.locale.messages();
        if state.dark_mode { messages.switch_to_light } else { messages.switch_to_dark }
    };

    let on_toggle = move |_| {
        let next = toggle_document_theme(ui.get_untracked().theme());
        ui.update(|u| u.set_theme(next));
    };

    view! {
        <button
            type="button"
            class=format!("{} theme-toggle", ButtonVariant::Ghost.class())
            title=label
            aria-label=label
            on:click=on_toggle
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
