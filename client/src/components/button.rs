//! Button primitives shared by chrome and pages.

use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

/// Visual weight of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Secondary => "btn btn--secondary",
            Self::Ghost => "btn btn--ghost",
        }
    }
}

/// Action button.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] title: MaybeProp<String>,
    on_click: Callback<leptos::ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            title=move || title.get()
            aria-label=move || title.get()
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}

/// Anchor styled as a button. In-app hrefs go through the client router.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <a class=variant.class() href=href>
            {children()}
        </a>
    }
}
