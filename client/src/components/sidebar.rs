//! Sidebar navigation with active-route highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are plain anchors, so the client router intercepts them (in-app
//! navigation) and the hover prefetcher sees them as same-origin targets.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::button::{Button, ButtonVariant};
use crate::state::ui::UiState;
use crate::util::i18n::{Locale, Messages};

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// One sidebar entry.
pub struct NavItem {
    pub path: &'static str,
    pub label: fn(&Messages) -> &'static str,
}

pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem { path: "/", label: |m| m.nav_home },
    NavItem { path: "/programs", label: |m| m.nav_programs },
];

/// Whether `target` should render as the current page for `current`.
///
/// Locale prefixes are ignored. The root only matches exactly; other targets
/// also match their sub-paths on a segment boundary.
pub fn is_active(current: &str, target: &str) -> bool {
    let current = Locale::strip_prefix(current);
    let current = if current.len() > 1 { current.trim_end_matches('/') } else { current };
    if target == "/" {
        return current == "/" || current.is_empty();
    }
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let items = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            let label = item.label;
            let href = move || ui.get().locale.localize_path(path);
            let active = move || is_active(&pathname.get(), path);
            view! {
                <li>
                    <a
                        class="sidebar__link"
                        class:sidebar__link--active=active
                        aria-current=move || active().then_some("page")
                        href=href
                    >
                        {move || label(ui.get().locale.messages())}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            class="sidebar"
            class:sidebar--open=move || ui.get().sidebar_open
            aria-label=move || ui.get().locale.messages().nav_label
        >
            <Button
                variant=ButtonVariant::Ghost
                title=Signal::derive(move || ui.get().locale.messages().toggle_sidebar.to_owned())
                on_click=Callback::new(move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open))
            >
                "☰"
            </Button>
            <ul class="sidebar__list">{items}</ul>
            <div class="sidebar__locales">
                {Locale::ALL
                    .into_iter()
                    .map(|locale| {
                        let href = move || locale.localize_path(&pathname.get());
                        view! {
                            <a
                                class="sidebar__locale"
                                class:sidebar__locale--active=move || ui.get().locale == locale
                                hreflang=locale.code()
                                href=href
                            >
                                {locale.code()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
