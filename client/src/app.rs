//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::sidebar::Sidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::pages::{home::HomePage, programs::ProgramsPage};
use crate::state::ui::{UiState, route_locale};
use crate::util::theme_script::{bootstrap_script, gate_style};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The theme bootstrap runs first in `<head>` so the root class, tokens, and
/// visibility marker are settled before first paint.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style inner_html=gate_style()></style>
                <script inner_html=bootstrap_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared UI state, runs the initial theme boot, and binds the theme
/// listeners and hover prefetching to the lifetime of the app view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::{prefetch_dom, theme_dom};

        // DOM only; the signal picks the theme up in the first layout effect,
        // after hydration, so the rendered toggle matches the server HTML.
        theme_dom::boot_document_theme();
        theme_dom::install_theme_sync(move |theme| ui.update(|u| u.set_theme(theme)));
        prefetch_dom::install_hover_prefetch();
        on_cleanup(|| {
            theme_dom::uninstall_theme_sync();
            prefetch_dom::uninstall_hover_prefetch();
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>
        <Title text=move || ui.get().locale.messages().site_title/>

        <Router>
            <SiteLayout/>
        </Router>
    }
}

/// Sidebar, header, and routed content. Lives inside the router so it can
/// observe navigations.
#[component]
fn SiteLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let locale = route_locale(pathname);

    ui.update_untracked(|u| u.locale = locale.get_untracked());

    // Every completed in-app navigation re-resolves the theme.
    Effect::new(move || {
        pathname.track();
        let current = locale.get();
        if ui.get_untracked().locale != current {
            ui.update(|u| u.locale = current);
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(theme) = crate::util::theme_dom::sync_document_theme() {
                if ui.get_untracked().theme() != theme {
                    ui.update(|u| u.set_theme(theme));
                }
            }
        }
    });

    view! {
        <div class="layout">
            <Sidebar/>
            <div class="layout__main">
                <header class="layout__header">
                    <a class="layout__brand" href=move || ui.get().locale.localize_path("/")>
                        {move || ui.get().locale.messages().site_title}
                    </a>
                    <span class="layout__spacer"></span>
                    <ThemeToggle/>
                </header>
                <main class="layout__content">
                    <Routes fallback=move || locale.get().messages().not_found>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("programs") view=ProgramsPage/>
                        <Route path=StaticSegment("es") view=HomePage/>
                        <Route path=(StaticSegment("es"), StaticSegment("programs")) view=ProgramsPage/>
                    </Routes>
                </main>
            </div>
        </div>
    }
}
