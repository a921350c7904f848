//! Landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::button::{ButtonVariant, LinkButton};
use crate::components::card::Card;
use crate::pages::programs::PROGRAMS;
use crate::state::ui::route_locale;
use crate::util::i18n::Locale;

#[component]
pub fn HomePage() -> impl IntoView {
    let locale = route_locale(use_location().pathname);

    move || home_content(locale.get())
}

fn home_content(locale: Locale) -> impl IntoView {
    let messages = locale.messages();

    view! {
        <section class="hero">
            <h1 class="hero__title">{messages.home_heading}</h1>
            <p class="hero__lead">{messages.home_lead}</p>
            <LinkButton href=locale.localize_path("/programs") variant=ButtonVariant::Primary>
                {messages.nav_programs}
            </LinkButton>
        </section>
        <section class="card-grid">
            {PROGRAMS
                .iter()
                .map(|program| {
                    view! {
                        <Card
                            title=program.name
                            href=locale.localize_path(&program.anchor_path())
                            eyebrow=messages.certification_count(program.certifications.len())
                        >
                            <p>{program.certifications.join(" · ")}</p>
                        </Card>
                    }
                })
                .collect_view()}
        </section>
    }
}
