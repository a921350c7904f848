//! Achievement program listing.
//!
//! DESIGN
//! ======
//! Programs are a fixed table compiled into the client; each renders as a
//! card with an in-page anchor so home-page cards can deep link.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::card::Card;
use crate::state::ui::route_locale;
use crate::util::i18n::Locale;

#[cfg(test)]
#[path = "programs_test.rs"]
mod programs_test;

/// A badge track earned by holding every listed certification.
#[derive(Debug)]
pub struct Program {
    pub slug: &'static str,
    pub name: &'static str,
    pub certifications: &'static [&'static str],
    pub details_url: &'static str,
}

impl Program {
    /// Site-relative link to this program's card on the listing page.
    pub fn anchor_path(&self) -> String {
        format!("/programs#{}", self.slug)
    }
}

pub const PROGRAMS: &[Program] = &[
    Program {
        slug: "kubestronaut",
        name: "Kubestronaut",
        certifications: &["KCNA", "KCSA", "CKA", "CKAD", "CKS"],
        details_url: "https://www.cncf.io/training/kubestronaut/",
    },
    Program {
        slug: "golden-kubestronaut",
        name: "Golden Kubestronaut",
        certifications: &[
            "KCNA", "KCSA", "CKA", "CKAD", "CKS", "PCA", "ICA", "CCA", "CAPA", "CGOA", "CBA", "OTCA", "KCA", "CNPA",
            "LFCS",
        ],
        details_url: "https://www.cncf.io/training/kubestronaut/",
    },
];

pub fn find_program(slug: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|program| program.slug == slug)
}

#[component]
pub fn ProgramsPage() -> impl IntoView {
    let locale = route_locale(use_location().pathname);

    move || programs_content(locale.get())
}

fn programs_content(locale: Locale) -> impl IntoView {
    let messages = locale.messages();

    view! {
        <section class="programs">
            <h1>{messages.programs_heading}</h1>
            <p class="programs__lead">{messages.programs_lead}</p>
            <div class="card-grid">
                {PROGRAMS
                    .iter()
                    .map(|program| {
                        view! {
                            <div id=program.slug>
                                <Card title=program.name eyebrow=messages.certification_count(program.certifications.len())>
                                    <ul class="programs__certs">
                                        {program
                                            .certifications
                                            .iter()
                                            .map(|cert| view! { <li>{*cert}</li> })
                                            .collect_view()}
                                    </ul>
                                    <a class="programs__details" href=program.details_url rel="noopener" target="_blank">
                                        {messages.view_program}
                                    </a>
                                </Card>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
