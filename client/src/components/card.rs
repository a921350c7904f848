//! Content card used by the home and program listings.

use leptos::prelude::*;

/// Titled card. With `href` the title links to that page.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] eyebrow: Option<String>,
    children: Children,
) -> impl IntoView {
    let heading = match href {
        Some(href) => view! { <a class="card__link" href=href>{title}</a> }.into_any(),
        None => view! { <span>{title}</span> }.into_any(),
    };

    view! {
        <article class="card">
            {eyebrow.map(|text| view! { <p class="card__eyebrow">{text}</p> })}
            <h3 class="card__title">{heading}</h3>
            <div class="card__body">{children()}</div>
        </article>
    }
}
