//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders every site route into the shell (which carries the
//! theme bootstrap); the hydrate bundle is served from `/pkg` and anything
//! else falls through to the static assets directory.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Full site router: health check, Leptos SSR, `/pkg`, static fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &SiteConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("{e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(showcase_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || showcase_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets = ServeDir::new(&config.assets_dir).append_index_html_on_directories(true);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
