//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the UI: Leptos SSR routes, the compiled WASM/CSS
//! bundle under `/pkg`, and a liveness probe. The analytics JSON endpoints
//! live on a separate backend that the browser calls directly.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use dashboard_client::app::{App, shell};
use dashboard_client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Routes that do not depend on the Leptos build output.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full router: SSR pages, static assets, and health probe.
pub fn app(leptos_options: LeptosOptions, api: ApiConfig) -> Router {
    let routes = generate_route_list({
        let api = api.clone();
        move || view! { <App api=api.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), api.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS, and CSS produced by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
