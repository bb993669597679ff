//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the viewer: a health check, the compiled WASM/CSS
//! bundle under `/pkg`, and Leptos SSR for every page route. Chat data is
//! fetched by the browser straight from the remote chat service.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfigError;

/// Plain HTTP routes that do not go through Leptos.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full router: API routes + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app() -> Result<Router, ServerConfigError> {
    let conf = get_configuration(None).map_err(|e| ServerConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
