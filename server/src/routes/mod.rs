//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the health check, the session cookie mirror, the
//! Leptos SSR pages and their `/pkg` assets. The edge gate wraps all of it
//! and skips the non-page paths itself.

pub mod session;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::edge;
use crate::state::AppState;

/// Non-page routes: health check and session cookie mirror.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/session", post(session::create).delete(session::remove))
        .with_state(state)
}

/// Put the edge gate and request tracing in front of `router`.
pub fn with_edge_gate(router: Router, state: AppState) -> Router {
    router
        .layer(middleware::from_fn_with_state(state, edge::gate))
        .layer(TraceLayer::new_for_http())
}

/// Full application: API routes + Leptos SSR + `/pkg` and site-root assets,
/// behind the gate.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path));
    Ok(with_edge_gate(router, state))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
