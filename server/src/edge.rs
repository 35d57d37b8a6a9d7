//! Edge gate: coarse, cookie-only route protection in front of SSR.
//!
//! The gate only knows whether an `authToken` cookie is present. Role checks
//! belong to the client route guard, which reads the full profile snapshot.

#[cfg(test)]
#[path = "edge_test.rs"]
mod edge_test;

use access::edge_decision;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::routes::session::SESSION_COOKIE;
use crate::state::AppState;

/// Path prefixes served without consulting the gate.
const BYPASS_PREFIXES: &[&str] = &["/pkg", "/healthz", "/session"];

/// Site-root files such as `/favicon.ico` or `/robots.txt`.
fn is_root_asset(path: &str) -> bool {
    path.strip_prefix('/')
        .is_some_and(|name| !name.is_empty() && !name.contains('/') && name.contains('.'))
}

fn bypasses_gate(path: &str) -> bool {
    is_root_asset(path) || BYPASS_PREFIXES.iter().any(|prefix| access::matches_prefix(path, prefix))
}

/// Whether the request carries a non-empty session cookie.
fn has_session_cookie(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE).is_some_and(|cookie| !cookie.value().trim().is_empty())
}

/// `middleware::from_fn_with_state` entry point.
pub async fn gate(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if bypasses_gate(&path) {
        return next.run(request).await;
    }

    let decision = edge_decision(&state.routes, &path, has_session_cookie(&jar));
    let Some(target) = decision.target() else {
        return next.run(request).await;
    };
    tracing::debug!(%path, %target, "edge gate redirect");
    Redirect::temporary(target).into_response()
}
