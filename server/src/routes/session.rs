//! Session cookie mirror.
//!
//! The browser keeps the bearer token in local storage, which the edge gate
//! cannot see. After login the client posts the token here so it is also
//! carried as an HttpOnly cookie; logout and invalidation expire it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::config::Config;
use crate::state::AppState;

/// Cookie read by the edge gate. Same name as the storage key.
pub const SESSION_COOKIE: &str = access::store::TOKEN_KEY;

#[derive(Debug, Deserialize)]
pub struct SessionBody {
    #[serde(default)]
    pub token: String,
}

fn session_cookie(config: &Config, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(max_age)
        .build()
}

/// `POST /session` — mirror the bearer token into the session cookie.
pub async fn create(State(state): State<AppState>, body: Result<Json<SessionBody>, JsonRejection>) -> Response {
    let Ok(Json(body)) = body else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let token = body.token.trim();
    if token.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let cookie = session_cookie(&state.config, token.to_owned(), state.config.session_cookie_max_age());
    tracing::debug!("session cookie set");
    (CookieJar::new().add(cookie), StatusCode::NO_CONTENT).into_response()
}

/// `DELETE /session` — expire the session cookie.
pub async fn remove(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = session_cookie(&state.config, String::new(), Duration::ZERO);
    tracing::debug!("session cookie cleared");
    (CookieJar::new().add(cookie), StatusCode::NO_CONTENT)
}
