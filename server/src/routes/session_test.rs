use axum::body::Body;
use axum::http::{Method, Request, header};
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;

fn state_with(config: Config) -> AppState {
    AppState::new(config)
}

fn post_session(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

#[tokio::test]
async fn post_sets_http_only_cookie() {
    let app = api_routes(state_with(Config::default()));
    let response = app.oneshot(post_session(r#"{"token":"abc123"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = set_cookie(&response).expect("set-cookie header");
    assert!(cookie.starts_with("authToken=abc123"), "{cookie}");
    assert!(cookie.contains("HttpOnly"), "{cookie}");
    assert!(cookie.contains("SameSite=Lax"), "{cookie}");
    assert!(cookie.contains("Path=/"), "{cookie}");
    assert!(cookie.contains("Max-Age=2592000"), "{cookie}");
    assert!(!cookie.contains("Secure"), "{cookie}");
}

#[tokio::test]
async fn post_honors_secure_and_max_age_config() {
    let config = Config { cookie_secure: true, session_cookie_max_age_days: 1, ..Config::default() };
    let app = api_routes(state_with(config));
    let response = app.oneshot(post_session(r#"{"token":"abc123"}"#)).await.unwrap();

    let cookie = set_cookie(&response).expect("set-cookie header");
    assert!(cookie.contains("Secure"), "{cookie}");
    assert!(cookie.contains("Max-Age=86400"), "{cookie}");
}

#[tokio::test]
async fn post_survives_oversized_max_age() {
    let config = Config { session_cookie_max_age_days: 200_000_000_000_000, ..Config::default() };
    let app = api_routes(state_with(config));
    let response = app.oneshot(post_session(r#"{"token":"abc123"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = set_cookie(&response).expect("set-cookie header");
    assert!(cookie.contains("Max-Age=34560000"), "{cookie}");
}

#[tokio::test]
async fn post_rejects_blank_token() {
    let app = api_routes(state_with(Config::default()));
    let response = app.oneshot(post_session(r#"{"token":"   "}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn post_rejects_missing_or_malformed_body() {
    let app = api_routes(state_with(Config::default()));
    let response = app.clone().oneshot(post_session("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(post_session("not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_expires_cookie() {
    let app = api_routes(state_with(Config::default()));
    let request = Request::builder().method(Method::DELETE).uri("/session").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = set_cookie(&response).expect("set-cookie header");
    assert!(cookie.starts_with("authToken="), "{cookie}");
    assert!(cookie.contains("Max-Age=0"), "{cookie}");
}
