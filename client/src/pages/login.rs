//! Login page: email + password against the REST backend.
//!
//! On success the token and profile snapshot go to the credential store, the
//! server mirrors the token into the `authToken` cookie, and the browser moves
//! to `/admin`. The route guard takes it from there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

const MISSING_FIELDS: &str = "Please fill in all fields";
const INVALID_EMAIL: &str = "Please enter a valid email address";
const STORAGE_FAILED: &str = "Could not save your session. Check that browser storage is enabled.";

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Trim the email and check both fields before any network call.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        let remember = remember_me.get();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(outcome) => {
                    let store = crate::util::credentials::browser_store();
                    match crate::util::auth::store_login(&store, &outcome, remember) {
                        Ok(state) => {
                            auth.set(state);
                            if let Err(err) = crate::net::api::mirror_session_cookie(&outcome.token).await {
                                log::warn!("session cookie mirror failed: {err}");
                            }
                            navigate(access::route::ADMIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
                        }
                        Err(err) => {
                            log::warn!("storing credential failed: {err}");
                            error.set(STORAGE_FAILED.to_owned());
                        }
                    }
                }
                Err(err) => error.set(err.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to the admin dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <button
                        class="btn login-form__toggle"
                        type="button"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide password" } else { "Show password" }}
                    </button>
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    <a href="/register">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
