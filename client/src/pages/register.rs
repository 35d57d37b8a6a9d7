//! Public registration notice. Accounts are provisioned by the backend.

use leptos::prelude::*;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an Account"</h1>
                <p class="login-card__subtitle">
                    "Administrator accounts are created by an existing administrator. "
                    "Ask your team lead for an invitation."
                </p>
                <a class="login-button" href="/login">"Back to login"</a>
            </div>
        </div>
    }
}
