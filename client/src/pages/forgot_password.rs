//! Public password-recovery notice.

use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Forgot Password"</h1>
                <p class="login-card__subtitle">
                    "Password resets are handled by the account service. "
                    "Contact an administrator to reset your password."
                </p>
                <a class="login-button" href="/login">"Back to login"</a>
            </div>
        </div>
    }
}
