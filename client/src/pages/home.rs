//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Protection Admin"</h1>
                <p class="home-card__subtitle">"Manage users, subscriptions and content."</p>
                <div class="home-card__actions">
                    <a class="btn btn--primary" href="/login">"Login"</a>
                    <a class="btn" href="/register">"Register"</a>
                </div>
            </div>
        </div>
    }
}
