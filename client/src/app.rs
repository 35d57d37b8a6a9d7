//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::route_guard::RouteGuard;
use crate::pages::{
    dashboard::DashboardPage, faqs::FaqsPage, forgot_password::ForgotPasswordPage, home::HomePage, login::LoginPage,
    plans::PlansPage, products::ProductsPage, register::RegisterPage, reviews::ReviewsPage, settings::SettingsPage,
    subscribers::SubscribersPage, users::UsersPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and mounts every route behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-dashboard.css"/>
        <Title text="Admin Dashboard"/>

        <Router>
            <RouteGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("user-management") view=UsersPage/>
                        <Route
                            path=(StaticSegment("subscriptions"), StaticSegment("plans"))
                            view=PlansPage
                        />
                        <Route
                            path=(StaticSegment("subscriptions"), StaticSegment("subscribers"))
                            view=SubscribersPage
                        />
                        <Route path=StaticSegment("products-management") view=ProductsPage/>
                        <Route path=StaticSegment("review-management") view=ReviewsPage/>
                        <Route path=StaticSegment("faq-management") view=FaqsPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </ParentRoute>
                </Routes>
            </RouteGuard>
        </Router>
    }
}
