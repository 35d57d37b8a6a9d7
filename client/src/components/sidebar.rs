//! Admin navigation sidebar.
//!
//! DESIGN
//! ======
//! Links are a static table so the active-state rule (exact match for the
//! dashboard, prefix match elsewhere) is testable without a browser.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use access::matches_prefix;
use access::route::ADMIN_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Sidebar entries: label and target path.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", ADMIN_PATH),
    ("User Management", "/admin/user-management"),
    ("Subscription Plans", "/admin/subscriptions/plans"),
    ("Subscribers", "/admin/subscriptions/subscribers"),
    ("Products", "/admin/products-management"),
    ("Reviews", "/admin/review-management"),
    ("FAQ", "/admin/faq-management"),
    ("Settings", "/admin/settings"),
];

/// Whether the entry for `href` is highlighted on `pathname`.
#[must_use]
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == ADMIN_PATH {
        return access::route::normalize_path(pathname) == ADMIN_PATH;
    }
    matches_prefix(pathname, href)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    let on_logout = move |_| crate::util::auth::logout();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Admin Panel"</div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(label, href)| {
                        let href = *href;
                        view! {
                            <a href=href class=move || {
                                if is_active(href, &location.pathname.get()) {
                                    "sidebar__link sidebar__link--active"
                                } else {
                                    "sidebar__link"
                                }
                            }>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="btn sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </aside>
    }
}
