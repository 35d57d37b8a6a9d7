//! Chrome shared by every `/admin` page: sidebar, header, routed outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;

#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="admin-layout">
            <Sidebar/>
            <div class="admin-layout__main">
                <header class="admin-layout__header toolbar">
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || auth.get().display_name()}</span>
                </header>
                <main class="admin-layout__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
