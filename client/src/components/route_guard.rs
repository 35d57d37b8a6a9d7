//! Client-side route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the routed tree inside `<Router>`. On every pathname change it reads
//! the credential store, evaluates the full role-aware policy and either
//! renders its children or replaces the history entry with the redirect
//! target. The edge gate on the server has already applied the coarse
//! cookie check; this is the authoritative client-side decision.
//!
//! During SSR no effect runs, so the server always emits the placeholder and
//! never protected markup.

use access::RouteGate;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::evaluate_gate;
use crate::util::credentials::browser_store;

/// Render `children` only once the policy allows the current path.
///
/// The open/closed state is derived from the current pathname, so a new
/// path reads as checking until the effect has evaluated it.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gate = RwSignal::new(RouteGate::default());
    let location = use_location();
    let navigate = use_navigate();

    let open = Memo::new(move |_| {
        let path = location.pathname.get();
        gate.with(|gate| gate.renders_at(&path))
    });

    Effect::new(move || {
        let path = location.pathname.get();
        let session = browser_store().load();
        let next = evaluate_gate(&path, session.view());
        let target = next.status_at(&path).redirect_target();
        auth.set(AuthState::loaded(session));
        gate.set(next);
        if let Some(target) = target {
            log::debug!("route guard redirect path={path} target={target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || open.get()
            fallback=|| view! { <div class="route-guard"><p>"Checking access..."</p></div> }
        >
            {children()}
        </Show>
    }
}
