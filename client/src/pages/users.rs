//! User management: paginated account list with search, block/unblock and
//! removal.
//!
//! DESIGN
//! ======
//! Search input is debounced by 500 ms; each keystroke issues a new ticket
//! and only the latest ticket applies its term. Fetches carry their own
//! ticket so a slow response for an older page or term is dropped.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::types::{ManagedUser, Page};
use crate::util::format::{display_name, format_date_long};
use crate::util::pagination::page_after_removal;
use crate::util::sequence::{Sequence, issue_ticket};

const PAGE_SIZE: u32 = 10;
#[cfg(feature = "hydrate")]
const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Optimistically flip `is_active` for one row.
fn set_active(users: &mut [ManagedUser], id: i64, active: bool) {
    if let Some(user) = users.iter_mut().find(|u| u.id == id) {
        user.is_active = Some(active);
    }
}

fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Blocked" }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let listing = RwSignal::new(Page::<ManagedUser>::default());
    let page = RwSignal::new(1_u32);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let pending_removal = RwSignal::new(None::<ManagedUser>);
    let search_seq = StoredValue::new(Sequence::default());
    let fetch_seq = StoredValue::new(Sequence::default());

    let load = move |target_page: u32, term: String| {
        let ticket = issue_ticket(fetch_seq);
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_users(target_page, PAGE_SIZE, &term).await;
            if !fetch_seq.get_value().is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => {
                    listing.set(data);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    Effect::new(move || load(page.get(), search.get()));

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search_input.set(value);
        let ticket = issue_ticket(search_seq);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
            if search_seq.get_value().is_current(ticket) {
                page.set(1);
                search.set(search_input.get_untracked().trim().to_owned());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    let toggle_block = move |user: ManagedUser| {
        let id = user.id;
        let block = user.active();
        leptos::task::spawn_local(async move {
            let result = if block {
                crate::net::api::block_user(id).await
            } else {
                crate::net::api::unblock_user(id).await
            };
            match result {
                Ok(message) => {
                    listing.update(|l| set_active(&mut l.items, id, !block));
                    notice.set(Some(message));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    };

    let on_confirm_remove = Callback::new(move |()| {
        let Some(user) = pending_removal.get_untracked() else {
            return;
        };
        pending_removal.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_user(user.id).await {
                Ok(()) => {
                    notice.set(Some("User removed".to_owned()));
                    let current = page.get_untracked();
                    let next = page_after_removal(current, listing.get_untracked().items.len());
                    if next == current {
                        load(current, search.get_untracked());
                    } else {
                        page.set(next);
                    }
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });
    let on_cancel_remove = Callback::new(move |()| pending_removal.set(None));

    view! {
        <div class="users-page">
            <h1 class="page-title">"User Management"</h1>
            <div class="toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search users..."
                    prop:value=move || search_input.get()
                    on:input=on_search_input
                />
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="page-notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get() || !listing.get().items.is_empty()
                fallback=|| view! { <p>"Loading users..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Joined"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = listing.get().items;
                            if rows.is_empty() {
                                return view! { <tr><td colspan="5">"No users found"</td></tr> }.into_any();
                            }
                            rows.into_iter()
                                .map(|user| {
                                    let active = user.active();
                                    let for_toggle = user.clone();
                                    let for_remove = user.clone();
                                    view! {
                                        <tr>
                                            <td>{display_name(user.fullname.as_deref(), &user.email)}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{format_date_long(&user.date_joined)}</td>
                                            <td>
                                                <span class="badge" class:badge--muted=!active>{status_label(active)}</span>
                                            </td>
                                            <td class="table__actions">
                                                <button class="btn" on:click=move |_| toggle_block(for_toggle.clone())>
                                                    {if active { "Block" } else { "Unblock" }}
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| pending_removal.set(Some(for_remove.clone()))
                                                >
                                                    "Remove"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
                <Pagination
                    page=page
                    total_pages=Signal::derive(move || listing.get().total_pages)
                    total=Signal::derive(move || listing.get().total)
                    page_size=PAGE_SIZE
                    on_change=Callback::new(move |n| page.set(n))
                />
            </Show>
            <Show when=move || pending_removal.get().is_some()>
                <ConfirmDialog
                    title="Remove user"
                    message=Signal::derive(move || {
                        pending_removal
                            .get()
                            .map(|u| format!("Remove {}? This cannot be undone.", display_name(u.fullname.as_deref(), &u.email)))
                            .unwrap_or_default()
                    })
                    confirm_label="Remove"
                    on_cancel=on_cancel_remove
                    on_confirm=on_confirm_remove
                />
            </Show>
        </div>
    }
}
