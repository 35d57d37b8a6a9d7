//! Review moderation: paginated list with delete.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::types::{Page, Review};
use crate::util::format::{format_date_short, star_count};
use crate::util::pagination::page_after_removal;

const PAGE_SIZE: u32 = 5;

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let listing = RwSignal::new(Page::<Review>::default());
    let page = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<Review>);

    let load = move |target: u32| {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_reviews(target, PAGE_SIZE).await {
                Ok(data) => {
                    listing.set(data);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };
    Effect::new(move || load(page.get()));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(review) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_review(review.id).await {
                Ok(()) => {
                    let current = page.get_untracked();
                    let next = page_after_removal(current, listing.get_untracked().items.len());
                    if next == current { load(current) } else { page.set(next) }
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    view! {
        <div class="reviews-page">
            <h1 class="page-title">"Review Management"</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get() || !listing.get().items.is_empty()
                fallback=|| view! { <p>"Loading reviews..."</p> }
            >
                <div class="review-list">
                    {move || {
                        let items = listing.get().items;
                        if items.is_empty() {
                            return view! { <p class="review-list__empty">"No reviews yet"</p> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|review| {
                                let stars = star_count(&review.rating);
                                let for_delete = review.clone();
                                view! {
                                    <article class="review-card">
                                        <header class="review-card__header">
                                            <span class="review-card__author">{review.reviewer_name.clone()}</span>
                                            <span class="review-card__date">{format_date_short(&review.created)}</span>
                                        </header>
                                        <p class="review-card__stars" aria-label=format!("{stars} stars")>
                                            {"★".repeat(stars)}
                                            <span class="review-card__count">{format!(" ({stars} stars)")}</span>
                                        </p>
                                        <p class="review-card__body">{review.body.clone()}</p>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
                <Pagination
                    page=page
                    total_pages=Signal::derive(move || listing.get().total_pages)
                    total=Signal::derive(move || listing.get().total)
                    page_size=PAGE_SIZE
                    on_change=Callback::new(move |n| page.set(n))
                />
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete review"
                    message=Signal::derive(move || {
                        pending_delete
                            .get()
                            .map(|r| format!("Delete the review by {}?", r.reviewer_name))
                            .unwrap_or_default()
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    on_confirm=on_confirm_delete
                />
            </Show>
        </div>
    }
}
