//! Page navigation footer shared by the listing pages.

use leptos::prelude::*;

use crate::util::pagination::{MAX_VISIBLE_PAGES, can_go_to, page_window, range_label};

/// "Showing a to b of n results" plus previous/next and a window of page
/// buttons. `on_change` only fires for a different, reachable page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    page_size: u32,
    on_change: Callback<u32>,
) -> impl IntoView {
    let go = move |target: u32| {
        if can_go_to(target, total_pages.get_untracked()) && target != page.get_untracked() {
            on_change.run(target);
        }
    };

    view! {
        <div class="pagination">
            <span class="pagination__label">{move || range_label(page.get(), page_size, total.get())}</span>
            <Show when=move || { total_pages.get() > 1 }>
                <div class="pagination__controls">
                    <button
                        class="btn pagination__prev"
                        disabled=move || page.get() <= 1
                        on:click=move |_| go(page.get_untracked().saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    <For
                        each=move || page_window(page.get(), total_pages.get(), MAX_VISIBLE_PAGES)
                        key=|n| *n
                        children=move |n| {
                            view! {
                                <button
                                    class="btn pagination__page"
                                    class:pagination__page--active=move || page.get() == n
                                    on:click=move |_| go(n)
                                >
                                    {n}
                                </button>
                            }
                        }
                    />
                    <button
                        class="btn pagination__next"
                        disabled=move || page.get() >= total_pages.get()
                        on:click=move |_| go(page.get_untracked() + 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
