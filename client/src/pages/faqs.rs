//! FAQ management: paginated list with add, inline edit, delete and a
//! publish toggle.

#[cfg(test)]
#[path = "faqs_test.rs"]
mod faqs_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::types::{Faq, FaqDraft, Page};
use crate::util::format::format_date_short;
use crate::util::pagination::page_after_removal;

const PAGE_SIZE: u32 = 10;

fn validate_faq(draft: &FaqDraft) -> Result<FaqDraft, &'static str> {
    let question = draft.question.trim();
    let answer = draft.answer.trim();
    if question.is_empty() || answer.is_empty() {
        return Err("Question and answer are required");
    }
    Ok(FaqDraft { question: question.to_owned(), answer: answer.to_owned(), is_published: draft.is_published })
}

/// Replace the row with the server's copy after an edit.
fn replace_faq(items: &mut [Faq], updated: Faq) {
    if let Some(slot) = items.iter_mut().find(|f| f.id == updated.id) {
        *slot = updated;
    }
}

fn set_published(items: &mut [Faq], id: i64, is_published: bool) {
    if let Some(faq) = items.iter_mut().find(|f| f.id == id) {
        faq.is_published = is_published;
    }
}

#[component]
pub fn FaqsPage() -> impl IntoView {
    let listing = RwSignal::new(Page::<Faq>::default());
    let page = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let new_draft = RwSignal::new(None::<FaqDraft>);
    let editing = RwSignal::new(None::<(i64, FaqDraft)>);
    let form_error = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<Faq>);

    let load = move |target: u32| {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_faqs(target, PAGE_SIZE).await {
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

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = new_draft.get_untracked() else {
            return;
        };
        let draft = match validate_faq(&draft) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::create_faq(&draft).await {
                Ok(_) => {
                    new_draft.set(None);
                    form_error.set(String::new());
                    load(page.get_untracked());
                }
                Err(err) => form_error.set(err.user_message()),
            }
        });
    };

    let save_edit = move || {
        let Some((id, draft)) = editing.get_untracked() else {
            return;
        };
        let draft = match validate_faq(&draft) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::update_faq(id, &draft).await {
                Ok(updated) => {
                    listing.update(|l| replace_faq(&mut l.items, updated));
                    editing.set(None);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    };

    let toggle_published = move |faq: Faq| {
        let next = !faq.is_published;
        leptos::task::spawn_local(async move {
            match crate::net::api::set_faq_published(faq.id, next).await {
                Ok(()) => listing.update(|l| set_published(&mut l.items, faq.id, next)),
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(faq) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_faq(faq.id).await {
                Ok(()) => {
                    let current = page.get_untracked();
                    let next = page_after_removal(current, listing.get_untracked().items.len());
                    if next == current { load(current) } else { page.set(next) }
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    let edit_new = move |apply: fn(&mut FaqDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            new_draft.update(|d| {
                if let Some(d) = d {
                    apply(d, value);
                }
            });
        }
    };
    let edit_existing = move |apply: fn(&mut FaqDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editing.update(|e| {
                if let Some((_, d)) = e {
                    apply(d, value);
                }
            });
        }
    };

    view! {
        <div class="faqs-page">
            <div class="page-header">
                <h1 class="page-title">"FAQ Management"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        form_error.set(String::new());
                        new_draft.set(Some(FaqDraft::default()));
                    }
                >
                    "+ Add FAQ"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || new_draft.get().is_some()>
                <form class="panel faq-form" on:submit=on_create>
                    <label class="dialog__label">
                        "Question"
                        <input
                            prop:value=move || new_draft.get().map(|d| d.question).unwrap_or_default()
                            on:input=edit_new(|d, v| d.question = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Answer"
                        <textarea
                            prop:value=move || new_draft.get().map(|d| d.answer).unwrap_or_default()
                            on:input=edit_new(|d, v| d.answer = v)
                        ></textarea>
                    </label>
                    <label class="faq-form__publish">
                        <input
                            type="checkbox"
                            prop:checked=move || new_draft.get().is_some_and(|d| d.is_published)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                new_draft.update(|d| {
                                    if let Some(d) = d {
                                        d.is_published = checked;
                                    }
                                });
                            }
                        />
                        "Published"
                    </label>
                    <Show when=move || !form_error.get().is_empty()>
                        <p class="page-error">{move || form_error.get()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| new_draft.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Add"
                        </button>
                    </div>
                </form>
            </Show>

            <Show
                when=move || !loading.get() || !listing.get().items.is_empty()
                fallback=|| view! { <p>"Loading FAQs..."</p> }
            >
                <div class="faq-list">
                    {move || {
                        listing
                            .get()
                            .items
                            .into_iter()
                            .map(|faq| {
                                let id = faq.id;
                                let is_editing = move || editing.get().is_some_and(|(e, _)| e == id);
                                let for_edit = faq.clone();
                                let for_toggle = faq.clone();
                                let for_delete = faq.clone();
                                let question = faq.question.clone();
                                let answer = faq.answer.clone();
                                view! {
                                    <article class="faq-card" class:faq-card--draft=!faq.is_published>
                                        <Show
                                            when=is_editing
                                            fallback=move || {
                                                view! {
                                                    <h3 class="faq-card__question">{question.clone()}</h3>
                                                    <p class="faq-card__answer">{answer.clone()}</p>
                                                }
                                            }
                                        >
                                            <input
                                                class="faq-card__question-input"
                                                prop:value=move || editing.get().map(|(_, d)| d.question).unwrap_or_default()
                                                on:input=edit_existing(|d, v| d.question = v)
                                            />
                                            <textarea
                                                class="faq-card__answer-input"
                                                prop:value=move || editing.get().map(|(_, d)| d.answer).unwrap_or_default()
                                                on:input=edit_existing(|d, v| d.answer = v)
                                            ></textarea>
                                            <div class="dialog__actions">
                                                <button class="btn" on:click=move |_| editing.set(None)>
                                                    "Cancel"
                                                </button>
                                                <button class="btn btn--primary" on:click=move |_| save_edit()>
                                                    "Save"
                                                </button>
                                            </div>
                                        </Show>
                                        <footer class="faq-card__footer">
                                            <span class="faq-card__date">{format_date_short(&faq.updated_at)}</span>
                                            <button class="btn" on:click=move |_| toggle_published(for_toggle.clone())>
                                                {if faq.is_published { "Unpublish" } else { "Publish" }}
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| editing.set(Some((for_edit.id, FaqDraft::from(&for_edit))))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </footer>
                                    </article>
                                }
                            })
                            .collect_view()
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
                    title="Delete FAQ"
                    message=Signal::derive(move || {
                        pending_delete.get().map(|f| format!("Delete \"{}\"?", f.question)).unwrap_or_default()
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    on_confirm=on_confirm_delete
                />
            </Show>
        </div>
    }
}
