//! Product listings: create, edit and delete discounted products.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{Product, ProductDraft};
use crate::util::format::{billing_period, discount_label, format_currency, format_date_short, parse_price};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProductForm {
    id: Option<i64>,
    draft: ProductDraft,
}

fn is_price(raw: &str) -> bool {
    matches!(raw.trim().parse::<f64>(), Ok(p) if p.is_finite() && p >= 0.0)
}

/// Trim fields; title and both prices are required, and the new price may
/// not exceed the old one.
fn validate_product(draft: &ProductDraft) -> Result<ProductDraft, &'static str> {
    let clean = ProductDraft {
        title: draft.title.trim().to_owned(),
        description: draft.description.trim().to_owned(),
        old_price: draft.old_price.trim().to_owned(),
        new_price: draft.new_price.trim().to_owned(),
        billing_cycle: if draft.billing_cycle.trim().is_empty() {
            "monthly".to_owned()
        } else {
            draft.billing_cycle.trim().to_owned()
        },
        add_link: draft.add_link.trim().to_owned(),
    };
    if clean.title.is_empty() {
        return Err("Title is required");
    }
    if !is_price(&clean.old_price) || !is_price(&clean.new_price) {
        return Err("Prices must be numbers of zero or more");
    }
    if parse_price(&clean.new_price) > parse_price(&clean.old_price) {
        return Err("New price cannot be higher than the old price");
    }
    Ok(clean)
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(None::<ProductForm>);
    let form_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Product>);

    let load = move || {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_products().await {
                Ok(items) => {
                    products.set(items);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };
    Effect::new(move || load());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else {
            return;
        };
        let draft = match validate_product(&current.draft) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = match current.id {
                Some(id) => crate::net::api::update_product(id, &draft).await,
                None => crate::net::api::create_product(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    form.set(None);
                    load();
                }
                Err(err) => form_error.set(err.user_message()),
            }
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_product(product.id).await {
                Ok(()) => products.update(|list| list.retain(|p| p.id != product.id)),
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    let edit_field = move |apply: fn(&mut ProductDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| {
                if let Some(f) = f {
                    apply(&mut f.draft, value);
                }
            });
        }
    };
    let field = move |read: fn(&ProductDraft) -> String| move || form.get().map(|f| read(&f.draft)).unwrap_or_default();

    view! {
        <div class="products-page">
            <div class="page-header">
                <h1 class="page-title">"Products"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        form_error.set(String::new());
                        form.set(Some(ProductForm::default()));
                    }
                >
                    "+ Add Product"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading products..."</p> }>
                <div class="product-grid">
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| {
                                let for_edit = product.clone();
                                let for_delete = product.clone();
                                view! {
                                    <div class="product-card">
                                        <span class="product-card__badge">
                                            {discount_label(&product.old_price, &product.new_price)}
                                        </span>
                                        <h2 class="product-card__title">{product.title.clone()}</h2>
                                        <p class="product-card__description">{product.description.clone()}</p>
                                        <p class="product-card__price">
                                            <s>{format_currency(parse_price(&product.old_price))}</s>
                                            " "
                                            <strong>{format_currency(parse_price(&product.new_price))}</strong>
                                            {format!("/{}", billing_period(&product.billing_cycle))}
                                        </p>
                                        <p class="product-card__meta">{format_date_short(&product.created_at)}</p>
                                        {(!product.add_link.is_empty())
                                            .then(|| {
                                                view! {
                                                    <a class="product-card__link" href=product.add_link.clone() target="_blank" rel="noopener">
                                                        "Open link"
                                                    </a>
                                                }
                                            })}
                                        <div class="product-card__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    form_error.set(String::new());
                                                    form.set(Some(ProductForm { id: Some(for_edit.id), draft: ProductDraft::from(&for_edit) }));
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || form.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| form.set(None)>
                    <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=on_save>
                        <h2 class="dialog__title">
                            {move || if form.get().and_then(|f| f.id).is_some() { "Edit Product" } else { "Add Product" }}
                        </h2>
                        <label class="dialog__label">
                            "Title"
                            <input prop:value=field(|d| d.title.clone()) on:input=edit_field(|d, v| d.title = v)/>
                        </label>
                        <label class="dialog__label">
                            "Description"
                            <textarea
                                prop:value=field(|d| d.description.clone())
                                on:input=edit_field(|d, v| d.description = v)
                            ></textarea>
                        </label>
                        <label class="dialog__label">
                            "Old price"
                            <input
                                inputmode="decimal"
                                prop:value=field(|d| d.old_price.clone())
                                on:input=edit_field(|d, v| d.old_price = v)
                            />
                        </label>
                        <label class="dialog__label">
                            "New price"
                            <input
                                inputmode="decimal"
                                prop:value=field(|d| d.new_price.clone())
                                on:input=edit_field(|d, v| d.new_price = v)
                            />
                        </label>
                        <label class="dialog__label">
                            "Billing cycle"
                            <select
                                prop:value=field(|d| d.billing_cycle.clone())
                                on:change=edit_field(|d, v| d.billing_cycle = v)
                            >
                                <option value="monthly">"Monthly"</option>
                                <option value="yearly">"Yearly"</option>
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Link"
                            <input
                                type="url"
                                prop:value=field(|d| d.add_link.clone())
                                on:input=edit_field(|d, v| d.add_link = v)
                            />
                        </label>
                        <Show when=move || !form_error.get().is_empty()>
                            <p class="page-error">{move || form_error.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| form.set(None)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete product"
                    message=Signal::derive(move || {
                        pending_delete.get().map(|p| format!("Delete {}?", p.title)).unwrap_or_default()
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    on_confirm=on_confirm_delete
                />
            </Show>
        </div>
    }
}
