//! Subscription plans: card list with create, edit and delete.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{PlanDraft, SubscriptionPlan};
use crate::util::format::{billing_period, format_currency, parse_price};

/// Plan form state: `None` id means create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct PlanForm {
    id: Option<i64>,
    draft: PlanDraft,
}

/// Trim fields and require a title plus a non-negative numeric price.
fn validate_plan(draft: &PlanDraft) -> Result<PlanDraft, &'static str> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    let price = draft.price.trim();
    match price.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => {}
        _ => return Err("Price must be a number of zero or more"),
    }
    let billing_cycle = match draft.billing_cycle.trim() {
        "" => "monthly",
        other => other,
    };
    Ok(PlanDraft {
        title: title.to_owned(),
        price: price.to_owned(),
        billing_cycle: billing_cycle.to_owned(),
        description: draft.description.trim().to_owned(),
    })
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let plans = RwSignal::new(Vec::<SubscriptionPlan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(None::<PlanForm>);
    let form_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<SubscriptionPlan>);

    let load = move || {
        loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_plans().await {
                Ok(items) => {
                    plans.set(items);
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
        let draft = match validate_plan(&current.draft) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = match current.id {
                Some(id) => crate::net::api::update_plan(id, &draft).await,
                None => crate::net::api::create_plan(&draft).await,
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
        let Some(plan) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_plan(plan.id).await {
                Ok(()) => plans.update(|list| list.retain(|p| p.id != plan.id)),
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    });

    let edit_field = move |apply: fn(&mut PlanDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| {
                if let Some(f) = f {
                    apply(&mut f.draft, value);
                }
            });
        }
    };
    let field = move |read: fn(&PlanDraft) -> String| move || form.get().map(|f| read(&f.draft)).unwrap_or_default();

    view! {
        <div class="plans-page">
            <div class="page-header">
                <h1 class="page-title">"Subscription Plans"</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| {
                        form_error.set(String::new());
                        form.set(Some(PlanForm { id: None, draft: PlanDraft { billing_cycle: "monthly".to_owned(), ..PlanDraft::default() } }));
                    }
                >
                    "+ Add Plan"
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading plans..."</p> }>
                <div class="plan-grid">
                    {move || {
                        plans
                            .get()
                            .into_iter()
                            .map(|plan| {
                                let for_edit = plan.clone();
                                let for_delete = plan.clone();
                                view! {
                                    <div class="plan-card">
                                        <h2 class="plan-card__title">{plan.title.clone()}</h2>
                                        <p class="plan-card__description">{plan.description.clone()}</p>
                                        <p class="plan-card__price">
                                            {format_currency(parse_price(&plan.price))}
                                            <span>{format!("/{}", billing_period(&plan.billing_cycle))}</span>
                                        </p>
                                        <ul class="plan-card__features">
                                            {plan
                                                .features
                                                .iter()
                                                .map(|f| view! { <li>{f.description.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                        <div class="plan-card__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    form_error.set(String::new());
                                                    form.set(Some(PlanForm { id: Some(for_edit.id), draft: PlanDraft::from(&for_edit) }));
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
                            {move || if form.get().and_then(|f| f.id).is_some() { "Edit Plan" } else { "Add Plan" }}
                        </h2>
                        <label class="dialog__label">
                            "Title"
                            <input prop:value=field(|d| d.title.clone()) on:input=edit_field(|d, v| d.title = v)/>
                        </label>
                        <label class="dialog__label">
                            "Price"
                            <input
                                inputmode="decimal"
                                prop:value=field(|d| d.price.clone())
                                on:input=edit_field(|d, v| d.price = v)
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
                            "Description"
                            <textarea
                                prop:value=field(|d| d.description.clone())
                                on:input=edit_field(|d, v| d.description = v)
                            ></textarea>
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
                    title="Delete plan"
                    message=Signal::derive(move || {
                        pending_delete.get().map(|p| format!("Delete the {} plan?", p.title)).unwrap_or_default()
                    })
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    on_confirm=on_confirm_delete
                />
            </Show>
        </div>
    }
}
