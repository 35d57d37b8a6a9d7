//! Subscribers: every payment as a row, searched and paged client-side.

#[cfg(test)]
#[path = "subscribers_test.rs"]
mod subscribers_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::net::types::Payment;
use crate::util::format::{format_currency, format_date_long, parse_price, subscriber_name, subscription_tier};
use crate::util::pagination::{slice_page, total_pages};

const PAGE_SIZE: u32 = 10;

/// One display row derived from a payment.
#[derive(Clone, Debug, PartialEq)]
struct SubscriberRow {
    id: i64,
    name: String,
    email: String,
    registered: String,
    tier: &'static str,
    amount: String,
    status: String,
    active: bool,
}

impl From<&Payment> for SubscriberRow {
    fn from(payment: &Payment) -> Self {
        let plan_price = payment.subscription.as_ref().map_or(0.0, |s| parse_price(&s.price));
        Self {
            id: payment.id,
            name: subscriber_name(&payment.user),
            email: payment.user.email.clone(),
            registered: format_date_long(&payment.payment_date),
            tier: subscription_tier(plan_price),
            amount: format_currency(parse_price(&payment.amount)),
            status: payment.status.clone(),
            active: payment.user.is_active,
        }
    }
}

/// Case-insensitive match on name, e-mail or tier; a blank query keeps all.
fn filter_rows(rows: &[SubscriberRow], query: &str) -> Vec<SubscriberRow> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&query)
                || r.email.to_lowercase().contains(&query)
                || r.tier.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[component]
pub fn SubscribersPage() -> impl IntoView {
    let rows = RwSignal::new(Vec::<SubscriberRow>::new());
    let query = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::list_payments().await {
                Ok(payments) => rows.set(payments.iter().map(SubscriberRow::from).collect()),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| filter_rows(&rows.get(), &query.get()));
    let filtered_total = Signal::derive(move || filtered.get().len() as u64);
    let pages = Signal::derive(move || total_pages(filtered_total.get(), PAGE_SIZE));

    view! {
        <div class="subscribers-page">
            <h1 class="page-title">"Subscribers"</h1>
            <div class="toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search subscribers..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
            </div>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading subscribers..."</p> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Registered"</th>
                            <th>"Subscription"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || slice_page(&filtered.get(), page.get(), PAGE_SIZE)
                            key=|row| row.id
                            children=|row| {
                                view! {
                                    <tr>
                                        <td>{row.name}</td>
                                        <td>{row.email}</td>
                                        <td>{row.registered}</td>
                                        <td>{row.tier}</td>
                                        <td>{row.amount}</td>
                                        <td>
                                            <span class="badge" class:badge--muted=!row.active>{row.status}</span>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Pagination
                    page=page
                    total_pages=pages
                    total=filtered_total
                    page_size=PAGE_SIZE
                    on_change=Callback::new(move |n| page.set(n))
                />
            </Show>
        </div>
    }
}
