//! Admin dashboard: headline numbers, monthly earnings and newest users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route of the admin area. The three data sources load
//! independently so one failing endpoint only blanks its own panel.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::types::{DashboardStats, EarningsOverview, EarningsPoint, ManagedUser};
use crate::util::format::{display_name, format_count, format_currency, format_date_long, growth_label};

/// Newest accounts shown under the chart.
const RECENT_USERS: u32 = 5;

/// Bar heights as a percentage of the best month; all zero when there is no
/// positive revenue.
fn bar_heights(points: &[EarningsPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.revenue).fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|p| if max > 0.0 { (p.revenue.max(0.0) / max) * 100.0 } else { 0.0 })
        .collect()
}

/// Sum of the series, used for the chart caption.
fn series_total(points: &[EarningsPoint]) -> f64 {
    points.iter().map(|p| p.revenue).sum()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = RwSignal::new(DashboardStats::default());
    let stats_error = RwSignal::new(None::<String>);
    let overview = RwSignal::new(EarningsOverview::default());
    let recent = RwSignal::new(Vec::<ManagedUser>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::dashboard_stats().await {
                Ok(value) => stats.set(value),
                Err(err) => stats_error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::earnings_overview().await {
                Ok(value) => overview.set(value),
                Err(err) => log::warn!("earnings overview unavailable: {err}"),
            }
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::list_users(1, RECENT_USERS, "").await {
                Ok(page) => recent.set(page.items),
                Err(err) => log::warn!("recent users unavailable: {err}"),
            }
        });
    });

    let card_value = move |pick: fn(&DashboardStats) -> String| {
        Signal::derive(move || if loading.get() { "...".to_owned() } else { pick(&stats.get()) })
    };

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <Show when=move || stats_error.get().is_some()>
                <p class="page-error">{move || stats_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="dashboard-page__cards">
                <StatCard title="Total Users" value=card_value(|s| format_count(s.total_users))/>
                <StatCard title="Subscribers" value=card_value(|s| format_count(s.subscribers))/>
                <StatCard title="Total Earning" value=card_value(|s| format_currency(s.total_earnings))/>
            </div>

            <section class="panel earnings">
                <header class="panel__header">
                    <h2>"Earnings Overview"</h2>
                    <span
                        class="earnings__growth"
                        class:earnings__growth--down=move || overview.get().growth_percentage < 0.0
                    >
                        {move || format!("{} Monthly", growth_label(overview.get().growth_percentage))}
                    </span>
                </header>
                <div class="earnings__bars">
                    {move || {
                        let data = overview.get();
                        let heights = bar_heights(&data.points);
                        data.points
                            .into_iter()
                            .zip(heights)
                            .map(|(point, height)| {
                                let title = format!("{}: {}", point.month, format_currency(point.revenue));
                                view! {
                                    <div class="earnings__bar" title=title>
                                        <span class="earnings__fill" style=format!("height: {height:.1}%")></span>
                                        <span class="earnings__month">{point.month}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <p class="panel__caption">
                    {move || format!("Total: {}", format_currency(series_total(&overview.get().points)))}
                </p>
            </section>

            <section class="panel">
                <header class="panel__header">
                    <h2>"Recent Users"</h2>
                    <a href="/admin/user-management">"View all"</a>
                </header>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|user| {
                                    view! {
                                        <tr>
                                            <td>{display_name(user.fullname.as_deref(), &user.email)}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{format_date_long(&user.date_joined)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
