//! Analytics: revenue and transaction charts bucketed client-side from the
//! charge list.

use api::models::Charge;
use dioxus::prelude::*;
use ui::charts::{bucket_charges, max_revenue, today, DayBucket};
use ui::{use_api, Navbar};

struct Bar {
    key: String,
    label: String,
    tooltip: String,
    height_pct: f64,
}

struct HBar {
    key: String,
    label: String,
    width_pct: f64,
    count: usize,
}

fn revenue_bars(buckets: &[DayBucket], show_labels: bool) -> Vec<Bar> {
    let peak = max_revenue(buckets);
    buckets
        .iter()
        .map(|b| Bar {
            key: b.date.to_string(),
            label: if show_labels { b.label.clone() } else { String::new() },
            tooltip: format!("{}: {:.2}", b.date, b.revenue),
            height_pct: (b.revenue / peak * 100.0).round(),
        })
        .collect()
}

fn transaction_bars(buckets: &[DayBucket]) -> Vec<HBar> {
    let last_week: Vec<&DayBucket> = buckets.iter().rev().take(7).rev().collect();
    let peak = last_week
        .iter()
        .map(|b| b.transactions)
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    last_week
        .iter()
        .map(|b| HBar {
            key: b.date.to_string(),
            label: b.label.clone(),
            width_pct: (b.transactions as f64 / peak * 100.0).round(),
            count: b.transactions,
        })
        .collect()
}

#[component]
pub fn Analytics() -> Element {
    let client = use_api();

    let mut charges = use_signal(Vec::<Charge>::new);
    let mut range_days = use_signal(|| 7i64);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            match client.get_charges().await {
                Ok(list) => charges.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        }
    });

    let buckets = bucket_charges(&charges(), range_days(), today());
    let total_revenue: f64 = buckets.iter().map(|b| b.revenue).sum();
    let total_transactions: usize = buckets.iter().map(|b| b.transactions).sum();
    let bars = revenue_bars(&buckets, range_days() == 7);
    let hbars = transaction_bars(&buckets);

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Analytics" }
                div {
                    class: "range-picker",
                    button {
                        class: if range_days() == 7 { "range-button active" } else { "range-button" },
                        onclick: move |_| range_days.set(7),
                        "Last 7 days"
                    }
                    button {
                        class: if range_days() == 30 { "range-button active" } else { "range-button" },
                        onclick: move |_| range_days.set(30),
                        "Last 30 days"
                    }
                    button {
                        class: if range_days() == 90 { "range-button active" } else { "range-button" },
                        onclick: move |_| range_days.set(90),
                        "Last 90 days"
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "stat-grid",
                div {
                    class: "card stat-card",
                    span { class: "stat-label", "Revenue" }
                    span { class: "stat-value", "{total_revenue:.2}" }
                }
                div {
                    class: "card stat-card",
                    span { class: "stat-label", "Transactions" }
                    span { class: "stat-value", "{total_transactions}" }
                }
            }

            div {
                class: "card",
                h2 { "Revenue" }
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if total_revenue == 0.0 {
                    p {
                        class: "empty-state",
                        "No revenue yet for this period. Create charges to see charts populate."
                    }
                } else {
                    div {
                        class: "bar-chart",
                        for bar in bars {
                            div {
                                key: "{bar.key}",
                                class: "bar-column",
                                title: "{bar.tooltip}",
                                div {
                                    class: "bar",
                                    style: "height: {bar.height_pct}%",
                                }
                                if !bar.label.is_empty() {
                                    span { class: "bar-label", "{bar.label}" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Transactions (last 7 days)" }
                div {
                    class: "hbar-list",
                    for bar in hbars {
                        div {
                            key: "{bar.key}",
                            class: "hbar-row",
                            span { class: "hbar-label", "{bar.label}" }
                            div {
                                class: "hbar-track",
                                div {
                                    class: "hbar",
                                    style: "width: {bar.width_pct}%",
                                }
                            }
                            span { class: "hbar-count", "{bar.count}" }
                        }
                    }
                }
            }
        }
    }
}
