//! Admin payout queue with manual processing.

use api::models::Payout;
use dioxus::prelude::*;
use ui::{use_api, Navbar};

#[component]
pub fn AdminPayouts() -> Element {
    let client = use_api();

    let mut payouts = use_signal(Vec::<Payout>::new);
    let mut status_filter = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            let filter = status_filter();
            async move {
                loading.set(true);
                let filter = (!filter.is_empty()).then_some(filter);
                match client.admin_list_payouts(filter.as_deref()).await {
                    Ok(list) => payouts.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            }
        }
    };

    let _ = use_resource({
        let reload = reload.clone();
        move || {
            let _ = status_filter();
            let reload = reload.clone();
            async move { reload().await }
        }
    });

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Admin — payouts" }
                Link { to: "/admin", class: "muted", "Back to merchants" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "card",
                div {
                    class: "card-header-row",
                    select {
                        value: "{status_filter}",
                        onchange: move |evt| status_filter.set(evt.value()),
                        option { value: "", "All statuses" }
                        option { value: "pending", "Pending" }
                        option { value: "processing", "Processing" }
                        option { value: "paid", "Paid" }
                        option { value: "failed", "Failed" }
                    }
                }

                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if payouts().is_empty() {
                    p { class: "empty-state", "No payouts in this state." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Merchant" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Created" }
                                th { "" }
                            }
                        }
                        tbody {
                            for payout in payouts() {
                                AdminPayoutRow {
                                    key: "{payout.id}",
                                    payout,
                                    on_changed: {
                                        let reload = reload.clone();
                                        move |_| {
                                            let reload = reload.clone();
                                            async move { reload().await }
                                        }
                                    },
                                    on_error: move |message| error.set(Some(message)),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminPayoutRow(
    payout: Payout,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let payout_id = payout.id;
    let processable = payout.status == "pending" || payout.status == "failed";
    let failure = payout.failure_reason.clone().unwrap_or_default();

    let on_process = move |_| {
        let client = client.clone();
        async move {
            match client.process_payout_manual(payout_id).await {
                Ok(_) => on_changed.call(()),
                Err(err) => on_error.call(err.to_string()),
            }
        }
    };

    rsx! {
        tr {
            td { "{payout.id}" }
            td { class: "mono", "{payout.merchant_id}" }
            td { "{payout.currency} {payout.amount:.2}" }
            td {
                span { class: "badge badge-{payout.status}", "{payout.status}" }
                if !failure.is_empty() {
                    span { class: "muted", " {failure}" }
                }
            }
            td { class: "muted", "{payout.created_at}" }
            td {
                if processable {
                    button { class: "link-button", onclick: on_process, "Process now" }
                }
            }
        }
    }
}
