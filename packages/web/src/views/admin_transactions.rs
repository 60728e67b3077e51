//! Admin view over every charge on the platform.

use api::models::Transaction;
use dioxus::prelude::*;
use ui::{use_api, Navbar};

const PAGE_SIZE: u32 = 50;

#[component]
pub fn AdminTransactions() -> Element {
    let client = use_api();

    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut total = use_signal(|| 0i64);
    let mut page = use_signal(|| 0u32);
    let mut merchant_filter = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let _ = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let skip = page() * PAGE_SIZE;
            let filter = merchant_filter();
            async move {
                loading.set(true);
                let filter = (!filter.trim().is_empty()).then(|| filter.trim().to_string());
                match client
                    .admin_get_transactions(skip, PAGE_SIZE, filter.as_deref())
                    .await
                {
                    Ok(result) => {
                        transactions.set(result.transactions);
                        total.set(result.total);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let page_count = (total() as u32).div_ceil(PAGE_SIZE).max(1);

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Admin — transactions" }
                Link { to: "/admin", class: "muted", "Back to merchants" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "card",
                div {
                    class: "card-header-row",
                    input {
                        class: "search-input",
                        placeholder: "Filter by merchant ID...",
                        value: "{merchant_filter}",
                        oninput: move |evt| {
                            page.set(0);
                            merchant_filter.set(evt.value());
                        },
                    }
                    span { class: "muted", "{total()} transactions" }
                }

                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if transactions().is_empty() {
                    p { class: "empty-state", "No transactions found." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Description" }
                                th { "User" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Created" }
                            }
                        }
                        tbody {
                            for txn in transactions() {
                                tr {
                                    key: "{txn.id}",
                                    td { class: "mono", "{txn.id}" }
                                    td { "{txn.description}" }
                                    td {
                                        if let Some(user) = txn.user.as_ref() {
                                            "{user.email}"
                                        } else {
                                            "{txn.user_id}"
                                        }
                                    }
                                    td { "{txn.currency} {txn.amount:.2}" }
                                    td {
                                        span { class: "badge badge-{txn.status}", "{txn.status}" }
                                    }
                                    td { class: "muted", "{txn.created_at}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "pager",
                    button {
                        class: "secondary",
                        disabled: page() == 0,
                        onclick: move |_| page.set(page().saturating_sub(1)),
                        "Previous"
                    }
                    span { class: "muted", "Page {page() + 1} of {page_count}" }
                    button {
                        class: "secondary",
                        disabled: page() + 1 >= page_count,
                        onclick: move |_| page.set(page() + 1),
                        "Next"
                    }
                }
            }
        }
    }
}
