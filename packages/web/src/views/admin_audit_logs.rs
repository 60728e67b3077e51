//! Admin audit trail.

use api::models::AuditLog;
use dioxus::prelude::*;
use ui::{use_api, Navbar};

const PAGE_SIZE: u32 = 50;

#[component]
pub fn AdminAuditLogs() -> Element {
    let client = use_api();

    let mut logs = use_signal(Vec::<AuditLog>::new);
    let mut total = use_signal(|| 0i64);
    let mut page = use_signal(|| 0u32);
    let mut user_filter = use_signal(String::new);
    let mut action_filter = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let _ = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let skip = page() * PAGE_SIZE;
            let user = user_filter();
            let action = action_filter();
            async move {
                loading.set(true);
                let user_id = user.trim().parse::<i64>().ok();
                let action = (!action.trim().is_empty()).then(|| action.trim().to_string());
                match client
                    .admin_get_audit_logs(skip, PAGE_SIZE, user_id, action.as_deref())
                    .await
                {
                    Ok(result) => {
                        logs.set(result.logs);
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
                h1 { "Admin — audit logs" }
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
                        placeholder: "User ID",
                        value: "{user_filter}",
                        oninput: move |evt| {
                            page.set(0);
                            user_filter.set(evt.value());
                        },
                    }
                    input {
                        class: "search-input",
                        placeholder: "Action (e.g. ADMIN_KYC_APPROVED)",
                        value: "{action_filter}",
                        oninput: move |evt| {
                            page.set(0);
                            action_filter.set(evt.value());
                        },
                    }
                    span { class: "muted", "{total()} entries" }
                }

                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if logs().is_empty() {
                    p { class: "empty-state", "No audit entries." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "When" }
                                th { "Action" }
                                th { "Resource" }
                                th { "User" }
                                th { "Merchant" }
                                th { "IP" }
                            }
                        }
                        tbody {
                            for entry in logs() {
                                tr {
                                    key: "{entry.id}",
                                    td { class: "muted", "{entry.created_at}" }
                                    td { class: "mono", "{entry.action}" }
                                    td { "{entry.resource_type}" }
                                    td {
                                        if let Some(user_id) = entry.user_id {
                                            "{user_id}"
                                        }
                                    }
                                    td {
                                        if let Some(merchant_id) = entry.merchant_id.as_ref() {
                                            span { class: "mono", "{merchant_id}" }
                                        }
                                    }
                                    td {
                                        if let Some(ip) = entry.ip_address.as_ref() {
                                            "{ip}"
                                        }
                                    }
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
