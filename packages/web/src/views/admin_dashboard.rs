//! Admin console: merchant directory with status, KYC, and promotion
//! actions.

use api::models::AdminMerchant;
use dioxus::prelude::*;
use ui::{use_api, Navbar};

const PAGE_SIZE: u32 = 20;

#[component]
pub fn AdminDashboard() -> Element {
    let client = use_api();

    let mut merchants = use_signal(Vec::<AdminMerchant>::new);
    let mut total = use_signal(|| 0i64);
    let mut page = use_signal(|| 0u32);
    let mut search = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                loading.set(true);
                let skip = page() * PAGE_SIZE;
                let term = search();
                let term = (!term.trim().is_empty()).then(|| term.trim().to_string());
                match client
                    .admin_get_merchants(skip, PAGE_SIZE, term.as_deref())
                    .await
                {
                    Ok(result) => {
                        merchants.set(result.merchants);
                        total.set(result.total);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            }
        }
    };

    // Reloads on mount and whenever the page or search signals change.
    let _ = use_resource({
        let reload = reload.clone();
        move || {
            let _ = page();
            let _ = search();
            let reload = reload.clone();
            async move { reload().await }
        }
    });

    let page_count = (total() as u32).div_ceil(PAGE_SIZE).max(1);

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Admin — merchants" }
                div {
                    class: "admin-nav",
                    Link { to: "/admin/transactions", "Transactions" }
                    Link { to: "/admin/payouts", "Payouts" }
                    Link { to: "/admin/audit-logs", "Audit logs" }
                }
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
                        placeholder: "Search merchants...",
                        value: "{search}",
                        oninput: move |evt| {
                            page.set(0);
                            search.set(evt.value());
                        },
                    }
                    span { class: "muted", "{total()} merchants" }
                }

                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if merchants().is_empty() {
                    p { class: "empty-state", "No merchants match." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Merchant" }
                                th { "Owner" }
                                th { "Status" }
                                th { "Verification" }
                                th { "KYC" }
                                th { "Risk" }
                                th { "Balance" }
                                th { "" }
                            }
                        }
                        tbody {
                            for merchant in merchants() {
                                MerchantRow {
                                    key: "{merchant.merchant_id}",
                                    merchant,
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

#[component]
fn MerchantRow(
    merchant: AdminMerchant,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let merchant_id = merchant.merchant_id.clone();
    let owner = merchant
        .user_info
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();
    let owner_id = merchant.user_info.as_ref().map(|u| u.id);
    let suspended = merchant.account_status == "suspended";
    let kyc_pending = merchant.kyc_status == "pending";

    let on_toggle_status = {
        let client = client.clone();
        let merchant_id = merchant_id.clone();
        move |_| {
            let client = client.clone();
            let merchant_id = merchant_id.clone();
            let next = if suspended { "active" } else { "suspended" };
            async move {
                match client.admin_update_merchant_status(&merchant_id, next).await {
                    Ok(()) => on_changed.call(()),
                    Err(err) => on_error.call(err.to_string()),
                }
            }
        }
    };

    let on_approve_kyc = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                let Some(user_id) = owner_id else {
                    return;
                };
                match client.admin_approve_kyc(user_id).await {
                    Ok(()) => on_changed.call(()),
                    Err(err) => on_error.call(err.to_string()),
                }
            }
        }
    };

    let on_reject_kyc = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                let Some(user_id) = owner_id else {
                    return;
                };
                match client
                    .admin_reject_kyc(user_id, "Rejected from the admin console")
                    .await
                {
                    Ok(()) => on_changed.call(()),
                    Err(err) => on_error.call(err.to_string()),
                }
            }
        }
    };

    rsx! {
        tr {
            td {
                Link {
                    to: "/admin/merchants/{merchant.merchant_id}",
                    class: "mono",
                    "{merchant.merchant_id}"
                }
            }
            td { "{owner}" }
            td {
                span { class: "badge badge-{merchant.account_status}", "{merchant.account_status}" }
            }
            td { "{merchant.verification_status}" }
            td { "{merchant.kyc_status}" }
            td { "{merchant.risk_level}" }
            td { "{merchant.currency} {merchant.available_balance:.2}" }
            td {
                button {
                    class: "link-button",
                    onclick: on_toggle_status,
                    if suspended { "Reactivate" } else { "Suspend" }
                }
                if kyc_pending {
                    button { class: "link-button", onclick: on_approve_kyc, "Approve KYC" }
                    button { class: "link-button danger", onclick: on_reject_kyc, "Reject KYC" }
                }
            }
        }
    }
}
