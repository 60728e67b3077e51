//! Admin merchant detail: account overview, risk assessment, and balance
//! reconciliation.

use api::models::{MerchantDetail, RiskUpdate};
use dioxus::prelude::*;
use ui::{use_api, Navbar};

use super::SelectField;

#[component]
pub fn AdminMerchantDetails(merchant_id: String) -> Element {
    let client = use_api();

    let mut detail = use_signal(|| Option::<MerchantDetail>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let risk_level = use_signal(|| "low".to_string());
    let mut saving_risk = use_signal(|| false);
    let mut syncing = use_signal(|| false);

    let reload = {
        let client = client.clone();
        let merchant_id = merchant_id.clone();
        move || {
            let client = client.clone();
            let merchant_id = merchant_id.clone();
            async move {
                match client.admin_get_merchant_details(&merchant_id).await {
                    Ok(result) => {
                        let mut risk_level = risk_level;
                        if !result.merchant.risk_level.is_empty() {
                            risk_level.set(result.merchant.risk_level.clone());
                        }
                        detail.set(Some(result));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            }
        }
    };

    let _ = use_resource({
        let reload = reload.clone();
        move || {
            let reload = reload.clone();
            async move { reload().await }
        }
    });

    let on_save_risk = {
        let client = client.clone();
        let merchant_id = merchant_id.clone();
        let reload = reload.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let merchant_id = merchant_id.clone();
            let reload = reload.clone();
            async move {
                error.set(None);
                notice.set(None);
                saving_risk.set(true);
                let update = RiskUpdate {
                    risk_level: risk_level(),
                    risk_factors: Vec::new(),
                };
                match client.admin_update_risk_assessment(&merchant_id, &update).await {
                    Ok(()) => {
                        notice.set(Some("Risk assessment updated.".to_string()));
                        reload().await;
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving_risk.set(false);
            }
        }
    };

    let on_sync_balances = {
        let client = client.clone();
        let merchant_id = merchant_id.clone();
        let reload = reload.clone();
        move |_| {
            let client = client.clone();
            let merchant_id = merchant_id.clone();
            let reload = reload.clone();
            async move {
                error.set(None);
                notice.set(None);
                syncing.set(true);
                match client.admin_sync_balances(&merchant_id).await {
                    Ok(()) => {
                        notice.set(Some("Balances re-synced from the ledger.".to_string()));
                        reload().await;
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                syncing.set(false);
            }
        }
    };

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Merchant {merchant_id}" }
                Link { to: "/admin", class: "muted", "Back to merchants" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
            if let Some(message) = notice() {
                div { class: "form-notice", "{message}" }
            }

            if let Some(current) = detail() {
                div {
                    class: "stat-grid",
                    div {
                        class: "card stat-card",
                        span { class: "stat-label", "Available" }
                        span {
                            class: "stat-value",
                            "{current.merchant.currency} {current.merchant.available_balance:.2}"
                        }
                    }
                    div {
                        class: "card stat-card",
                        span { class: "stat-label", "Pending" }
                        span {
                            class: "stat-value",
                            "{current.merchant.currency} {current.merchant.pending_balance:.2}"
                        }
                    }
                    div {
                        class: "card stat-card",
                        span { class: "stat-label", "Reserved" }
                        span {
                            class: "stat-value",
                            "{current.merchant.currency} {current.merchant.reserved_balance:.2}"
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { "Account" }
                    dl {
                        class: "detail-list",
                        dt { "Status" }
                        dd { "{current.merchant.account_status}" }
                        dt { "Verification" }
                        dd { "{current.merchant.verification_status}" }
                        dt { "KYC" }
                        dd { "{current.merchant.kyc_status}" }
                        dt { "Created" }
                        dd { "{current.merchant.created_at}" }
                        if let Some(user) = current.user.as_ref().or(current.merchant.user_info.as_ref()) {
                            dt { "Owner" }
                            dd { "{user.name} ({user.email})" }
                        }
                    }
                }
            } else {
                div {
                    class: "card",
                    p { class: "empty-state", "Loading..." }
                }
            }

            div {
                class: "card",
                h2 { "Risk assessment" }
                form {
                    class: "inline-form",
                    onsubmit: on_save_risk,
                    SelectField {
                        label: "Risk level",
                        value: risk_level,
                        options: vec!["low".to_string(), "medium".to_string(), "high".to_string()],
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving_risk(),
                        if saving_risk() { "Saving..." } else { "Save risk level" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Maintenance" }
                p { "Recompute cached balances from the ledger." }
                button {
                    class: "secondary",
                    disabled: syncing(),
                    onclick: on_sync_balances,
                    if syncing() { "Syncing..." } else { "Sync balances" }
                }
            }
        }
    }
}
