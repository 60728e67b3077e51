//! Merchant dashboard: balance cards, recent charges, a quick charge form,
//! and the verification overlay with its snooze.

use api::models::{Balance, Charge, NewCharge};
use api::onboarding::VERIFY_ROUTE;
use api::UserRecord;
use dioxus::prelude::*;
use ui::{sign_out, use_api, use_auth, use_session, Navbar};

use super::TextField;

const REFRESH_POLL_SECS: u64 = 60;
const SNOOZE_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Fold the merchant record's verification status into the top-level field
/// before the snapshot is re-persisted, so every later reader sees one
/// consistent value.
fn renormalize(user: &UserRecord) -> UserRecord {
    let mut user = user.clone();
    user.verification_status = user
        .merchant_info
        .as_ref()
        .and_then(|m| m.verification_status.clone())
        .or_else(|| user.verification_status.clone());
    user
}

/// The overlay prompts for verification only when a merchant account exists
/// but is not yet verified, and no snooze is in effect.
fn overlay_for(user: &UserRecord, store: &dyn store::SessionStore) -> bool {
    if user.is_superadmin {
        return false;
    }
    if store::snooze_active_at(store, store::now_ms()) {
        return false;
    }
    user.merchant_present() && !user.verification_complete()
}

fn greeting() -> &'static str {
    // Hour-of-day from the platform clock, UTC.
    let hour = (store::now_ms() / 3_600_000.0) as u64 % 24;
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut user = use_signal(|| Option::<UserRecord>::None);
    let mut balance = use_signal(|| Option::<Balance>::None);
    let mut charges = use_signal(Vec::<Charge>::new);
    let mut overlay_active = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Quick charge form
    let amount = use_signal(String::new);
    let currency = use_signal(|| "USD".to_string());
    let description = use_signal(String::new);
    let mut charge_error = use_signal(|| Option::<String>::None);
    let mut creating_charge = use_signal(|| false);

    let load_data = {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_balance().await {
                    Ok(b) => balance.set(Some(b)),
                    Err(err) => error.set(Some(err.to_string())),
                }
                match client.get_charges().await {
                    Ok(list) => charges.set(list),
                    Err(err) => tracing::debug!("charges load failed: {err}"),
                }
            }
        }
    };

    // Seed from the persisted snapshot, re-validate against the server,
    // then load dashboard data and start the 60-second refresh poll.
    let _ = use_resource({
        let client = client.clone();
        let session = session.clone();
        let load_data = load_data.clone();
        move || {
            let client = client.clone();
            let session = session.clone();
            let load_data = load_data.clone();
            async move {
                if let Some(persisted) = session.persisted_user() {
                    overlay_active.set(overlay_for(&persisted, session.store().as_ref()));
                    user.set(Some(persisted));
                }

                if let Ok(me) = client.get_current_user().await {
                    let normalized = renormalize(&me);
                    session.persist_user(&normalized);
                    overlay_active.set(overlay_for(&normalized, session.store().as_ref()));
                    user.set(Some(normalized));
                }

                load_data().await;

                let load_data = load_data.clone();
                spawn(async move {
                    loop {
                        ui::sleep_secs(REFRESH_POLL_SECS).await;
                        load_data().await;
                    }
                });
            }
        }
    });

    let on_create_charge = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                charge_error.set(None);

                let parsed: f64 = amount().trim().parse().unwrap_or(0.0);
                if parsed <= 0.0 {
                    charge_error.set(Some("Please enter a valid amount".to_string()));
                    return;
                }
                if description().trim().is_empty() {
                    charge_error.set(Some("Please enter a description".to_string()));
                    return;
                }

                creating_charge.set(true);
                let new_charge = NewCharge {
                    amount: format!("{parsed:.2}"),
                    currency: currency(),
                    description: description().trim().to_string(),
                    idempotency_key: None,
                };
                match client.create_charge(&new_charge).await {
                    Ok(charge) => {
                        charges.with_mut(|list| list.insert(0, charge));
                    }
                    Err(err) => charge_error.set(Some(err.to_string())),
                }
                creating_charge.set(false);
            }
        }
    };

    let snooze_session = session.clone();
    let on_snooze = move |_| {
        store::snooze_for(snooze_session.store().as_ref(), SNOOZE_MS, store::now_ms());
        overlay_active.set(false);
    };

    let logout_session = session.clone();
    let on_overlay_logout = move |_| {
        sign_out(auth, &logout_session);
        logout_session.store().remove(store::USER_KEY);
        logout_session.store().remove(store::ONBOARDING_SNOOZE_KEY);
        nav.push("/login");
    };

    let greeting_text = greeting();
    let display_name = user()
        .map(|u| u.display_name())
        .unwrap_or_else(|| "there".to_string());
    let available = balance().map(|b| b.available_balance).unwrap_or(0.0);
    let pending = balance().map(|b| b.pending_balance).unwrap_or(0.0);
    let total_volume = available + pending;
    let currency_code = balance().map(|b| b.currency).unwrap_or_default();

    rsx! {
        Navbar {}
        div {
            class: if overlay_active() { "page dashboard blurred" } else { "page dashboard" },

            div {
                class: "page-header",
                h1 { "{greeting_text}, {display_name}!" }
                p { "Here's what's happening with your business today" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "stat-grid",
                div {
                    class: "card stat-card",
                    span { class: "stat-label", "Available balance" }
                    span { class: "stat-value", "{currency_code} {available:.2}" }
                }
                div {
                    class: "card stat-card",
                    span { class: "stat-label", "Pending balance" }
                    span { class: "stat-value", "{currency_code} {pending:.2}" }
                }
                div {
                    class: "card stat-card",
                    span { class: "stat-label", "Total volume" }
                    span { class: "stat-value", "{currency_code} {total_volume:.2}" }
                }
            }

            div {
                class: "dashboard-columns",
                div {
                    class: "card",
                    h2 { "Recent charges" }
                    if charges().is_empty() {
                        p { class: "empty-state", "No charges yet. Create your first one." }
                    } else {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Description" }
                                    th { "Amount" }
                                    th { "Status" }
                                    th { "Created" }
                                }
                            }
                            tbody {
                                for charge in charges().into_iter().take(8) {
                                    tr {
                                        key: "{charge.id}",
                                        td { "{charge.description}" }
                                        td { "{charge.currency} {charge.amount:.2}" }
                                        td {
                                            span { class: "badge badge-{charge.status}", "{charge.status}" }
                                        }
                                        td { class: "muted", "{charge.created_at}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "card",
                    h2 { "Quick charge" }
                    if let Some(message) = charge_error() {
                        div { class: "form-error", "{message}" }
                    }
                    form {
                        onsubmit: on_create_charge,
                        TextField { label: "Amount", value: amount, input_type: "number" }
                        TextField { label: "Currency", value: currency }
                        TextField { label: "Description", value: description }
                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: creating_charge(),
                            if creating_charge() { "Creating..." } else { "Create charge" }
                        }
                    }
                }
            }
        }

        if overlay_active() {
            div {
                class: "overlay",
                div {
                    class: "card overlay-card",
                    h2 { "Finish verifying your business" }
                    p {
                        "Your merchant account is not verified yet. Verified merchants \
                         unlock payouts and live API keys."
                    }
                    div {
                        class: "overlay-actions",
                        button {
                            class: "primary",
                            onclick: move |_| { nav.push(VERIFY_ROUTE); },
                            "Finish verification"
                        }
                        button {
                            class: "secondary",
                            onclick: on_snooze,
                            "Remind me later"
                        }
                        button {
                            class: "link-button",
                            onclick: on_overlay_logout,
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}
