//! Payouts: bank accounts on file plus payout history and creation.

use api::models::{NewPayout, NewPayoutAccount, Payout, PayoutAccount};
use dioxus::prelude::*;
use ui::{use_api, Navbar};

use super::{SelectField, TextField};

#[component]
pub fn Payouts() -> Element {
    let client = use_api();

    let mut accounts = use_signal(Vec::<PayoutAccount>::new);
    let mut payouts = use_signal(Vec::<Payout>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    // New account form
    let holder = use_signal(String::new);
    let account_number = use_signal(String::new);
    let routing_number = use_signal(String::new);
    let bank_name = use_signal(String::new);
    let bank_country = use_signal(String::new);
    let account_currency = use_signal(|| "USD".to_string());
    let account_type = use_signal(|| "business".to_string());
    let mut adding_account = use_signal(|| false);
    let mut show_account_form = use_signal(|| false);

    // New payout form
    let payout_account_id = use_signal(String::new);
    let payout_amount = use_signal(String::new);
    let payout_currency = use_signal(|| "USD".to_string());
    let mut creating_payout = use_signal(|| false);

    let reload = {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_payout_accounts().await {
                    Ok(list) => accounts.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                match client.get_payouts().await {
                    Ok(list) => payouts.set(list),
                    Err(err) => tracing::debug!("payouts load failed: {err}"),
                }
                loading.set(false);
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

    let on_add_account = {
        let client = client.clone();
        let reload = reload.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let reload = reload.clone();
            async move {
                error.set(None);
                adding_account.set(true);
                let account = NewPayoutAccount {
                    account_holder_name: holder().trim().to_string(),
                    account_number: account_number().trim().to_string(),
                    routing_number: routing_number().trim().to_string(),
                    bank_name: bank_name().trim().to_string(),
                    bank_country: bank_country().trim().to_string(),
                    currency: account_currency(),
                    account_type: account_type(),
                    is_primary: accounts().is_empty(),
                };
                match client.create_payout_account(&account).await {
                    Ok(_) => {
                        show_account_form.set(false);
                        reload().await;
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                adding_account.set(false);
            }
        }
    };

    let on_create_payout = {
        let client = client.clone();
        let reload = reload.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let reload = reload.clone();
            async move {
                error.set(None);

                let account_id: i64 = payout_account_id().trim().parse().unwrap_or(0);
                if account_id == 0 {
                    error.set(Some("Choose a payout account".to_string()));
                    return;
                }
                let amount: f64 = payout_amount().trim().parse().unwrap_or(0.0);
                if amount <= 0.0 {
                    error.set(Some("Please enter a valid amount".to_string()));
                    return;
                }

                creating_payout.set(true);
                let payout = NewPayout {
                    payout_account_id: account_id,
                    amount: format!("{amount:.2}"),
                    currency: payout_currency(),
                    description: None,
                };
                match client.create_payout(&payout).await {
                    Ok(_) => reload().await,
                    Err(err) => error.set(Some(err.to_string())),
                }
                creating_payout.set(false);
            }
        }
    };

    let account_options: Vec<String> = accounts()
        .iter()
        .map(|account| account.id.to_string())
        .collect();

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Payouts" }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "card",
                div {
                    class: "card-header-row",
                    h2 { "Payout accounts" }
                    button {
                        class: "secondary",
                        onclick: move |_| show_account_form.set(!show_account_form()),
                        if show_account_form() { "Cancel" } else { "Add account" }
                    }
                }

                if show_account_form() {
                    form {
                        onsubmit: on_add_account,
                        div {
                            class: "form-grid",
                            TextField { label: "Account holder", value: holder, required: true }
                            TextField { label: "Account number", value: account_number, required: true }
                            TextField { label: "Routing number", value: routing_number, required: true }
                            TextField { label: "Bank name", value: bank_name, required: true }
                            TextField { label: "Bank country", value: bank_country, required: true }
                            SelectField {
                                label: "Currency",
                                value: account_currency,
                                options: vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()],
                            }
                            SelectField {
                                label: "Account type",
                                value: account_type,
                                options: vec![
                                    "business".to_string(),
                                    "checking".to_string(),
                                    "savings".to_string(),
                                ],
                            }
                        }
                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: adding_account(),
                            if adding_account() { "Adding..." } else { "Add payout account" }
                        }
                    }
                }

                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if accounts().is_empty() {
                    p { class: "empty-state", "No payout accounts on file." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Holder" }
                                th { "Bank" }
                                th { "Account" }
                                th { "Status" }
                                th { "Primary" }
                                th { "" }
                            }
                        }
                        tbody {
                            for account in accounts() {
                                AccountRow {
                                    key: "{account.id}",
                                    account,
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

            div {
                class: "card",
                h2 { "Request payout" }
                form {
                    class: "inline-form",
                    onsubmit: on_create_payout,
                    SelectField {
                        label: "Account",
                        value: payout_account_id,
                        options: account_options,
                    }
                    TextField { label: "Amount", value: payout_amount, input_type: "number" }
                    SelectField {
                        label: "Currency",
                        value: payout_currency,
                        options: vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()],
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: creating_payout(),
                        if creating_payout() { "Requesting..." } else { "Request payout" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Payout history" }
                if payouts().is_empty() {
                    p { class: "empty-state", "No payouts yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Created" }
                                th { "" }
                            }
                        }
                        tbody {
                            for payout in payouts() {
                                PayoutRow {
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
fn AccountRow(
    account: PayoutAccount,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let account_id = account.id;

    let on_delete = move |_| {
        let client = client.clone();
        async move {
            match client.delete_payout_account(account_id).await {
                Ok(()) => on_changed.call(()),
                Err(err) => on_error.call(err.to_string()),
            }
        }
    };

    rsx! {
        tr {
            td { "{account.id}" }
            td { "{account.account_holder_name}" }
            td { "{account.bank_name}" }
            td { class: "mono", "****{account.account_number_last4}" }
            td {
                span { class: "badge badge-{account.verification_status}", "{account.verification_status}" }
            }
            td {
                if account.is_primary { "yes" } else { "" }
            }
            td {
                button { class: "link-button danger", onclick: on_delete, "Remove" }
            }
        }
    }
}

#[component]
fn PayoutRow(
    payout: Payout,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let payout_id = payout.id;
    let cancellable = payout.status == "pending";

    let on_cancel = move |_| {
        let client = client.clone();
        async move {
            match client.cancel_payout(payout_id).await {
                Ok(_) => on_changed.call(()),
                Err(err) => on_error.call(err.to_string()),
            }
        }
    };

    rsx! {
        tr {
            td { "{payout.id}" }
            td { "{payout.currency} {payout.amount:.2}" }
            td {
                span { class: "badge badge-{payout.status}", "{payout.status}" }
            }
            td { class: "muted", "{payout.created_at}" }
            td {
                if cancellable {
                    button { class: "link-button danger", onclick: on_cancel, "Cancel" }
                }
            }
        }
    }
}
