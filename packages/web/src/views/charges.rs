//! Charges: full list plus a creation form.

use api::models::{Charge, NewCharge};
use dioxus::prelude::*;
use ui::{use_api, Navbar};

use super::{SelectField, TextField};

#[component]
pub fn Charges() -> Element {
    let client = use_api();

    let mut charges = use_signal(Vec::<Charge>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let amount = use_signal(String::new);
    let currency = use_signal(|| "USD".to_string());
    let description = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(|| false);

    let _ = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.get_charges().await {
                    Ok(list) => charges.set(list),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let on_create = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                form_error.set(None);

                let parsed: f64 = amount().trim().parse().unwrap_or(0.0);
                if parsed <= 0.0 {
                    form_error.set(Some("Please enter a valid amount".to_string()));
                    return;
                }
                if description().trim().is_empty() {
                    form_error.set(Some("Please enter a description".to_string()));
                    return;
                }

                creating.set(true);
                let new_charge = NewCharge {
                    amount: format!("{parsed:.2}"),
                    currency: currency(),
                    description: description().trim().to_string(),
                    idempotency_key: None,
                };
                match client.create_charge(&new_charge).await {
                    Ok(charge) => charges.with_mut(|list| list.insert(0, charge)),
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                creating.set(false);
            }
        }
    };

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Charges" }
            }

            div {
                class: "card",
                h2 { "New charge" }
                if let Some(message) = form_error() {
                    div { class: "form-error", "{message}" }
                }
                form {
                    class: "inline-form",
                    onsubmit: on_create,
                    TextField { label: "Amount", value: amount, input_type: "number" }
                    SelectField {
                        label: "Currency",
                        value: currency,
                        options: vec![
                            "USD".to_string(),
                            "EUR".to_string(),
                            "GBP".to_string(),
                            "NGN".to_string(),
                        ],
                    }
                    TextField { label: "Description", value: description }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: creating(),
                        if creating() { "Creating..." } else { "Create" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "All charges" }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                if loading() {
                    p { class: "empty-state", "Loading..." }
                } else if charges().is_empty() {
                    p { class: "empty-state", "No charges yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Description" }
                                th { "Amount" }
                                th { "Status" }
                                th { "Created" }
                            }
                        }
                        tbody {
                            for charge in charges() {
                                tr {
                                    key: "{charge.id}",
                                    td { class: "mono", "{charge.id}" }
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
        }
    }
}
