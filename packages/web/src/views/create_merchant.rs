//! Merchant account creation — onboarding step two.

use api::models::NewMerchantAccount;
use api::onboarding::DASHBOARD_ROUTE;
use dioxus::prelude::*;
use ui::{use_api, use_session, Navbar};

use super::SelectField;

#[component]
pub fn CreateMerchantAccount() -> Element {
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let currency = use_signal(|| "USD".to_string());
    let settlement_schedule = use_signal(|| "daily".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let on_submit = {
        let client = client.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let session = session.clone();
            async move {
                error.set(None);
                submitting.set(true);

                let account = NewMerchantAccount {
                    currency: currency(),
                    settlement_schedule: settlement_schedule(),
                };

                match client.create_merchant(&account).await {
                    Ok(_) => {
                        if let Ok(user) = client.get_current_user().await {
                            session.persist_user(&user);
                        }
                        nav.replace(DASHBOARD_ROUTE);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            }
        }
    };

    rsx! {
        Navbar {}
        div {
            class: "page onboarding-page",
            div {
                class: "onboarding-steps",
                div { class: "step done", span { class: "step-number", "1" } "Verify business" }
                div { class: "step-bar filled" }
                div { class: "step active", span { class: "step-number", "2" } "Create account" }
            }

            div {
                class: "card",
                h2 { "Create your merchant account" }
                p { class: "card-subtitle", "Choose how you want to get paid" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form {
                    onsubmit: on_submit,
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
                    SelectField {
                        label: "Settlement schedule",
                        value: settlement_schedule,
                        options: vec![
                            "daily".to_string(),
                            "weekly".to_string(),
                            "monthly".to_string(),
                        ],
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create merchant account" }
                    }
                }
            }
        }
    }
}
