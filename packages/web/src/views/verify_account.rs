//! Business verification — onboarding step one.

use api::models::BusinessProfile;
use api::onboarding::MERCHANT_ROUTE;
use dioxus::prelude::*;
use ui::{use_api, use_session, Navbar};

use super::{SelectField, TextField};

#[component]
pub fn VerifyAccount() -> Element {
    let client = use_api();
    let session = use_session();
    let nav = use_navigator();

    let business_name = use_signal(String::new);
    let industry = use_signal(String::new);
    let staff_size = use_signal(|| "1".to_string());
    let business_type = use_signal(|| "Starter".to_string());
    let location = use_signal(String::new);
    let phone_number = use_signal(String::new);
    let business_email = use_signal(String::new);
    let bank_account_name = use_signal(String::new);
    let bank_account_number = use_signal(String::new);
    let bank_name = use_signal(String::new);
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

                let profile = BusinessProfile {
                    business_name: business_name().trim().to_string(),
                    industry: industry().trim().to_string(),
                    staff_size: staff_size().trim().parse().unwrap_or(1),
                    business_type: business_type(),
                    location: location().trim().to_string(),
                    phone_number: phone_number().trim().to_string(),
                    business_email: Some(business_email().trim().to_string())
                        .filter(|e| !e.is_empty()),
                    bank_account_name: bank_account_name().trim().to_string(),
                    bank_account_number: bank_account_number().trim().to_string(),
                    bank_name: Some(bank_name().trim().to_string()).filter(|b| !b.is_empty()),
                    ..BusinessProfile::default()
                };

                match client.verify_user(&profile).await {
                    Ok(_) => {
                        // The onboarding stage just advanced server-side;
                        // refresh the persisted snapshot so the guards see it.
                        if let Ok(user) = client.get_current_user().await {
                            session.persist_user(&user);
                        }
                        nav.replace(MERCHANT_ROUTE);
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
                div { class: "step active", span { class: "step-number", "1" } "Verify business" }
                div { class: "step-bar" }
                div { class: "step", span { class: "step-number", "2" } "Create account" }
            }

            div {
                class: "card",
                h2 { "Verify your business" }
                p { class: "card-subtitle", "Tell us about your business to get started" }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form {
                    onsubmit: on_submit,
                    div {
                        class: "form-grid",
                        TextField { label: "Business name", value: business_name, required: true }
                        TextField { label: "Industry", value: industry, required: true }
                        SelectField {
                            label: "Business type",
                            value: business_type,
                            options: vec!["Starter".to_string(), "Registered".to_string()],
                        }
                        TextField {
                            label: "Staff size",
                            value: staff_size,
                            input_type: "number",
                            required: true,
                        }
                        TextField { label: "Location", value: location, required: true }
                        TextField { label: "Phone number", value: phone_number, required: true }
                        TextField {
                            label: "Business email",
                            value: business_email,
                            input_type: "email",
                        }
                        TextField {
                            label: "Bank account name",
                            value: bank_account_name,
                            required: true,
                        }
                        TextField {
                            label: "Bank account number",
                            value: bank_account_number,
                            required: true,
                        }
                        TextField { label: "Bank name", value: bank_name }
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Continue" }
                    }
                }
            }
        }
    }
}
