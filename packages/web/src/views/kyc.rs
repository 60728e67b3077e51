//! KYC: verification status, business and identity profiles, uploaded
//! documents, and the submit-for-review action.

use api::models::{BusinessProfile, IdentityProfile, KycDocument, KycStatus};
use dioxus::prelude::*;
use ui::{use_api, Navbar};

use super::{SelectField, TextField};

#[component]
pub fn Kyc() -> Element {
    let client = use_api();

    let mut status = use_signal(|| Option::<KycStatus>::None);
    let mut documents = use_signal(Vec::<KycDocument>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    // Business form
    let business_name = use_signal(String::new);
    let industry = use_signal(String::new);
    let staff_size = use_signal(|| "1".to_string());
    let business_type = use_signal(|| "Starter".to_string());
    let location = use_signal(String::new);
    let phone_number = use_signal(String::new);
    let bank_account_name = use_signal(String::new);
    let bank_account_number = use_signal(String::new);
    let mut business_saving = use_signal(|| false);

    // Identity form
    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let date_of_birth = use_signal(String::new);
    let id_type = use_signal(|| "passport".to_string());
    let id_number = use_signal(String::new);
    let id_country = use_signal(String::new);
    let address_line1 = use_signal(String::new);
    let city = use_signal(String::new);
    let state_province = use_signal(String::new);
    let postal_code = use_signal(String::new);
    let country = use_signal(String::new);
    let mut identity_saving = use_signal(|| false);

    let mut submitting = use_signal(|| false);

    let reload_status = {
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                // An absent status just means KYC was never started.
                if let Ok(current) = client.get_kyc_status().await {
                    status.set(Some(current));
                }
                if let Ok(docs) = client.get_kyc_documents().await {
                    documents.set(docs);
                }
            }
        }
    };

    let _ = use_resource({
        let client = client.clone();
        let reload_status = reload_status.clone();
        move || {
            let client = client.clone();
            let reload_status = reload_status.clone();
            async move {
                reload_status().await;

                // Pre-fill forms with whatever the server already has.
                if let Ok(profile) = client.get_kyc_business().await {
                    let mut business_name = business_name;
                    let mut industry = industry;
                    let mut staff_size = staff_size;
                    let mut business_type = business_type;
                    let mut location = location;
                    let mut phone_number = phone_number;
                    let mut bank_account_name = bank_account_name;
                    let mut bank_account_number = bank_account_number;
                    business_name.set(profile.business_name);
                    industry.set(profile.industry);
                    staff_size.set(profile.staff_size.to_string());
                    business_type.set(profile.business_type);
                    location.set(profile.location);
                    phone_number.set(profile.phone_number);
                    bank_account_name.set(profile.bank_account_name);
                    bank_account_number.set(profile.bank_account_number);
                }
                if let Ok(identity) = client.get_kyc_identity().await {
                    let mut first_name = first_name;
                    let mut last_name = last_name;
                    let mut date_of_birth = date_of_birth;
                    let mut id_type = id_type;
                    let mut id_number = id_number;
                    let mut id_country = id_country;
                    let mut address_line1 = address_line1;
                    let mut city = city;
                    let mut state_province = state_province;
                    let mut postal_code = postal_code;
                    let mut country = country;
                    first_name.set(identity.first_name);
                    last_name.set(identity.last_name);
                    date_of_birth.set(identity.date_of_birth);
                    id_type.set(identity.id_type);
                    id_number.set(identity.id_number);
                    id_country.set(identity.id_country);
                    address_line1.set(identity.address_line1);
                    city.set(identity.city);
                    state_province.set(identity.state_province);
                    postal_code.set(identity.postal_code);
                    country.set(identity.country);
                }
            }
        }
    });

    let on_save_business = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                error.set(None);
                notice.set(None);
                business_saving.set(true);
                let profile = BusinessProfile {
                    business_name: business_name().trim().to_string(),
                    industry: industry().trim().to_string(),
                    staff_size: staff_size().trim().parse().unwrap_or(1),
                    business_type: business_type(),
                    location: location().trim().to_string(),
                    phone_number: phone_number().trim().to_string(),
                    bank_account_name: bank_account_name().trim().to_string(),
                    bank_account_number: bank_account_number().trim().to_string(),
                    ..BusinessProfile::default()
                };
                match client.submit_kyc_business(&profile).await {
                    Ok(_) => notice.set(Some("Business profile saved.".to_string())),
                    Err(err) => error.set(Some(err.to_string())),
                }
                business_saving.set(false);
            }
        }
    };

    let on_save_identity = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                error.set(None);
                notice.set(None);
                identity_saving.set(true);
                let identity = IdentityProfile {
                    first_name: first_name().trim().to_string(),
                    last_name: last_name().trim().to_string(),
                    date_of_birth: date_of_birth().trim().to_string(),
                    id_number: id_number().trim().to_string(),
                    id_type: id_type(),
                    id_country: id_country().trim().to_string(),
                    address_line1: address_line1().trim().to_string(),
                    address_line2: None,
                    city: city().trim().to_string(),
                    state_province: state_province().trim().to_string(),
                    postal_code: postal_code().trim().to_string(),
                    country: country().trim().to_string(),
                };
                match client.submit_kyc_identity(&identity).await {
                    Ok(_) => notice.set(Some("Identity saved.".to_string())),
                    Err(err) => error.set(Some(err.to_string())),
                }
                identity_saving.set(false);
            }
        }
    };

    let on_submit_review = {
        let client = client.clone();
        let reload_status = reload_status.clone();
        move |_| {
            let client = client.clone();
            let reload_status = reload_status.clone();
            async move {
                error.set(None);
                notice.set(None);
                submitting.set(true);
                match client.submit_kyc_for_review().await {
                    Ok(_) => {
                        notice.set(Some("Submitted for review.".to_string()));
                        reload_status().await;
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                submitting.set(false);
            }
        }
    };

    let kyc_state = status()
        .map(|s| s.kyc_status)
        .unwrap_or_else(|| "not_started".to_string());
    let rejection = status().and_then(|s| s.rejection_reason);

    rsx! {
        Navbar {}
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "KYC verification" }
                span { class: "badge badge-{kyc_state}", "{kyc_state}" }
            }

            if let Some(reason) = rejection {
                div { class: "form-error", "Rejected: {reason}" }
            }
            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }
            if let Some(message) = notice() {
                div { class: "form-notice", "{message}" }
            }

            div {
                class: "card",
                h2 { "Business profile" }
                form {
                    onsubmit: on_save_business,
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
                        }
                        TextField { label: "Location", value: location, required: true }
                        TextField { label: "Phone number", value: phone_number, required: true }
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
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: business_saving(),
                        if business_saving() { "Saving..." } else { "Save business profile" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Identity" }
                form {
                    onsubmit: on_save_identity,
                    div {
                        class: "form-grid",
                        TextField { label: "First name", value: first_name, required: true }
                        TextField { label: "Last name", value: last_name, required: true }
                        TextField {
                            label: "Date of birth",
                            value: date_of_birth,
                            input_type: "date",
                            required: true,
                        }
                        SelectField {
                            label: "ID type",
                            value: id_type,
                            options: vec![
                                "passport".to_string(),
                                "drivers_license".to_string(),
                                "national_id".to_string(),
                            ],
                        }
                        TextField { label: "ID number", value: id_number, required: true }
                        TextField { label: "ID country", value: id_country, required: true }
                        TextField { label: "Address", value: address_line1, required: true }
                        TextField { label: "City", value: city, required: true }
                        TextField { label: "State / province", value: state_province, required: true }
                        TextField { label: "Postal code", value: postal_code, required: true }
                        TextField { label: "Country", value: country, required: true }
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: identity_saving(),
                        if identity_saving() { "Saving..." } else { "Save identity" }
                    }
                }
            }

            div {
                class: "card",
                h2 { "Documents" }
                if documents().is_empty() {
                    p { class: "empty-state", "No documents uploaded yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "File" }
                                th { "Type" }
                                th { "Status" }
                                th { "Uploaded" }
                                th { "" }
                            }
                        }
                        tbody {
                            for document in documents() {
                                DocumentRow {
                                    key: "{document.id}",
                                    document,
                                    on_deleted: {
                                        let reload_status = reload_status.clone();
                                        move |_| {
                                            let reload_status = reload_status.clone();
                                            async move { reload_status().await }
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
                class: "card submit-card",
                h2 { "Ready for review?" }
                p { "Make sure your business profile, identity, and documents are complete." }
                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: on_submit_review,
                    if submitting() { "Submitting..." } else { "Submit for review" }
                }
            }
        }
    }
}

#[component]
fn DocumentRow(
    document: KycDocument,
    on_deleted: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let client = ui::use_api();
    let document_id = document.id;

    let on_delete = move |_| {
        let client = client.clone();
        async move {
            match client.delete_kyc_document(document_id).await {
                Ok(()) => on_deleted.call(()),
                Err(err) => on_error.call(err.to_string()),
            }
        }
    };

    rsx! {
        tr {
            td { "{document.file_name}" }
            td { "{document.document_type}" }
            td {
                span { class: "badge badge-{document.status}", "{document.status}" }
            }
            td { class: "muted", "{document.uploaded_at}" }
            td {
                button { class: "link-button danger", onclick: on_delete, "Delete" }
            }
        }
    }
}
