//! Small form building blocks shared by the page views.

use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: String,
    value: Signal<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = false)] required: bool,
) -> Element {
    let mut value = value;
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                required: required,
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
        }
    }
}

#[component]
pub fn SelectField(label: String, value: Signal<String>, options: Vec<String>) -> Element {
    let mut value = value;
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt| value.set(evt.value()),
                for opt in options {
                    option { value: "{opt}", selected: opt == value(), "{opt}" }
                }
            }
        }
    }
}
