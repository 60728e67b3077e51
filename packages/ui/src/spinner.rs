use dioxus::prelude::*;

/// Full-page spinner shown while the session resolves.
#[component]
pub fn FullPageSpinner() -> Element {
    rsx! {
        div {
            class: "spinner-overlay",
            div { class: "spinner" }
        }
    }
}
