use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-frame",
            div { class: "spinner", role: "status", aria_label: "Loading" }
        }
    }
}
