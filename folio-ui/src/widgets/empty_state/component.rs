use dioxus::prelude::*;
use crate::components::button::{Button, ButtonVariant};

#[component]
pub fn EmptyState(
    icon: String,
    description: String,
    action_label: Option<String>,
    on_action: Option<EventHandler<MouseEvent>>
) -> Element {
    rsx! {
        div { class: "card empty-state",
            div { class: "empty-icon", "{icon}" }
            p { class: "empty-description", "{description}" }
            if let Some(label) = action_label {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |e| {
                        if let Some(handler) = &on_action {
                            handler.call(e);
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}
