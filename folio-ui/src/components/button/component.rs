use dioxus::prelude::*;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button button-{variant} {class}",
            r#type: "button",
            onclick: move |e| {
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}
