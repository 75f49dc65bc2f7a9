use crate::components::button::{Button, ButtonVariant};
use dioxus::prelude::*;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, Display)]
pub enum HeaderAction {
    Home,
    Logout,
}

impl HeaderAction {
    fn variant(self) -> ButtonVariant {
        match self {
            HeaderAction::Home => ButtonVariant::Outline,
            HeaderAction::Logout => ButtonVariant::Destructive,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            HeaderAction::Home => "⌂",
            HeaderAction::Logout => "⏻",
        }
    }
}

#[component]
pub fn Header(title: String, on_action: EventHandler<HeaderAction>) -> Element {
    let actions = HeaderAction::iter().map(|action| {
        rsx! {
            Button {
                key: "{action}",
                variant: action.variant(),
                class: "with-icon",
                onclick: move |_| on_action.call(action),
                span { class: "button-icon", "{action.icon()}" }
                "{action}"
            }
        }
    });

    rsx! {
        header { class: "app-header",
            div { class: "container header-bar",
                h1 { class: "header-title", "{title}" }
                div { class: "header-actions", {actions} }
            }
        }
    }
}
