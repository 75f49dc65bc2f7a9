use dioxus::prelude::*;
use folio::{Avatar, ProfileSummary};

#[component]
pub fn ProfileCard(profile: ProfileSummary) -> Element {
    rsx! {
        div { class: "card profile-card",
            match &profile.avatar {
                Avatar::Picture(url) => rsx! {
                    img { class: "avatar", src: "{url}", alt: "{profile.display_name}" }
                },
                Avatar::Placeholder => rsx! { AvatarPlaceholder {} },
            }
            div {
                h2 { class: "profile-name", "{profile.display_name}" }
                p { class: "profile-email", "{profile.email}" }
            }
        }
    }
}

/// Generic user-circle glyph.
#[component]
fn AvatarPlaceholder() -> Element {
    rsx! {
        svg {
            class: "avatar-placeholder",
            width: "80",
            height: "80",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            circle { cx: "12", cy: "12", r: "10" }
            circle { cx: "12", cy: "10", r: "3" }
            path { d: "M7 20.662V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.662" }
        }
    }
}
