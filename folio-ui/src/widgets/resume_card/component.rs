use dioxus::prelude::*;
use folio::ResumeCard;

#[component]
pub fn ResumeCardView(card: ResumeCard) -> Element {
    rsx! {
        div { class: "card resume-card",
            h3 { class: "resume-title", "{card.title}" }
            div { class: "resume-details",
                p {
                    strong { "Email:" }
                    " {card.email}"
                }
                p {
                    strong { "Phone:" }
                    " {card.phone}"
                }
                p {
                    strong { "Location:" }
                    " {card.location}"
                }
                p { class: "resume-summary",
                    strong { "Summary:" }
                    " {card.summary}"
                }
                div {
                    strong { "Skills:" }
                    div { class: "skill-badges",
                        for (idx, skill) in card.skills.iter().enumerate() {
                            span { key: "{idx}", class: "skill-badge", "{skill}" }
                        }
                    }
                }
                div { class: "resume-saved-on", "Saved on: {card.saved_on}" }
            }
        }
    }
}
