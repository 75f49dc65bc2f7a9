use dioxus::prelude::*;
use folio::{DateStyle, ResumeCard, ResumeView};

use crate::components::button::{Button, ButtonVariant};
use crate::widgets::empty_state::EmptyState;
use crate::widgets::resume_card::ResumeCardView;
use crate::widgets::spinner::Spinner;

/// Body of the saved-resumes section, detached from dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Loading,
    Cards(Vec<ResumeCard>),
    Empty,
}

impl SectionBody {
    pub fn from_view(view: ResumeView<'_>, style: DateStyle) -> Self {
        match view {
            ResumeView::Loading => SectionBody::Loading,
            ResumeView::Grid(resumes) => SectionBody::Cards(ResumeCard::for_grid(resumes, style)),
            ResumeView::Empty => SectionBody::Empty,
        }
    }
}

#[component]
pub fn SavedResumes(body: SectionBody, on_upload: Option<EventHandler<MouseEvent>>) -> Element {
    let upload = move |e: MouseEvent| {
        if let Some(handler) = &on_upload {
            handler.call(e);
        }
    };

    rsx! {
        section { class: "saved-resumes",
            div { class: "section-header",
                h2 { "Saved Resumes" }
                Button { variant: ButtonVariant::Outline, onclick: upload, "Upload New Resume" }
            }
            match body {
                SectionBody::Loading => rsx! { Spinner {} },
                SectionBody::Cards(cards) => rsx! {
                    div { class: "resume-grid",
                        for card in cards {
                            ResumeCardView { key: "{card.key}", card: card.clone() }
                        }
                    }
                },
                SectionBody::Empty => rsx! {
                    EmptyState {
                        icon: "📄".to_string(),
                        description: "No resumes saved yet.".to_string(),
                        action_label: Some("Upload a Resume".to_string()),
                        on_action: Some(EventHandler::new(upload)),
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_http::api::Resume;

    fn render(body: SectionBody) -> String {
        let props = SavedResumesProps { body, on_upload: None };
        let mut dom = VirtualDom::new_with_props(SavedResumes, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn resume(id: &str, name: &str, skills: &[&str]) -> Resume {
        Resume {
            id: id.to_string(),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            saved_at: "2024-01-15T00:00:00Z".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_grid_renders_one_card_per_resume_in_order() {
        let resumes = vec![
            resume("r1", "Jane Doe", &["SQL", "Python"]),
            resume("r2", "John Roe", &[]),
        ];
        let body = SectionBody::from_view(ResumeView::Grid(&resumes), DateStyle::EnUs);

        let html = render(body);

        assert_eq!(html.matches("class=\"card resume-card\"").count(), 2);
        let jane = html.find("Jane Doe").unwrap();
        let john = html.find("John Roe").unwrap();
        assert!(jane < john);
        assert_eq!(html.matches("class=\"skill-badge\"").count(), 2);
        assert!(html.contains(">SQL<"));
        assert!(html.contains(">Python<"));
        assert!(html.contains("Saved on: 1/15/2024"));
        assert!(!html.contains("No resumes saved yet."));
    }

    #[test]
    fn test_empty_renders_call_to_action() {
        let html = render(SectionBody::from_view(ResumeView::Empty, DateStyle::EnUs));

        assert!(html.contains("No resumes saved yet."));
        assert!(html.contains("Upload a Resume"));
        assert!(!html.contains("resume-card"));
        assert!(!html.contains("class=\"spinner\""));
    }

    #[test]
    fn test_loading_renders_spinner_only() {
        let html = render(SectionBody::from_view(ResumeView::Loading, DateStyle::EnUs));

        assert!(html.contains("class=\"spinner\""));
        assert!(!html.contains("resume-card"));
        assert!(!html.contains("No resumes saved yet."));
        assert!(html.contains("Upload New Resume"));
    }
}
