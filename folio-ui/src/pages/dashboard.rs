use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};
use folio::{
    Config, DashboardState, FetchStep, Notice, NoticeKind, ResumeService, SessionExit,
    invalidate_session, logout, resolve_identity,
};

use crate::Route;
use crate::api::ApiClient;
use crate::session::AppSessionStore;
use crate::widgets::header::{Header, HeaderAction};
use crate::widgets::profile_card::ProfileCard;
use crate::widgets::saved_resumes::{SavedResumes, SectionBody};

#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<Config>();
    let session = use_context::<AppSessionStore>();
    let client = use_context::<ApiClient>();
    let toaster = use_toast();
    let nav = navigator();
    let mut state = use_signal(DashboardState::new);

    let toast_duration = config.toast_duration;
    let policy = config.session_policy;
    let date_style = config.date_style;

    let notify = move |notice: Notice| {
        let options = ToastOptions::new().duration(toast_duration).permanent(false);
        match notice.kind {
            NoticeKind::Success => toaster.success(notice.message, options),
            NoticeKind::Error => toaster.error(notice.message, options),
        }
    };

    let leave = move |exit: SessionExit| {
        nav.push(Route::from(exit.redirect));
        if let Some(notice) = exit.notice {
            notify(notice);
        }
    };

    // Identity first, then at most one fetch
    let mount_session = session.clone();
    use_future(move || {
        let session = mount_session.clone();
        let client = client.clone();
        async move {
            let identity = resolve_identity(&session, policy);
            let step = state.write().apply_identity(identity);
            match step {
                FetchStep::Fetch => {
                    let result = client.saved_resumes().await;
                    let notice = state.write().finish_fetch(result);
                    if let Some(notice) = notice {
                        notify(notice);
                    }
                }
                FetchStep::Idle => {}
                FetchStep::Reauthenticate => leave(invalidate_session(&session)),
            }
        }
    });

    let on_header_action = move |action: HeaderAction| match action {
        HeaderAction::Home => {
            nav.push(Route::Home {});
        }
        HeaderAction::Logout => leave(logout(&session)),
    };

    let current = state.read();
    let profile = current.profile();
    let body = SectionBody::from_view(current.view(), date_style);

    rsx! {
        div { class: "dashboard",
            Header { title: "Dashboard".to_string(), on_action: on_header_action }

            div { class: "container dashboard-body",
                ProfileCard { profile }
                SavedResumes {
                    body,
                    on_upload: move |_| {
                        nav.push(Route::Home {});
                    },
                }
            }
        }
    }
}
