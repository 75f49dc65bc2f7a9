use dioxus::prelude::*;

use crate::Route;

/// Landing page. Upload and sign-in flows live behind this route.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Folio" }
            }
            div { class: "page-content",
                p { "Upload a resume to get started, or review the ones you have saved." }
                Link { to: Route::Dashboard {}, class: "button button-outline", "Go to dashboard" }
            }
        }
    }
}
