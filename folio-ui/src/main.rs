use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;
use folio::{Config, Destination};

mod api;
mod components;
mod pages;
mod session;
mod widgets;

use crate::api::ApiClient;
use crate::session::AppSessionStore;
use pages::{Dashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(Config::from_env);
    let session = use_context_provider(AppSessionStore::default);
    use_context_provider(|| ApiClient::new(config, session));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}
