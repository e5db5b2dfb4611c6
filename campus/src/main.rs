use std::sync::Arc;

use campus_nav::prelude::{NavConfig, Role};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

// Module Declarations
mod components;
mod hooks;
mod pages;
mod route_book;
mod screen;

use hooks::use_auth_state;
use pages::{Login, Portal};
use route_book::RouteBook;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/portal/:role")]
    Portal { role: Role },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    let book = match RouteBook::load(NavConfig::default()) {
        Ok(book) => book,
        Err(err) => {
            tracing::error!("Cannot start campus portal: {err}");
            return;
        }
    };
    tracing::info!("Starting campus portal");

    dioxus::LaunchBuilder::new()
        .with_context(Arc::new(book))
        .launch(App);
}

#[component]
fn App() -> Element {
    let auth = use_auth_state();
    use_context_provider(|| auth);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
