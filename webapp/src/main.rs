#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod resume;
use resume::ResumePage;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the home page is one long document whose sections are reached by #fragment links; only the
// printable resume is a separate route
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/resume")]
        ResumePage {},
}

#[component]
pub fn App() -> Element {
    // gtag is loaded at most once, and only when tracking is allowed
    use_hook(crate::common::analytics::init_analytics);

    rsx! {
        style { "{crate::common::style::MODERN_STYLES}" }
        style { "{crate::common::style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
