use dioxus::prelude::*;

pub mod cabinet;
pub mod catalog;
pub mod home;

use cabinet::Cabinet;
use catalog::Catalog;
use home::Home;

use crate::components::NavBar;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/catalog")]
        Catalog {},

        #[route("/cabinet")]
        Cabinet {},
}

#[component]
fn Layout() -> Element {
    // Hand marked elements to the host widget library after each page
    // lands in the DOM, the way the original ran its init on every load.
    let route = use_route::<Route>();
    use_effect(use_reactive(&route, |_| {
        crate::services::widgets::init_tooltips();
        crate::services::widgets::init_popovers();
    }));

    rsx! {
        NavBar {}
        main {
            class: "container py-4",
            Outlet::<Route> {}
        }
    }
}
