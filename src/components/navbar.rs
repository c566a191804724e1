//! Top navigation bar.

use dioxus::prelude::*;

use crate::routes::Route;
use crate::utils::nav;

static LINKS: [(&str, Route); 3] = [
    ("Home", Route::Home {}),
    ("Catalog", Route::Catalog {}),
    ("Cabinet", Route::Cabinet {}),
];

#[component]
pub fn NavBar() -> Element {
    let current = use_route::<Route>().to_string();

    rsx! {
        nav {
            class: "navbar navbar-expand px-3 border-bottom",
            Link {
                class: "navbar-brand fw-bold",
                to: Route::Home {},
                "PartnerHub"
            }
            div {
                class: "navbar-nav",
                for (label, route) in LINKS.iter() {
                    Link {
                        class: if nav::is_active(&current, &route.to_string()) {
                            "nav-link active"
                        } else {
                            "nav-link"
                        },
                        to: route.clone(),
                        "{label}"
                    }
                }
            }
        }
    }
}
