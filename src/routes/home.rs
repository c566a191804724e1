//! Landing page.

use dioxus::prelude::*;

use crate::components::RegisterModal;

#[component]
pub fn Home() -> Element {
    let mut show_register = use_signal(|| false);

    rsx! {
        section {
            class: "py-5 text-center",
            h1 { class: "display-5 mb-3", "Grow with the PartnerHub program" }
            p {
                class: "lead text-muted mb-4",
                "Share your referral link, bring new customers to the catalog and earn a bonus on every purchase."
            }
            button {
                class: "btn btn-primary btn-lg",
                "data-bs-toggle": "tooltip",
                title: "Takes about a minute",
                onclick: move |_| show_register.set(true),
                "Become a partner"
            }
        }

        section {
            class: "row g-4 py-4",
            div {
                class: "col-md-4",
                h2 { class: "h5", "Invite" }
                p { class: "text-muted", "Every partner gets a personal referral link to share." }
            }
            div {
                class: "col-md-4",
                h2 { class: "h5", "Track" }
                p { class: "text-muted", "Purchases made through your link show up in the cabinet." }
            }
            div {
                class: "col-md-4",
                h2 { class: "h5", "Earn" }
                p {
                    class: "text-muted",
                    span {
                        "data-bs-toggle": "popover",
                        "data-bs-content": "Bonuses are credited once a purchase is confirmed.",
                        "Bonuses accrue automatically."
                    }
                }
            }
        }

        if show_register() {
            RegisterModal { on_close: move |_| show_register.set(false) }
        }
    }
}
