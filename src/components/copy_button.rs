//! Copy-to-clipboard button.

use dioxus::prelude::*;

use crate::services::clipboard::{self, CopySource};

/// Button wired to the clipboard service.
///
/// `source` mirrors the two host-page trigger kinds: a literal value, or a
/// `data-copy-target` style reference to an input element id. The outcome
/// is reported through the toast store, never to the caller.
#[component]
pub fn CopyButton(source: CopySource, label: String) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "btn btn-outline-primary copy-btn",
            onclick: move |_| clipboard::copy(source.clone()),
            "{label}"
        }
    }
}
