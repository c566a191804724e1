//! Floating toast overlay.
//!
//! Renders the global toast stack in the bottom-right corner and owns the
//! one-time injection of the entry/exit keyframes into `document.head`.

use dioxus::prelude::*;

use crate::stores::toast_store::{Toast, ToastPhase, TOASTS};

/// Marker id guarding the one-time keyframe injection.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STYLE_MARKER_ID: &str = "toast-animations";

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const TOAST_KEYFRAMES: &str = "\
@keyframes toast-slide-in {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes toast-slide-out {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}";

/// Inject the toast keyframes into `document.head` once per page load.
///
/// Idempotent: checks for the marker element before inserting, so repeated
/// mounts never duplicate the style node.
pub fn ensure_toast_styles() {
    #[cfg(target_arch = "wasm32")]
    {
        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => return,
        };
        if document.get_element_by_id(STYLE_MARKER_ID).is_some() {
            return;
        }
        let head = match document.head() {
            Some(head) => head,
            None => return,
        };
        let style = match document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                log::error!("failed to create toast style element: {err:?}");
                return;
            }
        };
        style.set_id(STYLE_MARKER_ID);
        style.set_text_content(Some(TOAST_KEYFRAMES));
        if let Err(err) = head.append_child(&style) {
            log::error!("failed to inject toast styles: {err:?}");
        }
    }
}

#[component]
pub fn ToastHost() -> Element {
    use_effect(|| ensure_toast_styles());

    let toasts = TOASTS.read().toasts().to_vec();

    rsx! {
        div {
            class: "toast-region",
            style: "position: fixed; bottom: 20px; right: 20px; z-index: 9999; display: flex; flex-direction: column; gap: 8px;",
            for toast in toasts {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let style = toast.severity.style();
    let animation = match toast.phase {
        ToastPhase::Visible => "toast-slide-in 0.3s ease",
        ToastPhase::Closing => "toast-slide-out 0.3s ease forwards",
    };

    rsx! {
        div {
            class: "toast-card {style.class}",
            style: "background: {style.gradient}; color: #fff; padding: 14px 18px; border-radius: 12px; box-shadow: 0 5px 15px rgba(0,0,0,.3); max-width: 320px; animation: {animation};",
            div {
                class: "d-flex align-items-center",
                i { class: "fas {style.icon} me-2" }
                span { "{toast.message}" }
            }
        }
    }
}
