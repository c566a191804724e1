//! Partner registration modal.
//!
//! The submit is simulated: the control is disabled behind a busy label,
//! and after the fake round trip the form re-enables, a success toast
//! shows, and the dialog closes.

use dioxus::prelude::*;

use crate::utils::forms;

const MODAL_ID: &str = "registerModal";
const CODE_INPUT_ID: &str = "register-verification-code";

const SUBMIT_LABEL: &str = "Register";
const BUSY_LABEL: &str = "\u{23f3} Registering...";

#[component]
pub fn RegisterModal(on_close: EventHandler<()>) -> Element {
    let mut busy = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        busy.set(true);

        #[cfg(target_arch = "wasm32")]
        {
            use crate::services::scheduler::BrowserScheduler;
            use crate::services::widgets;
            use crate::stores::toast_store::{self, Severity};

            forms::simulate_registration(&BrowserScheduler, move || {
                toast_store::show_toast("Partner registered successfully!", Severity::Success);
                busy.set(false);
                widgets::hide_modal(MODAL_ID);
                on_close.call(());
            });
        }
    };

    rsx! {
        div {
            class: "modal-backdrop-overlay",
            style: "position: fixed; inset: 0; background: rgba(0,0,0,.5); z-index: 1050; display: flex; align-items: center; justify-content: center; padding: 16px;",
            onclick: move |_| on_close.call(()),

            div {
                id: MODAL_ID,
                class: "modal-card bg-white rounded shadow p-4",
                style: "max-width: 420px; width: 100%;",
                onclick: move |event| event.stop_propagation(),

                h2 { class: "h4 mb-3", "Become a partner" }

                form {
                    id: "registerForm",
                    onsubmit: submit,

                    div {
                        class: "mb-3",
                        label { class: "form-label", r#for: "register-name", "Name" }
                        input {
                            id: "register-name",
                            class: "form-control",
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                    div {
                        class: "mb-3",
                        label { class: "form-label", r#for: "register-email", "Email" }
                        input {
                            id: "register-email",
                            class: "form-control",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |event| email.set(event.value()),
                        }
                    }
                    div {
                        class: "mb-3",
                        label {
                            class: "form-label",
                            r#for: CODE_INPUT_ID,
                            "Verification code"
                        }
                        input {
                            id: CODE_INPUT_ID,
                            class: "form-control",
                            autocomplete: "off",
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-link btn-sm px-0",
                            onclick: move |_| forms::auto_fill_verification_code(CODE_INPUT_ID),
                            "Use test code"
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary w-100",
                        disabled: busy(),
                        if busy() { {BUSY_LABEL} } else { {SUBMIT_LABEL} }
                    }
                }
            }
        }
    }
}
