//! Clipboard copy with legacy fallback.
//!
//! Browsers expose copy two ways: an asynchronous clipboard write where
//! available, and the synchronous "copy current selection" command
//! everywhere else. The capabilities are injected through
//! [`ClipboardBackend`] so the orchestration is testable without a browser.

use std::fmt;

use async_trait::async_trait;

use crate::stores::toast_store::Severity;

/// Message surfaced after a successful copy.
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

/// What a copy operation reads from.
///
/// The host page has two kinds of copy triggers: buttons carrying a
/// literal value, and `data-copy-target` buttons naming an input element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopySource {
    /// Copy this literal text.
    Text(String),
    /// Copy the current value of the input element with this id.
    Input(String),
}

/// Failure inside a clipboard capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyError {
    /// The async clipboard write rejected.
    WriteRejected(String),
    /// The legacy copy command refused or threw.
    CommandFailed(String),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::WriteRejected(reason) => write!(f, "clipboard write rejected: {reason}"),
            CopyError::CommandFailed(reason) => write!(f, "copy command failed: {reason}"),
        }
    }
}

/// Browser clipboard capabilities, injected so tests can substitute fakes.
#[async_trait(?Send)]
pub trait ClipboardBackend {
    /// Whether the async clipboard-write API exists at all.
    fn has_async_clipboard(&self) -> bool;

    /// Modern asynchronous clipboard write.
    async fn write_text(&self, text: &str) -> Result<(), CopyError>;

    /// Legacy synchronous "copy current selection" command.
    fn exec_copy_command(&self) -> Result<(), CopyError>;

    /// Resolve an input element, select its content so the legacy path has
    /// something to copy, and return its current value. `None` when the
    /// element is missing.
    fn select_input(&self, id: &str) -> Option<String>;
}

/// Copy `source`, reporting the outcome through `notify`.
///
/// Success is always surfaced. A failed fallback is only logged: the
/// original UI stayed silent there and this port keeps that asymmetry.
pub async fn copy_with<B: ClipboardBackend>(
    backend: &B,
    source: CopySource,
    notify: impl Fn(&str, Severity),
) {
    let text = match &source {
        CopySource::Text(text) => text.clone(),
        CopySource::Input(id) => match backend.select_input(id) {
            Some(value) => value,
            None => {
                log::debug!("copy target #{id} not found, ignoring");
                return;
            }
        },
    };

    if backend.has_async_clipboard() {
        match backend.write_text(&text).await {
            Ok(()) => {
                notify(COPIED_MESSAGE, Severity::Success);
                return;
            }
            Err(err) => log::error!("async clipboard write failed: {err}"),
        }
    }

    match backend.exec_copy_command() {
        Ok(()) => notify(COPIED_MESSAGE, Severity::Success),
        Err(err) => log::error!("fallback copy failed: {err}"),
    }
}

/// Fire a copy against the real browser backend. The outcome reaches the
/// user only through the toast store.
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn copy(source: CopySource) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        copy_with(&WebClipboard, source, |message, severity| {
            crate::stores::toast_store::show_toast(message, severity);
        })
        .await;
    });
}

/// [`ClipboardBackend`] over the real browser APIs.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct WebClipboard;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl ClipboardBackend for WebClipboard {
    fn has_async_clipboard(&self) -> bool {
        match web_sys::window() {
            Some(window) => js_sys::Reflect::has(
                window.navigator().as_ref(),
                &wasm_bindgen::JsValue::from_str("clipboard"),
            )
            .unwrap_or(false),
            None => false,
        }
    }

    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let window = web_sys::window()
            .ok_or_else(|| CopyError::WriteRejected("no window".to_string()))?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| CopyError::WriteRejected(format!("{err:?}")))
    }

    fn exec_copy_command(&self) -> Result<(), CopyError> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| CopyError::CommandFailed("no document".to_string()))?;
        let document: web_sys::HtmlDocument = document
            .dyn_into()
            .map_err(|_| CopyError::CommandFailed("not an HTML document".to_string()))?;
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(CopyError::CommandFailed("command refused".to_string())),
            Err(err) => Err(CopyError::CommandFailed(format!("{err:?}"))),
        }
    }

    fn select_input(&self, id: &str) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let input: web_sys::HtmlInputElement =
            document.get_element_by_id(id)?.dyn_into().ok()?;
        input.select();
        input.set_selection_range(0, 99_999).ok();
        Some(input.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    struct FakeBackend {
        has_async: bool,
        write_result: Result<(), CopyError>,
        exec_result: Result<(), CopyError>,
        inputs: HashMap<String, String>,
        writes: RefCell<Vec<String>>,
        selected: RefCell<Vec<String>>,
        exec_calls: Cell<usize>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                has_async: true,
                write_result: Ok(()),
                exec_result: Ok(()),
                inputs: HashMap::new(),
                writes: RefCell::new(Vec::new()),
                selected: RefCell::new(Vec::new()),
                exec_calls: Cell::new(0),
            }
        }

        fn with_input(mut self, id: &str, value: &str) -> Self {
            self.inputs.insert(id.to_string(), value.to_string());
            self
        }
    }

    #[async_trait(?Send)]
    impl ClipboardBackend for FakeBackend {
        fn has_async_clipboard(&self) -> bool {
            self.has_async
        }

        async fn write_text(&self, text: &str) -> Result<(), CopyError> {
            self.writes.borrow_mut().push(text.to_string());
            self.write_result.clone()
        }

        fn exec_copy_command(&self) -> Result<(), CopyError> {
            self.exec_calls.set(self.exec_calls.get() + 1);
            self.exec_result.clone()
        }

        fn select_input(&self, id: &str) -> Option<String> {
            let value = self.inputs.get(id)?.clone();
            self.selected.borrow_mut().push(id.to_string());
            Some(value)
        }
    }

    fn run_copy(backend: &FakeBackend, source: CopySource) -> Vec<(String, Severity)> {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = notifications.clone();
        futures::executor::block_on(copy_with(backend, source, move |message, severity| {
            sink.borrow_mut().push((message.to_string(), severity));
        }));
        Rc::try_unwrap(notifications).unwrap().into_inner()
    }

    #[test]
    fn async_success_notifies_once() {
        let backend = FakeBackend::new();
        let notifications = run_copy(&backend, CopySource::Text("hello".to_string()));

        assert_eq!(
            notifications,
            vec![(COPIED_MESSAGE.to_string(), Severity::Success)]
        );
        assert_eq!(*backend.writes.borrow(), vec!["hello".to_string()]);
        assert_eq!(backend.exec_calls.get(), 0);
    }

    #[test]
    fn async_failure_falls_back_and_still_reports_success() {
        let mut backend = FakeBackend::new();
        backend.write_result = Err(CopyError::WriteRejected("denied".to_string()));
        let notifications = run_copy(&backend, CopySource::Text("hello".to_string()));

        assert_eq!(backend.exec_calls.get(), 1);
        assert_eq!(
            notifications,
            vec![(COPIED_MESSAGE.to_string(), Severity::Success)]
        );
    }

    #[test]
    fn missing_async_capability_goes_straight_to_fallback() {
        let mut backend = FakeBackend::new();
        backend.has_async = false;
        let notifications = run_copy(&backend, CopySource::Text("hello".to_string()));

        assert!(backend.writes.borrow().is_empty());
        assert_eq!(backend.exec_calls.get(), 1);
        assert_eq!(notifications.len(), 1);
    }

    #[test]
    fn fallback_failure_stays_silent() {
        let mut backend = FakeBackend::new().with_input("referral-link", "https://x/ref-1");
        backend.has_async = false;
        backend.exec_result = Err(CopyError::CommandFailed("blocked".to_string()));
        let notifications = run_copy(&backend, CopySource::Input("referral-link".to_string()));

        assert_eq!(backend.exec_calls.get(), 1);
        assert!(notifications.is_empty());
    }

    #[test]
    fn missing_input_is_a_noop() {
        let backend = FakeBackend::new();
        let notifications = run_copy(&backend, CopySource::Input("nope".to_string()));

        assert!(notifications.is_empty());
        assert!(backend.writes.borrow().is_empty());
        assert_eq!(backend.exec_calls.get(), 0);
    }

    #[test]
    fn input_mode_selects_and_copies_the_current_value() {
        let backend = FakeBackend::new().with_input("referral-link", "https://x/ref-1");
        let notifications = run_copy(&backend, CopySource::Input("referral-link".to_string()));

        assert_eq!(*backend.selected.borrow(), vec!["referral-link".to_string()]);
        assert_eq!(*backend.writes.borrow(), vec!["https://x/ref-1".to_string()]);
        assert_eq!(notifications.len(), 1);
    }
}
