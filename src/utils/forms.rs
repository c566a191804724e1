//! Form helpers for the registration flow.

use crate::services::scheduler::Scheduler;

/// Simulated server round trip for the registration form.
pub const REGISTRATION_DELAY_MS: u32 = 1200;

/// Verification code auto-filled while the real sender is stubbed out.
pub const TEST_VERIFICATION_CODE: &str = "123456";

/// Value to write into a verification-code input. Only blanks are filled.
pub fn auto_fill_value(current: &str) -> Option<&'static str> {
    if current.trim().is_empty() {
        Some(TEST_VERIFICATION_CODE)
    } else {
        None
    }
}

/// Fill the verification-code input if it exists and is empty.
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn auto_fill_verification_code(input_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let element = match web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(input_id))
        {
            Some(element) => element,
            None => return,
        };
        let input: web_sys::HtmlInputElement = match element.dyn_into() {
            Ok(input) => input,
            Err(_) => return,
        };
        if let Some(code) = auto_fill_value(&input.value()) {
            input.set_value(code);
        }
    }
}

/// Run the fake registration round trip: `on_done` fires once after the
/// simulated server delay. The caller owns its own busy state.
pub fn simulate_registration<S: Scheduler>(scheduler: &S, on_done: impl FnOnce() + 'static) {
    drop(scheduler.schedule(REGISTRATION_DELAY_MS, Box::new(on_done)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scheduler::VirtualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn auto_fill_only_touches_blanks() {
        assert_eq!(auto_fill_value(""), Some(TEST_VERIFICATION_CODE));
        assert_eq!(auto_fill_value("   "), Some(TEST_VERIFICATION_CODE));
        assert_eq!(auto_fill_value("987654"), None);
    }

    #[test]
    fn registration_completes_exactly_once_after_the_delay() {
        let scheduler = VirtualScheduler::new();
        let completions = Rc::new(Cell::new(0u32));
        let counter = completions.clone();

        simulate_registration(&scheduler, move || counter.set(counter.get() + 1));

        scheduler.advance(1199.0);
        assert_eq!(completions.get(), 0);

        scheduler.advance(1.0);
        assert_eq!(completions.get(), 1);

        scheduler.advance(5000.0);
        assert_eq!(completions.get(), 1);
    }
}
