//! Glue to the host page's widget library.
//!
//! The page ships Bootstrap-style markup; this module only locates marked
//! elements and hands them to the `bootstrap` global when it is present.
//! Without the library every call degrades to a logged no-op.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// Initialize every `[data-bs-toggle="tooltip"]` element.
pub fn init_tooltips() {
    init_marked_widgets("tooltip", "Tooltip");
}

/// Initialize every `[data-bs-toggle="popover"]` element.
pub fn init_popovers() {
    init_marked_widgets("popover", "Popover");
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn init_marked_widgets(marker: &str, constructor: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => return,
        };
        let ctor = match widget_constructor(constructor) {
            Some(ctor) => ctor,
            None => {
                log::debug!("host widget library missing, skipping {marker} init");
                return;
            }
        };

        let selector = format!("[data-bs-toggle=\"{marker}\"]");
        let nodes = match document.query_selector_all(&selector) {
            Ok(nodes) => nodes,
            Err(_) => return,
        };
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                if let Err(err) =
                    js_sys::Reflect::construct(&ctor, &js_sys::Array::of1(node.as_ref()))
                {
                    log::debug!("{constructor} init failed: {err:?}");
                }
            }
        }
    }
}

/// Hide a widget-library modal by element id. Used after the simulated
/// registration completes, mirroring how the host page dismisses its
/// registration dialog.
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn hide_modal(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let element = match web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        {
            Some(element) => element,
            None => return,
        };
        let modal = match widget_constructor("Modal") {
            Some(modal) => modal,
            None => return,
        };

        // bootstrap.Modal.getInstance(element)?.hide()
        let instance = js_sys::Reflect::get(modal.as_ref(), &JsValue::from_str("getInstance"))
            .ok()
            .and_then(|get| get.dyn_into::<js_sys::Function>().ok())
            .and_then(|get| get.call1(modal.as_ref(), element.as_ref()).ok());
        let instance = match instance {
            Some(instance) if !instance.is_null() && !instance.is_undefined() => instance,
            _ => return,
        };
        if let Ok(hide) = js_sys::Reflect::get(&instance, &JsValue::from_str("hide")) {
            if let Ok(hide) = hide.dyn_into::<js_sys::Function>() {
                if let Err(err) = hide.call0(&instance) {
                    log::debug!("modal hide failed: {err:?}");
                }
            }
        }
    }
}

/// `bootstrap.<name>` when the host page loaded the library.
#[cfg(target_arch = "wasm32")]
fn widget_constructor(name: &str) -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    let bootstrap =
        js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("bootstrap")).ok()?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return None;
    }
    js_sys::Reflect::get(&bootstrap, &JsValue::from_str(name))
        .ok()?
        .dyn_into()
        .ok()
}
