use crate::constants::VISIBLE_CLASS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A required element id was missing from the page markup.
#[derive(Debug, thiserror::Error)]
#[error("element #{id} not found in document")]
pub struct MissingElement {
    pub id: String,
}

/// Bind a click handler to `element_id`. The closure is leaked on purpose;
/// the binding lives for the lifetime of the page.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), MissingElement> {
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| MissingElement {
            id: element_id.to_string(),
        })?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

/// Flip the `visible` class on `element_id`, if the element exists.
#[inline]
pub fn toggle_visible(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.class_list().toggle(VISIBLE_CLASS);
    }
}

/// Hide an element with an inline display override, if it exists.
#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn has_element(document: &web::Document, element_id: &str) -> bool {
    document.get_element_by_id(element_id).is_some()
}

/// Schedule a one-shot callback on the browser event loop. Never cancelled;
/// if the page unloads first the host discards it.
pub fn set_timeout(window: &web::Window, delay_ms: i32, handler: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(handler);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref::<js_sys::Function>(),
        delay_ms,
    );
}
