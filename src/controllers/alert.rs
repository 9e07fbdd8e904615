use crate::constants::{ALERT_DISMISS_DELAY_MS, SUCCESS_ALERT_ID};
use crate::dom;
use crate::model::AlertDismiss;
use web_sys as web;

/// Schedule the one-shot dismissal of the success alert.
///
/// The alert is optional on any given page: presence is checked when the
/// timer fires, not at wiring time, so an absent element is a quiet no-op
/// and never affects the other controllers.
pub fn wire(window: &web::Window, document: &web::Document) {
    let mut dismiss = AlertDismiss::new(ALERT_DISMISS_DELAY_MS);
    let scheduled_at = js_sys::Date::now();
    let doc = document.clone();
    dom::set_timeout(window, ALERT_DISMISS_DELAY_MS, move || {
        let elapsed_ms = (js_sys::Date::now() - scheduled_at).round() as i32;
        let present = dom::has_element(&doc, SUCCESS_ALERT_ID);
        if dismiss.due(elapsed_ms) && dismiss.fire(present) {
            dom::hide(&doc, SUCCESS_ALERT_ID);
            log::debug!("success alert dismissed after {elapsed_ms} ms");
        }
    });
}
