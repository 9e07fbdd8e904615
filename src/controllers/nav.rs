use crate::constants::{HAMBURGER_ID, NAV_GROUP_IDS};
use crate::dom::{self, MissingElement};
use crate::model::{ToggleGroup, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the mobile hamburger navigation.
///
/// One click flips the `visible` class on the nav container, the button,
/// the nav-links list, and the hamburger icon itself as a single unit
/// within one synchronous callback.
pub fn wire(document: &web::Document) -> Result<(), MissingElement> {
    let group = Rc::new(RefCell::new(ToggleGroup::new(
        Visibility::Hidden,
        NAV_GROUP_IDS.len(),
    )));
    let doc = document.clone();
    dom::add_click_listener(document, HAMBURGER_ID, move || {
        let state = group.borrow_mut().toggle();
        for id in NAV_GROUP_IDS {
            dom::toggle_visible(&doc, id);
        }
        log::debug!(
            "mobile nav {}",
            if state.is_visible() { "open" } else { "closed" }
        );
    })
}
