use crate::constants::{DROPDOWN_DETAILS_ID, DROPDOWN_ID, SORT_ACTIVE_ID, SORT_CATEGORY_ID, SORT_ID};
use crate::dom::{self, MissingElement};
use crate::model::{ToggleGroup, Visibility};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the listings dropdown.
///
/// The toggle element flips the details panel; the sort element flips the
/// category list and the active label as a pair, in the same callback, so
/// the two never diverge.
pub fn wire(document: &web::Document) -> Result<(), MissingElement> {
    let details = Rc::new(RefCell::new(Visibility::Hidden));
    let doc = document.clone();
    dom::add_click_listener(document, DROPDOWN_ID, move || {
        let mut state = details.borrow_mut();
        *state = state.toggled();
        dom::toggle_visible(&doc, DROPDOWN_DETAILS_ID);
        log::debug!(
            "dropdown details {}",
            if state.is_visible() { "shown" } else { "hidden" }
        );
    })?;

    let sort_pair = Rc::new(RefCell::new(ToggleGroup::new(Visibility::Hidden, 2)));
    let doc = document.clone();
    dom::add_click_listener(document, SORT_ID, move || {
        let state = sort_pair.borrow_mut().toggle();
        dom::toggle_visible(&doc, SORT_CATEGORY_ID);
        dom::toggle_visible(&doc, SORT_ACTIVE_ID);
        log::debug!("sort views now {:?}", state);
    })?;

    Ok(())
}
