/// Markup contract constants.
///
/// These ids and class names are shared with the page templates: the wiring
/// code looks elements up by id, and the stylesheet keys visibility off
/// `VISIBLE_CLASS`. They keep magic strings out of the controllers.
// Class whose presence marks an element as shown.
pub const VISIBLE_CLASS: &str = "visible";

// Dropdown controller
pub const DROPDOWN_ID: &str = "dropdown";
pub const DROPDOWN_DETAILS_ID: &str = "dropdown-details";
pub const SORT_ID: &str = "sort";
pub const SORT_ACTIVE_ID: &str = "sort-active";
pub const SORT_CATEGORY_ID: &str = "sort-category";

// Mobile navigation controller. The whole group flips in one callback.
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_ID: &str = "nav";
pub const NAV_BTN_ID: &str = "btn";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_GROUP_IDS: [&str; 4] = [NAV_ID, NAV_BTN_ID, NAV_LINKS_ID, HAMBURGER_ID];

// Alert auto-dismiss controller. The alert is optional on any given page.
pub const SUCCESS_ALERT_ID: &str = "success-alert";
pub const ALERT_DISMISS_DELAY_MS: i32 = 2000;
