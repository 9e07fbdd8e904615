// Host-side tests for the markup contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [
        DROPDOWN_ID,
        DROPDOWN_DETAILS_ID,
        SORT_ID,
        SORT_ACTIVE_ID,
        SORT_CATEGORY_ID,
        HAMBURGER_ID,
        NAV_ID,
        NAV_BTN_ID,
        NAV_LINKS_ID,
        SUCCESS_ALERT_ID,
    ];
    for id in ids {
        assert!(!id.is_empty());
    }
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn nav_group_covers_all_four_elements() {
    assert_eq!(NAV_GROUP_IDS.len(), 4);
    assert!(NAV_GROUP_IDS.contains(&NAV_ID));
    assert!(NAV_GROUP_IDS.contains(&NAV_BTN_ID));
    assert!(NAV_GROUP_IDS.contains(&NAV_LINKS_ID));
    assert!(NAV_GROUP_IDS.contains(&HAMBURGER_ID));
}

#[test]
fn visible_class_matches_the_stylesheet_contract() {
    assert_eq!(VISIBLE_CLASS, "visible");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alert_delay_is_the_fixed_two_seconds() {
    assert_eq!(ALERT_DISMISS_DELAY_MS, 2000);
    assert!(ALERT_DISMISS_DELAY_MS > 0);
}
